//! # Diagram Data
//!
//! Renderer-facing geometry for the elevation, cross-section and deflection
//! pictures of a TCC element. Nothing here draws; a front-end turns these
//! values into canvas paths, SVG or a plot.
//!
//! Coordinates are SI metres. Elevation `x` runs from the left support;
//! cross-section `y` runs upward from the timber base.

use serde::{Deserialize, Serialize};

use crate::calculations::deflection::DeflectionPoint;
use crate::calculations::tcc::{TccInput, TccResult};

/// Most connector positions a layout will list. Dense spacing (for example
/// a smeared connection modelled with `s` in micrometres) is drawn as a
/// continuous band instead.
pub const MAX_CONNECTOR_POSITIONS: usize = 1_000;

/// Side view of the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationLayout {
    pub span_m: f64,
    /// Position of the point load (mid-span)
    pub load_x_m: f64,
    pub point_load_n: f64,
    pub spacing_m: f64,
    /// floor(L / s), saturating at `usize::MAX`
    pub connector_count: usize,
    pub h_timber_m: f64,
    pub h_concrete_m: f64,
}

impl ElevationLayout {
    pub fn from_input(input: &TccInput) -> Self {
        let span = input.load.span_m;
        let spacing = input.connection.spacing_m;
        ElevationLayout {
            span_m: span,
            load_x_m: span / 2.0,
            point_load_n: input.load.point_load_n,
            spacing_m: spacing,
            connector_count: (span / spacing).floor() as usize,
            h_timber_m: input.geometry.h_timber_m,
            h_concrete_m: input.geometry.h_concrete_m,
        }
    }

    /// Connector positions `s/2 + i·s`, at most [`MAX_CONNECTOR_POSITIONS`] of them
    pub fn connector_positions(&self) -> impl Iterator<Item = f64> + '_ {
        let shown = self.connector_count.min(MAX_CONNECTOR_POSITIONS);
        (0..shown).map(move |i| self.spacing_m / 2.0 + i as f64 * self.spacing_m)
    }

    /// True when [`Self::connector_positions`] lists fewer connectors than the span holds
    pub fn connectors_truncated(&self) -> bool {
        self.connector_count > MAX_CONNECTOR_POSITIONS
    }
}

/// A rectangle in cross-section coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionRect {
    /// Width, centred on the section axis
    pub width_m: f64,
    /// Elevation of the bottom edge above the timber base
    pub y_bottom_m: f64,
    pub height_m: f64,
}

impl SectionRect {
    pub fn y_top_m(&self) -> f64 {
        self.y_bottom_m + self.height_m
    }

    pub fn centroid_y_m(&self) -> f64 {
        self.y_bottom_m + 0.5 * self.height_m
    }
}

/// End view of the composite section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionLayout {
    pub timber: SectionRect,
    pub concrete: SectionRect,
    /// Elevation of the timber/concrete interface
    pub interface_y_m: f64,
    /// Elevation of the composite neutral axis
    pub neutral_axis_y_m: f64,
}

impl CrossSectionLayout {
    pub fn from_calc(input: &TccInput, result: &TccResult) -> Self {
        let g = &input.geometry;
        let timber = SectionRect {
            width_m: g.b_timber_m,
            y_bottom_m: 0.0,
            height_m: g.h_timber_m,
        };
        let concrete = SectionRect {
            width_m: g.b_concrete_m,
            y_bottom_m: g.h_timber_m,
            height_m: g.h_concrete_m,
        };
        CrossSectionLayout {
            timber,
            concrete,
            interface_y_m: g.h_timber_m,
            neutral_axis_y_m: result.composite.a_timber_m + 0.5 * g.h_timber_m,
        }
    }

    /// Overall section depth
    pub fn total_height_m(&self) -> f64 {
        self.concrete.y_top_m()
    }
}

/// Everything a renderer needs for the three pictures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramData {
    pub label: String,
    pub elevation: ElevationLayout,
    pub cross_section: CrossSectionLayout,
    /// Capped list from [`ElevationLayout::connector_positions`]
    pub connector_positions_m: Vec<f64>,
    pub deflection: Vec<DeflectionPoint>,
    pub max_deflection_m: f64,
}

impl DiagramData {
    pub fn from_calc(input: &TccInput, result: &TccResult) -> Self {
        let elevation = ElevationLayout::from_input(input);
        if elevation.connectors_truncated() {
            tracing::debug!(
                count = elevation.connector_count,
                shown = MAX_CONNECTOR_POSITIONS,
                "connector positions truncated"
            );
        }
        Self {
            label: input.label.clone(),
            connector_positions_m: elevation.connector_positions().collect(),
            elevation,
            cross_section: CrossSectionLayout::from_calc(input, result),
            deflection: result.deflection.points().collect(),
            max_deflection_m: result.max_deflection(),
        }
    }

    /// Largest absolute deflection, for scaling the deflected shape
    pub fn deflection_scale_m(&self) -> f64 {
        self.deflection
            .iter()
            .map(|p| p.deflection_m.abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;
    use crate::settings::CalcSettings;

    fn example() -> (TccInput, TccResult) {
        let input = TccInput::example();
        let result = calculate(&input, &CalcSettings::default()).unwrap();
        (input, result)
    }

    #[test]
    fn test_connector_positions() {
        let (input, _) = example();
        let elevation = ElevationLayout::from_input(&input);
        assert_eq!(elevation.connector_count, 2);
        let xs: Vec<f64> = elevation.connector_positions().collect();
        assert_eq!(xs.len(), 2);
        assert!((xs[0] - 0.4).abs() < 1e-12);
        assert!((xs[1] - 1.2).abs() < 1e-12);
        assert_eq!(elevation.load_x_m, 0.8);
    }

    #[test]
    fn test_connector_count_floors() {
        let mut input = TccInput::example();
        input.connection.spacing_m = 0.5;
        let elevation = ElevationLayout::from_input(&input);
        assert_eq!(elevation.connector_count, 3);
        assert!(elevation.connector_positions().all(|x| x > 0.0 && x < input.load.span_m));

        input.connection.spacing_m = 2.0;
        assert_eq!(ElevationLayout::from_input(&input).connector_count, 0);
    }

    #[test]
    fn test_dense_connectors_are_capped() {
        let mut input = TccInput::example();
        input.connection.spacing_m = 1e-9;
        let elevation = ElevationLayout::from_input(&input);
        assert!(elevation.connector_count > 1_000_000_000);
        assert!(elevation.connectors_truncated());
        assert_eq!(elevation.connector_positions().count(), MAX_CONNECTOR_POSITIONS);

        let result = calculate(&input, &CalcSettings::default()).unwrap();
        let data = DiagramData::from_calc(&input, &result);
        assert_eq!(data.connector_positions_m.len(), MAX_CONNECTOR_POSITIONS);
        assert!(data.connector_positions_m.iter().all(|&x| x > 0.0 && x < 1e-5));

        input.connection.spacing_m = f64::MIN_POSITIVE;
        let elevation = ElevationLayout::from_input(&input);
        assert_eq!(elevation.connector_count, usize::MAX);
        assert_eq!(elevation.connector_positions().count(), MAX_CONNECTOR_POSITIONS);
    }

    #[test]
    fn test_cross_section_layout() {
        let (input, result) = example();
        let cs = CrossSectionLayout::from_calc(&input, &result);
        assert_eq!(cs.interface_y_m, 0.16);
        assert!((cs.total_height_m() - 0.26).abs() < 1e-12);
        assert_eq!(cs.concrete.y_bottom_m, cs.timber.y_top_m());
        assert!((cs.neutral_axis_y_m - result.results.h_ec_tau_m).abs() < 1e-15);
        assert!(cs.neutral_axis_y_m > cs.timber.centroid_y_m());
        assert!(cs.neutral_axis_y_m < cs.interface_y_m);
    }

    #[test]
    fn test_diagram_data() {
        let (input, result) = example();
        let data = DiagramData::from_calc(&input, &result);
        assert_eq!(data.label, "TCC-1");
        assert_eq!(data.deflection.len(), 100);
        assert!(!data.elevation.connectors_truncated());
        assert_eq!(data.connector_positions_m.len(), 2);
        assert_eq!(data.deflection_scale_m(), data.max_deflection_m.abs());

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("neutral_axis_y_m"));
    }
}
