//! # Deflection Curve
//!
//! Lazy, restartable sampling of the deflection of a simply supported span
//! under a mid-span point load.
//!
//! The left half `[0, L/2]` is sampled at `n` evenly spaced positions. The
//! right half `[L/2, L]` reuses the same `n` values in reverse order, so the
//! curve is exactly symmetric and has `2n` samples (mid-span appears once in
//! each half).
//!
//! ## Example
//!
//! ```rust
//! use tcc_core::calculations::deflection::DeflectionCurve;
//!
//! let curve = DeflectionCurve::new(80_000.0, 1.6, 2.0e6, 50).unwrap();
//! assert_eq!(curve.points().count(), 100);
//!
//! // Fewer than two samples per half cannot reach both the support and mid-span
//! assert!(DeflectionCurve::new(80_000.0, 1.6, 2.0e6, 1).is_err());
//!
//! // Restartable: a second pass yields the same samples
//! let first: Vec<_> = curve.points().collect();
//! let second: Vec<_> = curve.points().collect();
//! assert_eq!(first, second);
//! ```

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::equations::beam::{midspan_point_load_deflection, midspan_point_load_deflection_left};
use crate::errors::{CalcError, CalcResult};
use crate::settings::validate_deflection_points;

/// One sample of the deflection curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionPoint {
    /// Position from the left support (m)
    pub x_m: f64,
    /// Vertical deflection (m), negative downward
    pub deflection_m: f64,
}

/// Parameters of the deflection curve. Cheap to copy; samples are produced on demand.
///
/// Fields are private so `points_per_half` stays within the accepted settings
/// range, both when built with [`DeflectionCurve::new`] and when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DeflectionCurveFields")]
pub struct DeflectionCurve {
    /// Point load (N)
    load_n: f64,
    /// Span length (m)
    span_m: f64,
    /// Effective bending stiffness (N·m²)
    ei_eff_nm2: f64,
    /// Samples per half-span (at least 2)
    points_per_half: usize,
}

#[derive(Deserialize)]
struct DeflectionCurveFields {
    load_n: f64,
    span_m: f64,
    ei_eff_nm2: f64,
    points_per_half: usize,
}

impl TryFrom<DeflectionCurveFields> for DeflectionCurve {
    type Error = CalcError;

    fn try_from(f: DeflectionCurveFields) -> Result<Self, Self::Error> {
        DeflectionCurve::new(f.load_n, f.span_m, f.ei_eff_nm2, f.points_per_half)
    }
}

impl DeflectionCurve {
    /// Build a curve, rejecting sample counts outside the settings range.
    pub fn new(
        load_n: f64,
        span_m: f64,
        ei_eff_nm2: f64,
        points_per_half: usize,
    ) -> CalcResult<Self> {
        validate_deflection_points(points_per_half)?;
        Ok(DeflectionCurve {
            load_n,
            span_m,
            ei_eff_nm2,
            points_per_half,
        })
    }

    pub fn load_n(&self) -> f64 {
        self.load_n
    }

    pub fn span_m(&self) -> f64 {
        self.span_m
    }

    pub fn ei_eff_nm2(&self) -> f64 {
        self.ei_eff_nm2
    }

    /// Samples per half-span, within `2..=10_000`
    pub fn points_per_half(&self) -> usize {
        self.points_per_half
    }

    /// Deflection at an arbitrary position on the span (m, negative downward)
    pub fn deflection_at(&self, x_m: f64) -> f64 {
        midspan_point_load_deflection(self.load_n, self.span_m, x_m, self.ei_eff_nm2)
    }

    /// Deflection at mid-span, the extreme value of the curve
    pub fn max_deflection(&self) -> f64 {
        self.deflection_at(self.span_m / 2.0)
    }

    /// Total number of samples over the whole span
    pub fn len(&self) -> usize {
        2 * self.points_per_half
    }

    /// Always false; a curve has at least four samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every sample, left support to right support
    pub fn points(&self) -> DeflectionPoints {
        DeflectionPoints {
            curve: *self,
            front: 0,
            back: self.len(),
        }
    }

    /// Samples on `[0, L/2]`
    pub fn left_half(&self) -> impl Iterator<Item = DeflectionPoint> {
        self.points().take(self.points_per_half)
    }

    /// Samples on `[L/2, L]`
    pub fn right_half(&self) -> impl Iterator<Item = DeflectionPoint> {
        self.points().skip(self.points_per_half)
    }

    /// Collect positions and deflections into two parallel vectors
    pub fn to_vecs(&self) -> (Vec<f64>, Vec<f64>) {
        self.points().map(|p| (p.x_m, p.deflection_m)).unzip()
    }

    /// Spacing between adjacent samples within a half
    fn step(&self) -> f64 {
        (self.span_m / 2.0) / (self.points_per_half - 1) as f64
    }

    fn left_x(&self, j: usize) -> f64 {
        // Land exactly on mid-span for the last sample
        if j + 1 == self.points_per_half {
            self.span_m / 2.0
        } else {
            j as f64 * self.step()
        }
    }

    fn left_sample(&self, j: usize) -> f64 {
        let x = self.left_x(j);
        midspan_point_load_deflection_left(self.load_n, self.span_m, x, self.ei_eff_nm2)
    }

    fn sample(&self, index: usize) -> DeflectionPoint {
        let n = self.points_per_half;
        if index < n {
            DeflectionPoint {
                x_m: self.left_x(index),
                deflection_m: self.left_sample(index),
            }
        } else {
            let i = index - n;
            let x_m = if i + 1 == n {
                self.span_m
            } else {
                self.span_m / 2.0 + i as f64 * self.step()
            };
            DeflectionPoint {
                x_m,
                deflection_m: self.left_sample(n - 1 - i),
            }
        }
    }
}

/// Iterator over the samples of a [`DeflectionCurve`].
#[derive(Debug, Clone)]
pub struct DeflectionPoints {
    curve: DeflectionCurve,
    front: usize,
    back: usize,
}

impl Iterator for DeflectionPoints {
    type Item = DeflectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = self.curve.sample(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for DeflectionPoints {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.curve.sample(self.back))
    }
}

impl ExactSizeIterator for DeflectionPoints {}

impl FusedIterator for DeflectionPoints {}
