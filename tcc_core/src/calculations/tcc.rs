//! # Timber-Concrete Composite Beam Calculation
//!
//! Verifies a simply supported timber-concrete composite (TCC) beam under a
//! mid-span point load using the gamma method of EN 1995-1-1 Annex B.
//!
//! ## Pipeline
//!
//! ```text
//! validate → section properties → γ, neutral axes, EI_eff
//!          → M_mid, V_max → deflection curve → stresses and forces
//! ```
//!
//! Each stage is a public pure function; [`calculate`] runs them in order.
//!
//! ## Assumptions
//!
//! - Simply supported single span, one point load at mid-span
//! - Concrete slab directly on top of a rectangular timber member
//! - Linear elastic layers, uniformly spaced connectors
//! - Timber utilization uses characteristic strengths with no `k_mod`,
//!   partial safety or service-class factors
//! - Short-term stiffness only (no creep or shrinkage)
//!
//! ## Units
//!
//! Every field is SI: Pa, m, N, N·m. Convert front-end units with
//! [`crate::units`] before building the input.
//!
//! ## Example
//!
//! ```rust
//! use tcc_core::calculations::tcc::{calculate, TccInput};
//! use tcc_core::settings::CalcSettings;
//!
//! let input = TccInput::example();
//! let result = calculate(&input, &CalcSettings::default()).unwrap();
//!
//! assert_eq!(result.forces.m_mid_nm, 32_000.0);
//! assert_eq!(result.forces.v_max_n, 40_000.0);
//! assert!(result.composite.gamma_concrete > 0.0 && result.composite.gamma_concrete < 1.0);
//! println!("Timber utilization: {:.2}", result.results.utilization_timber);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::deflection::DeflectionCurve;
use crate::equations::{beam, composite, section, stress};
use crate::errors::{CalcError, CalcResult, CalcWarning};
use crate::settings::CalcSettings;

// ============================================================================
// Input Types
// ============================================================================

/// Elastic moduli of the two layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Elastic modulus of timber (Pa)
    pub e_timber_pa: f64,
    /// Elastic modulus of concrete (Pa)
    pub e_concrete_pa: f64,
}

/// Rectangular dimensions of the timber member and the concrete slab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Timber width (m)
    pub b_timber_m: f64,
    /// Timber height (m)
    pub h_timber_m: f64,
    /// Concrete slab width (m)
    pub b_concrete_m: f64,
    /// Concrete slab height (m)
    pub h_concrete_m: f64,
}

/// Shear connector layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionParams {
    /// Connector spacing along the span (m)
    pub spacing_m: f64,
    /// Slip modulus of one connector (N/m)
    pub k_ser_n_per_m: f64,
}

/// Single point load at mid-span of a simply supported span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Point load, positive downward (N)
    pub point_load_n: f64,
    /// Span length (m)
    pub span_m: f64,
}

/// Characteristic timber strengths used for the utilization ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthLimits {
    /// Bending strength f_m (Pa)
    pub f_m_timber_pa: f64,
    /// Tensile strength parallel to grain f_t (Pa)
    pub f_t_timber_pa: f64,
}

/// Complete input for one TCC calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "TCC-1",
///   "materials": { "e_timber_pa": 11.0e9, "e_concrete_pa": 33.0e9 },
///   "geometry": {
///     "b_timber_m": 0.12, "h_timber_m": 0.16,
///     "b_concrete_m": 0.40, "h_concrete_m": 0.10
///   },
///   "connection": { "spacing_m": 0.8, "k_ser_n_per_m": 9.0e7 },
///   "load": { "point_load_n": 80000.0, "span_m": 1.6 },
///   "strength": { "f_m_timber_pa": 24.0e6, "f_t_timber_pa": 14.0e6 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TccInput {
    /// User label for this element (e.g., "TCC-1", "Floor slab bay 3")
    #[serde(default)]
    pub label: String,
    pub materials: MaterialProperties,
    pub geometry: SectionGeometry,
    pub connection: ConnectionParams,
    pub load: LoadCase,
    pub strength: StrengthLimits,
}

fn require_positive(field: &str, value: f64, what: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be a finite number", what),
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be positive", what),
        ));
    }
    Ok(())
}

impl MaterialProperties {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("e_timber_pa", self.e_timber_pa, "Timber elastic modulus")?;
        require_positive("e_concrete_pa", self.e_concrete_pa, "Concrete elastic modulus")
    }
}

impl SectionGeometry {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("b_timber_m", self.b_timber_m, "Timber width")?;
        require_positive("h_timber_m", self.h_timber_m, "Timber height")?;
        require_positive("b_concrete_m", self.b_concrete_m, "Concrete width")?;
        require_positive("h_concrete_m", self.h_concrete_m, "Concrete height")
    }

    /// Total depth of the composite section (m)
    pub fn total_height_m(&self) -> f64 {
        self.h_timber_m + self.h_concrete_m
    }
}

impl ConnectionParams {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("spacing_m", self.spacing_m, "Connector spacing")?;
        require_positive("k_ser_n_per_m", self.k_ser_n_per_m, "Slip modulus")
    }
}

impl LoadCase {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.point_load_n.is_finite() {
            return Err(CalcError::invalid_input(
                "point_load_n",
                self.point_load_n.to_string(),
                "Point load must be a finite number",
            ));
        }
        if self.point_load_n < 0.0 {
            return Err(CalcError::invalid_input(
                "point_load_n",
                self.point_load_n.to_string(),
                "Point load acts downward; enter its magnitude",
            ));
        }
        require_positive("span_m", self.span_m, "Span")
    }
}

impl StrengthLimits {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("f_m_timber_pa", self.f_m_timber_pa, "Timber bending strength")?;
        require_positive("f_t_timber_pa", self.f_t_timber_pa, "Timber tensile strength")
    }
}

impl TccInput {
    /// Validate every input, reporting the first invalid field.
    pub fn validate(&self) -> CalcResult<()> {
        self.materials.validate()?;
        self.geometry.validate()?;
        self.connection.validate()?;
        self.load.validate()?;
        self.strength.validate()
    }

    /// Reference element: 120x160 timber (C24) under a 400x100 slab, 1.6 m span, 80 kN.
    pub fn example() -> Self {
        TccInput {
            label: "TCC-1".to_string(),
            materials: MaterialProperties {
                e_timber_pa: 11.0e9,
                e_concrete_pa: 33.0e9,
            },
            geometry: SectionGeometry {
                b_timber_m: 0.12,
                h_timber_m: 0.16,
                b_concrete_m: 0.40,
                h_concrete_m: 0.10,
            },
            connection: ConnectionParams {
                spacing_m: 0.8,
                k_ser_n_per_m: 9.0e7,
            },
            load: LoadCase {
                point_load_n: 80_000.0,
                span_m: 1.6,
            },
            strength: StrengthLimits {
                f_m_timber_pa: 24.0e6,
                f_t_timber_pa: 14.0e6,
            },
        }
    }
}

// ============================================================================
// Derived Types
// ============================================================================

/// Areas and second moments of area of both layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub a_timber_m2: f64,
    pub i_timber_m4: f64,
    pub a_concrete_m2: f64,
    pub i_concrete_m4: f64,
}

/// Composite action of the connected section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeState {
    /// Connection efficiency factor γ, in (0, 1] for valid inputs
    pub gamma_concrete: f64,
    /// Timber centroid to composite neutral axis (m)
    pub a_timber_m: f64,
    /// Concrete centroid to composite neutral axis (m)
    pub a_concrete_m: f64,
    /// Effective bending stiffness (N·m²)
    pub ei_eff_nm2: f64,
}

impl CompositeState {
    /// Non-fatal range findings on the derived values.
    pub fn warnings(&self) -> Vec<CalcWarning> {
        let mut warnings = Vec::new();
        if !(self.gamma_concrete > 0.0 && self.gamma_concrete <= 1.0) {
            warnings.push(CalcWarning::new(
                "GAMMA_OUT_OF_RANGE",
                "gamma_concrete",
                self.gamma_concrete,
                "Connection efficiency factor outside (0, 1]; check k_ser, spacing and span",
            ));
        }
        warnings
    }
}

/// Internal forces for the mid-span point load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InternalForces {
    /// Mid-span bending moment (N·m)
    pub m_mid_nm: f64,
    /// Maximum shear force (N)
    pub v_max_n: f64,
}

/// Stresses, layer forces and the timber utilization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Timber axial (normal) stress from composite action (Pa)
    pub sigma_timber_pa: f64,
    /// Timber bending stress (Pa)
    pub sigma_m_timber_pa: f64,
    /// σ_m/f_m + σ_t/f_t
    pub utilization_timber: f64,
    /// Concrete axial stress (Pa)
    pub sigma_concrete_pa: f64,
    /// Concrete bending stress (Pa)
    pub sigma_m_concrete_pa: f64,
    /// Concrete normal force (N)
    pub n_concrete_n: f64,
    /// Moment carried by the concrete about its own centroid (N·m)
    pub m_concrete_nm: f64,
    /// Maximum timber shear stress, per unit width (Pa)
    pub tau_timber_max_pa: f64,
    /// Force per connector (N)
    pub f_connector_n: f64,
    /// Height of the shear-critical point above the timber base (m)
    pub h_ec_tau_m: f64,
}

impl ResultSet {
    fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        [
            ("sigma_timber_pa", self.sigma_timber_pa),
            ("sigma_m_timber_pa", self.sigma_m_timber_pa),
            ("utilization_timber", self.utilization_timber),
            ("sigma_concrete_pa", self.sigma_concrete_pa),
            ("sigma_m_concrete_pa", self.sigma_m_concrete_pa),
            ("n_concrete_n", self.n_concrete_n),
            ("m_concrete_nm", self.m_concrete_nm),
            ("tau_timber_max_pa", self.tau_timber_max_pa),
            ("f_connector_n", self.f_connector_n),
            ("h_ec_tau_m", self.h_ec_tau_m),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
    }
}

/// Results from a TCC calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TccResult {
    /// Label copied from the input
    pub label: String,
    pub section: SectionProperties,
    pub composite: CompositeState,
    pub forces: InternalForces,
    /// Deflection curve parameters; sample with [`DeflectionCurve::points`]
    pub deflection: DeflectionCurve,
    pub results: ResultSet,
    /// Non-fatal findings (empty for ordinary inputs)
    #[serde(default)]
    pub warnings: Vec<CalcWarning>,
}

impl TccResult {
    /// Timber utilization ≤ 1.0
    pub fn passes(&self) -> bool {
        self.results.utilization_timber <= 1.0
    }

    /// Mid-span deflection (m, negative downward)
    pub fn max_deflection(&self) -> f64 {
        self.deflection.max_deflection()
    }

    /// L / |δ_max|, infinite for an unloaded span
    pub fn span_to_deflection_ratio(&self) -> f64 {
        let delta = self.max_deflection().abs();
        if delta > 0.0 {
            self.deflection.span_m() / delta
        } else {
            f64::INFINITY
        }
    }
}

// ============================================================================
// Pipeline Stages
// ============================================================================

/// Areas and second moments of area. Rejects non-positive dimensions.
pub fn compute_section_properties(geometry: &SectionGeometry) -> CalcResult<SectionProperties> {
    geometry.validate()?;
    let (b_t, h_t) = (geometry.b_timber_m, geometry.h_timber_m);
    let (b_c, h_c) = (geometry.b_concrete_m, geometry.h_concrete_m);
    Ok(SectionProperties {
        a_timber_m2: section::rectangular_area(b_t, h_t),
        i_timber_m4: section::rectangular_moment_of_inertia(b_t, h_t),
        a_concrete_m2: section::rectangular_area(b_c, h_c),
        i_concrete_m4: section::rectangular_moment_of_inertia(b_c, h_c),
    })
}

/// γ, neutral-axis offsets and EI_eff.
///
/// Fails with `NumericalDegeneracy` if `EI_eff` is not finite and positive,
/// since every downstream quantity divides by it.
pub fn compute_composite_state(
    materials: &MaterialProperties,
    geometry: &SectionGeometry,
    connection: &ConnectionParams,
    span_m: f64,
    props: &SectionProperties,
) -> CalcResult<CompositeState> {
    let e_t = materials.e_timber_pa;
    let e_c = materials.e_concrete_pa;

    let gamma = composite::gamma_factor(
        e_c,
        props.a_concrete_m2,
        connection.spacing_m,
        connection.k_ser_n_per_m,
        span_m,
    );

    let a_t = composite::timber_neutral_axis_offset(
        e_t,
        props.a_timber_m2,
        e_c,
        props.a_concrete_m2,
        geometry.h_timber_m,
        geometry.h_concrete_m,
        gamma,
    );
    let a_c =
        composite::concrete_neutral_axis_offset(geometry.h_timber_m, geometry.h_concrete_m, a_t);

    let ei_eff = composite::effective_bending_stiffness(
        e_t,
        props.i_timber_m4,
        props.a_timber_m2,
        a_t,
        e_c,
        props.i_concrete_m4,
        props.a_concrete_m2,
        a_c,
        gamma,
    );

    if !ei_eff.is_finite() || ei_eff <= 0.0 {
        return Err(CalcError::numerical_degeneracy(
            "ei_eff_nm2",
            ei_eff.to_string(),
            "Effective bending stiffness must be finite and positive",
        ));
    }

    Ok(CompositeState {
        gamma_concrete: gamma,
        a_timber_m: a_t,
        a_concrete_m: a_c,
        ei_eff_nm2: ei_eff,
    })
}

/// Mid-span moment and maximum shear.
pub fn compute_internal_forces(load: &LoadCase) -> InternalForces {
    InternalForces {
        m_mid_nm: beam::midspan_point_load_moment(load.point_load_n, load.span_m),
        v_max_n: beam::midspan_point_load_shear(load.point_load_n),
    }
}

/// Deflection curve for the given stiffness, sampled per `settings`.
pub fn compute_deflection_curve(
    load: &LoadCase,
    ei_eff_nm2: f64,
    settings: &CalcSettings,
) -> CalcResult<DeflectionCurve> {
    DeflectionCurve::new(
        load.point_load_n,
        load.span_m,
        ei_eff_nm2,
        settings.deflection_points_per_half,
    )
}

/// Stresses, layer forces, connector force and utilization.
pub fn compute_result_set(
    input: &TccInput,
    props: &SectionProperties,
    state: &CompositeState,
    forces: &InternalForces,
) -> ResultSet {
    let e_t = input.materials.e_timber_pa;
    let e_c = input.materials.e_concrete_pa;
    let h_t = input.geometry.h_timber_m;
    let h_c = input.geometry.h_concrete_m;
    let ei = state.ei_eff_nm2;
    let m = forces.m_mid_nm;
    let v = forces.v_max_n;

    let sigma_timber = stress::axial_stress(1.0, e_t, state.a_timber_m, m, ei);
    let sigma_m_timber = stress::bending_stress(e_t, h_t, m, ei);
    let utilization = stress::timber_utilization(
        sigma_m_timber,
        input.strength.f_m_timber_pa,
        sigma_timber,
        input.strength.f_t_timber_pa,
    );

    let sigma_concrete = stress::axial_stress(state.gamma_concrete, e_c, state.a_concrete_m, m, ei);
    let sigma_m_concrete = stress::bending_stress(e_c, h_c, m, ei);

    let h_ec = stress::shear_critical_height(state.a_timber_m, h_t);

    ResultSet {
        sigma_timber_pa: sigma_timber,
        sigma_m_timber_pa: sigma_m_timber,
        utilization_timber: utilization,
        sigma_concrete_pa: sigma_concrete,
        sigma_m_concrete_pa: sigma_m_concrete,
        n_concrete_n: sigma_concrete * props.a_concrete_m2,
        m_concrete_nm: stress::layer_moment(e_c, props.i_concrete_m4, m, ei),
        tau_timber_max_pa: stress::timber_max_shear_stress(e_t, h_ec, v, ei),
        f_connector_n: stress::connector_force(
            state.gamma_concrete,
            e_c,
            props.a_concrete_m2,
            state.a_concrete_m,
            input.connection.spacing_m,
            v,
            ei,
        ),
        h_ec_tau_m: h_ec,
    }
}

/// Run the full gamma-method verification.
///
/// This is a pure function: identical inputs give bit-identical results.
///
/// # Returns
///
/// * `Ok(TccResult)` - All derived quantities, plus any warnings
/// * `Err(CalcError::InvalidInput)` - An input is non-positive or not finite
/// * `Err(CalcError::InvalidSettings)` - The deflection sample count is out of range
/// * `Err(CalcError::NumericalDegeneracy)` - A derived value is unusable
pub fn calculate(input: &TccInput, settings: &CalcSettings) -> CalcResult<TccResult> {
    let _span = tracing::debug_span!("tcc_calculate", label = %input.label).entered();

    input.validate()?;
    settings.validate()?;

    let props = compute_section_properties(&input.geometry)?;
    tracing::debug!(
        a_timber = props.a_timber_m2,
        i_timber = props.i_timber_m4,
        a_concrete = props.a_concrete_m2,
        i_concrete = props.i_concrete_m4,
        "section properties"
    );

    let state = compute_composite_state(
        &input.materials,
        &input.geometry,
        &input.connection,
        input.load.span_m,
        &props,
    )?;
    tracing::debug!(
        gamma = state.gamma_concrete,
        a_timber = state.a_timber_m,
        a_concrete = state.a_concrete_m,
        ei_eff = state.ei_eff_nm2,
        "composite state"
    );

    let warnings = state.warnings();
    for warning in &warnings {
        tracing::warn!(code = %warning.code, value = warning.value, "{}", warning.message);
    }

    let forces = compute_internal_forces(&input.load);
    tracing::debug!(m_mid = forces.m_mid_nm, v_max = forces.v_max_n, "internal forces");

    let deflection = compute_deflection_curve(&input.load, state.ei_eff_nm2, settings)?;

    let results = compute_result_set(input, &props, &state, &forces);
    if let Some((quantity, value)) = results.first_non_finite() {
        return Err(CalcError::numerical_degeneracy(
            quantity,
            value.to_string(),
            "Result is not a finite number",
        ));
    }
    tracing::debug!(
        utilization = results.utilization_timber,
        f_connector = results.f_connector_n,
        "stresses and forces"
    );

    Ok(TccResult {
        label: input.label.clone(),
        section: props,
        composite: state,
        forces,
        deflection,
        results,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64, rel: f64) -> bool {
        (actual - expected).abs() <= rel * expected.abs()
    }

    fn run(input: &TccInput) -> TccResult {
        calculate(input, &CalcSettings::default()).unwrap()
    }

    #[test]
    fn test_section_properties() {
        let result = run(&TccInput::example());
        assert!(approx(result.section.a_timber_m2, 0.0192, 1e-12));
        assert!(approx(result.section.i_timber_m4, 4.096e-5, 1e-9));
        assert!(approx(result.section.a_concrete_m2, 0.04, 1e-12));
        assert!(approx(result.section.i_concrete_m4, 3.3333333e-5, 1e-6));
    }

    #[test]
    fn test_composite_state() {
        let result = run(&TccInput::example());
        let c = result.composite;
        assert!(approx(c.gamma_concrete, 0.021628315, 1e-6), "gamma = {}", c.gamma_concrete);
        assert!(approx(c.a_timber_m, 0.0154804109, 1e-6), "a_t = {}", c.a_timber_m);
        assert!(approx(c.a_concrete_m, 0.1145195891, 1e-6), "a_c = {}", c.a_concrete_m);
        assert!(approx(c.ei_eff_nm2, 1_975_590.16, 1e-6), "EI_eff = {}", c.ei_eff_nm2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_internal_forces_exact() {
        let result = run(&TccInput::example());
        assert_eq!(result.forces.m_mid_nm, 32_000.0);
        assert_eq!(result.forces.v_max_n, 40_000.0);
    }

    #[test]
    fn test_result_set_reference_values() {
        let r = run(&TccInput::example()).results;
        assert!(approx(r.sigma_timber_pa, 2_758_216.13, 1e-6));
        assert!(approx(r.sigma_m_timber_pa, 14_253_968.53, 1e-6));
        assert!(approx(r.sigma_concrete_pa, 1_323_943.74, 1e-6));
        assert!(approx(r.sigma_m_concrete_pa, 26_726_190.99, 1e-6));
        assert!(approx(r.n_concrete_n, 52_957.75, 1e-6));
        assert!(approx(r.m_concrete_nm, 17_817.46, 1e-6));
        assert!(approx(r.tau_timber_max_pa, 1_015_206.49, 1e-6));
        assert!(approx(r.f_connector_n, 52_957.75, 1e-6));
        assert!(approx(r.h_ec_tau_m, 0.0954804109, 1e-6));
        assert!(approx(r.utilization_timber, 0.79093079, 1e-6));
    }

    #[test]
    fn test_passes_and_deflection() {
        let result = run(&TccInput::example());
        assert!(result.passes());
        assert!(approx(result.max_deflection(), -0.0034555075, 1e-6));
        assert!(approx(result.span_to_deflection_ratio(), 1.6 / 0.0034555075, 1e-6));
        assert_eq!(result.deflection.points().count(), 100);
    }

    #[test]
    fn test_normal_force_is_stress_times_area() {
        let result = run(&TccInput::example());
        let r = result.results;
        assert_eq!(r.n_concrete_n, r.sigma_concrete_pa * result.section.a_concrete_m2);
    }

    #[test]
    fn test_offsets_reconstruct_depth() {
        let input = TccInput::example();
        let c = run(&input).composite;
        let g = input.geometry;
        let total = c.a_timber_m + c.a_concrete_m + 0.5 * g.h_timber_m + 0.5 * g.h_concrete_m;
        assert!(approx(total, g.total_height_m(), 1e-12));
    }

    #[test]
    fn test_stiffer_connection_increases_stiffness() {
        let mut input = TccInput::example();
        let soft = run(&input);
        input.connection.k_ser_n_per_m *= 100.0;
        let stiff = run(&input);
        assert!(stiff.composite.gamma_concrete > soft.composite.gamma_concrete);
        assert!(stiff.composite.ei_eff_nm2 > soft.composite.ei_eff_nm2);
        assert!(stiff.max_deflection().abs() < soft.max_deflection().abs());
    }

    #[test]
    fn test_zero_load_gives_zero_effects() {
        let mut input = TccInput::example();
        input.load.point_load_n = 0.0;
        let result = run(&input);
        assert_eq!(result.forces.m_mid_nm, 0.0);
        assert_eq!(result.results.utilization_timber, 0.0);
        assert_eq!(result.span_to_deflection_ratio(), f64::INFINITY);
    }

    #[test]
    fn test_invalid_inputs_name_the_field() {
        let cases: [(&str, fn(&mut TccInput)); 13] = [
            ("e_timber_pa", |i| i.materials.e_timber_pa = 0.0),
            ("e_concrete_pa", |i| i.materials.e_concrete_pa = -1.0),
            ("b_timber_m", |i| i.geometry.b_timber_m = 0.0),
            ("h_timber_m", |i| i.geometry.h_timber_m = 0.0),
            ("b_concrete_m", |i| i.geometry.b_concrete_m = f64::NAN),
            ("h_concrete_m", |i| i.geometry.h_concrete_m = -0.1),
            ("spacing_m", |i| i.connection.spacing_m = 0.0),
            ("k_ser_n_per_m", |i| i.connection.k_ser_n_per_m = 0.0),
            ("point_load_n", |i| i.load.point_load_n = -5.0),
            ("point_load_n", |i| i.load.point_load_n = f64::INFINITY),
            ("span_m", |i| i.load.span_m = 0.0),
            ("f_m_timber_pa", |i| i.strength.f_m_timber_pa = 0.0),
            ("f_t_timber_pa", |i| i.strength.f_t_timber_pa = 0.0),
        ];

        for (field, mutate) in cases {
            let mut input = TccInput::example();
            mutate(&mut input);
            let err = calculate(&input, &CalcSettings::default()).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn test_section_properties_reject_bad_geometry() {
        let mut geometry = TccInput::example().geometry;
        geometry.h_timber_m = 0.0;
        assert!(compute_section_properties(&geometry).is_err());
    }

    #[test]
    fn test_invalid_settings() {
        let settings = CalcSettings::with_deflection_points(0);
        let err = calculate(&TccInput::example(), &settings).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");
    }

    #[test]
    fn test_deflection_stage_rejects_bad_sample_count() {
        let load = TccInput::example().load;
        for points in [1, 10_001] {
            let settings = CalcSettings::with_deflection_points(points);
            let err = compute_deflection_curve(&load, 2.0e6, &settings).unwrap_err();
            assert_eq!(err.field(), Some("deflection_points_per_half"));
        }
        let curve = compute_deflection_curve(&load, 2.0e6, &CalcSettings::default()).unwrap();
        assert_eq!(curve.points().count(), 100);
    }

    #[test]
    fn test_overflowing_inputs_are_degenerate() {
        let mut input = TccInput::example();
        input.materials.e_timber_pa = 1.0e308;
        input.materials.e_concrete_pa = 1.0e308;
        let err = calculate(&input, &CalcSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "NUMERICAL_DEGENERACY");
    }

    #[test]
    fn test_gamma_underflow_is_a_warning() {
        let mut input = TccInput::example();
        input.connection.k_ser_n_per_m = 1.0e-300;
        let result = run(&input);
        assert_eq!(result.composite.gamma_concrete, 0.0);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "GAMMA_OUT_OF_RANGE");
        assert!(result.composite.ei_eff_nm2 > 0.0);
    }

    #[test]
    fn test_tiny_spacing_keeps_connector_force_finite() {
        let mut input = TccInput::example();
        input.connection.spacing_m = 1.0e-9;
        let result = run(&input);
        assert!(result.composite.gamma_concrete > 0.999);
        assert!(result.results.f_connector_n.is_finite());
        assert!(result.results.f_connector_n >= 0.0);
    }

    #[test]
    fn test_deterministic() {
        let input = TccInput::example();
        let a = run(&input);
        let b = run(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = TccInput::example();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: TccInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = run(&input);
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("gamma_concrete"));
        assert!(json.contains("utilization_timber"));
        let roundtrip: TccResult = serde_json::from_str(&json).unwrap();
        assert!(approx(roundtrip.composite.ei_eff_nm2, result.composite.ei_eff_nm2, 1e-12));
    }
}
