//! # Structural Engineering Equations
//!
//! Every closed-form formula used by the TCC calculation lives here as a
//! plain `f64` function. Keeping them in one place makes each one easy to
//! check against EN 1995-1-1 Annex B.
//!
//! ## Modules
//!
//! - [`section`] - Rectangular section properties (A, I)
//! - [`composite`] - Gamma method: γ, neutral axis, EI_eff
//! - [`beam`] - Simply supported span with a mid-span point load (M, V, δ)
//! - [`stress`] - Layer stresses, forces and utilization
//! - [`registry`] - Equation metadata for reports and documentation
//!
//! ## Units
//!
//! All arguments and results are SI (Pa, m, N, N·m).
//!
//! ## References
//!
//! - EN 1995-1-1:2004 Eurocode 5, Annex B: Mechanically jointed beams
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod beam;
pub mod composite;
pub mod registry;
pub mod section;
pub mod stress;

pub use beam::{
    midspan_point_load_deflection,
    midspan_point_load_deflection_left,
    midspan_point_load_moment,
    midspan_point_load_shear,
};

pub use composite::{
    concrete_neutral_axis_offset,
    effective_bending_stiffness,
    gamma_factor,
    non_composite_bending_stiffness,
    timber_neutral_axis_offset,
};

pub use section::{centroid_separation, rectangular_area, rectangular_moment_of_inertia};

pub use stress::{
    axial_stress,
    bending_stress,
    connector_force,
    layer_moment,
    shear_critical_height,
    timber_max_shear_stress,
    timber_utilization,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    gamma_method_equations,
    generate_equations_markdown,
};
