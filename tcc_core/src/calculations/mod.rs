//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, settings) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`tcc`] - Timber-concrete composite beam, gamma method
//! - [`deflection`] - Sampled deflection curve used by [`tcc`]

pub mod deflection;
pub mod tcc;

// Re-export commonly used types
pub use deflection::{DeflectionCurve, DeflectionPoint, DeflectionPoints};
pub use tcc::{
    calculate,
    CompositeState,
    ConnectionParams,
    InternalForces,
    LoadCase,
    MaterialProperties,
    ResultSet,
    SectionGeometry,
    SectionProperties,
    StrengthLimits,
    TccInput,
    TccResult,
};
