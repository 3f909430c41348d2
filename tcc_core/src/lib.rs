//! # tcc_core - Timber-Concrete Composite Beam Calculator
//!
//! `tcc_core` verifies a simply supported timber-concrete composite (TCC)
//! beam under a mid-span point load using the gamma method of
//! EN 1995-1-1 Annex B. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **SI Internally**: Pa, m, N, N·m everywhere; see [`units`] for conversions
//! - **Rich Errors**: Structured error types, not just strings
//! - **Separated Output**: Reports and diagram data only read results
//!
//! ## Quick Start
//!
//! ```rust
//! use tcc_core::{calculate, CalcSettings, TccInput};
//!
//! let input = TccInput::example();
//! let result = calculate(&input, &CalcSettings::default()).unwrap();
//!
//! println!("gamma = {:.4}", result.composite.gamma_concrete);
//! println!("utilization = {:.3}", result.results.utilization_timber);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The gamma-method pipeline and deflection curve
//! - [`equations`] - Closed-form formulas and their registry
//! - [`settings`] - Calculation tunables
//! - [`project`] - Project container saved to `.tcc` files
//! - [`file_io`] - Atomic saves and version checks
//! - [`report`] - Plain-text verification report
//! - [`diagram`] - Renderer-facing layout data
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod diagram;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod project;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, TccInput, TccResult};
pub use errors::{CalcError, CalcResult, CalcWarning};
pub use file_io::{load_project, save_project, save_result_json};
pub use project::{ProjectMetadata, TccProject};
pub use settings::CalcSettings;
