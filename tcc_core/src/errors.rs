//! # Error Types
//!
//! Structured error types for tcc_core. Every error names the quantity that
//! caused it so a front-end can point the user at the offending field.
//!
//! ## Example
//!
//! ```rust
//! use tcc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tcc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A geometric, material, or load input is outside its physical domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A derived quantity came out unusable (non-finite, non-positive stiffness, ...)
    #[error("Numerical degeneracy in '{quantity}': {value} - {reason}")]
    NumericalDegeneracy {
        quantity: String,
        value: String,
        reason: String,
    },

    /// A calculation setting is out of its accepted range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NumericalDegeneracy error
    pub fn numerical_degeneracy(
        quantity: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::NumericalDegeneracy {
            quantity: quantity.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The input or derived quantity this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } | CalcError::InvalidSettings { field, .. } => {
                Some(field)
            }
            CalcError::NumericalDegeneracy { quantity, .. } => Some(quantity),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NumericalDegeneracy { .. } => "NUMERICAL_DEGENERACY",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}

/// A non-fatal finding attached to a successful calculation.
///
/// Used for computed values that fall outside their expected range without
/// making the rest of the result meaningless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalcWarning {
    /// Stable code, e.g. `GAMMA_OUT_OF_RANGE`
    pub code: String,
    /// Quantity the warning refers to
    pub quantity: String,
    /// Offending value
    pub value: f64,
    /// Human-readable explanation
    pub message: String,
}

impl CalcWarning {
    pub fn new(
        code: impl Into<String>,
        quantity: impl Into<String>,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        CalcWarning {
            code: code.into(),
            quantity: quantity.into(),
            value,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CalcWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} = {:e}): {}", self.code, self.quantity, self.value, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("span_m", "-1.6", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("k_ser", "0", "x").error_code(), "INVALID_INPUT");
        assert_eq!(
            CalcError::numerical_degeneracy("ei_eff", "NaN", "x").error_code(),
            "NUMERICAL_DEGENERACY"
        );
        assert_eq!(CalcError::invalid_settings("n", "1", "x").error_code(), "INVALID_SETTINGS");
    }

    #[test]
    fn test_error_field() {
        let error = CalcError::invalid_input("h_timber_m", "0", "Height must be positive");
        assert_eq!(error.field(), Some("h_timber_m"));
        assert!(error.to_string().contains("h_timber_m"));

        let error = CalcError::SerializationError { reason: "x".into() };
        assert_eq!(error.field(), None);
    }

    #[test]
    fn test_warning_display() {
        let warning = CalcWarning::new("GAMMA_OUT_OF_RANGE", "gamma_concrete", 0.0, "underflow");
        assert!(warning.to_string().starts_with("GAMMA_OUT_OF_RANGE"));
    }
}
