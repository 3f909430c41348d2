//! # Calculation Settings
//!
//! Tunables that affect how results are produced but not what is being
//! analysed. Stored alongside the input in a project file.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default number of deflection samples per half-span
pub const DEFAULT_DEFLECTION_POINTS: usize = 50;

/// Fewest samples that still include both the support and mid-span
pub const MIN_DEFLECTION_POINTS: usize = 2;

/// Upper bound keeping curve generation trivially cheap
pub const MAX_DEFLECTION_POINTS: usize = 10_000;

/// Settings for one calculation run.
///
/// ## JSON Example
///
/// ```json
/// { "deflection_points_per_half": 50 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Samples of the deflection curve on `[0, L/2]`; the right half mirrors them
    pub deflection_points_per_half: usize,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            deflection_points_per_half: DEFAULT_DEFLECTION_POINTS,
        }
    }
}

impl CalcSettings {
    /// Settings with a specific deflection sample count
    pub fn with_deflection_points(points: usize) -> Self {
        CalcSettings {
            deflection_points_per_half: points,
        }
    }

    /// Check that every setting is within its accepted range.
    pub fn validate(&self) -> CalcResult<()> {
        validate_deflection_points(self.deflection_points_per_half)
    }
}

/// Check a per-half deflection sample count against the accepted range.
pub fn validate_deflection_points(n: usize) -> CalcResult<()> {
    if !(MIN_DEFLECTION_POINTS..=MAX_DEFLECTION_POINTS).contains(&n) {
        return Err(CalcError::invalid_settings(
            "deflection_points_per_half",
            n.to_string(),
            format!(
                "Must be between {} and {}",
                MIN_DEFLECTION_POINTS, MAX_DEFLECTION_POINTS
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let settings = CalcSettings::default();
        assert_eq!(settings.deflection_points_per_half, 50);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_bounds() {
        assert!(CalcSettings::with_deflection_points(2).validate().is_ok());
        assert!(CalcSettings::with_deflection_points(10_000).validate().is_ok());

        let err = CalcSettings::with_deflection_points(1).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");
        assert!(CalcSettings::with_deflection_points(10_001).validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: CalcSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CalcSettings::default());
    }
}
