//! # Simply-Supported Beam Formulas
//!
//! Internal forces and deflection for a single simply supported span carrying
//! one concentrated load at mid-span. Pin support at x = 0, roller at x = L.
//!
//! ## Notation
//!
//! - `L` = Span length (m)
//! - `x` = Position along beam from left support (m)
//! - `P` = Point load magnitude (N)
//! - `EI` = Bending stiffness (N·m²)
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Deflection: **Negative downward** (the curve is handed to diagram
//!   renderers that plot it directly)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 1a

/// Mid-span bending moment for a point load at mid-span
///
/// ```text
///            P
///            ↓
///    ────────┬────────
///    △      L/2       △
///   R1  ←─────L─────→ R2
/// ```
///
/// # Formula
/// M_mid = PL/4
#[inline]
pub fn midspan_point_load_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Maximum shear for a point load at mid-span (equal to each reaction)
///
/// # Formula
/// V_max = P/2
#[inline]
pub fn midspan_point_load_shear(p: f64) -> f64 {
    p / 2.0
}

/// Deflection at position x on the left half-span, `0 ≤ x ≤ L/2`
///
/// # Formula
/// ```text
/// δ(x) = (P·x³/12 − P·L²·x/16) / EI
/// ```
///
/// This is the closed form `−P·x·(3L² − 4x²) / (48·EI)` with downward
/// deflection negative. At mid-span it gives `−PL³/(48EI)`.
///
/// Callers must mirror positions beyond L/2 (see [`midspan_point_load_deflection`]).
#[inline]
pub fn midspan_point_load_deflection_left(p: f64, l: f64, x: f64, ei: f64) -> f64 {
    (p * x.powi(3) / 12.0 - p * l * l * x / 16.0) / ei
}

/// Deflection at any position x on the span
///
/// Positions past mid-span are reflected (`x → L − x`), so the curve is
/// exactly symmetric.
#[inline]
pub fn midspan_point_load_deflection(p: f64, l: f64, x: f64, ei: f64) -> f64 {
    let x_left = if x > l / 2.0 { l - x } else { x };
    midspan_point_load_deflection_left(p, l, x_left, ei)
}
