//! # Cross-Section Property Formulas
//!
//! Geometric properties of the two rectangular layers of a TCC section.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about the layer's own centroid
//! - `b` = Width of section
//! - `h` = Height of section
//!
//! ## References
//!
//! - EN 1995-1-1 Annex B, Figure B.1 (rectangular parts of a mechanically jointed beam)
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use tcc_core::equations::section::rectangular_area;
///
/// // 120 x 160 mm glulam beam
/// let area = rectangular_area(0.12, 0.16);
/// assert!((area - 0.0192).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate second moment of area for rectangular section about its centroid
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← centroidal axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use tcc_core::equations::section::rectangular_moment_of_inertia;
///
/// // 120 x 160 mm timber: I = 0.12 × 0.16³ / 12 = 4.096e-5 m⁴
/// let i = rectangular_moment_of_inertia(0.12, 0.16);
/// assert!((i - 4.096e-5).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Distance between the centroids of two stacked rectangles in contact
///
/// # Formula
/// r = h₁/2 + h₂/2
#[inline]
pub fn centroid_separation(h_lower: f64, h_upper: f64) -> f64 {
    0.5 * (h_lower + h_upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timber_area() {
        assert!((rectangular_area(0.12, 0.16) - 0.0192).abs() < 1e-12);
    }

    #[test]
    fn test_concrete_properties() {
        assert!((rectangular_area(0.40, 0.10) - 0.04).abs() < 1e-12);
        // I = 0.40 × 0.10³ / 12 = 3.333e-5 m⁴
        let i = rectangular_moment_of_inertia(0.40, 0.10);
        assert!((i - 3.3333e-5).abs() < 1e-9);
    }

    #[test]
    fn test_inertia_scales_with_cube_of_height() {
        let i1 = rectangular_moment_of_inertia(0.1, 0.2);
        let i2 = rectangular_moment_of_inertia(0.1, 0.4);
        assert!((i2 / i1 - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_separation() {
        assert!((centroid_separation(0.16, 0.10) - 0.13).abs() < 1e-12);
    }
}
