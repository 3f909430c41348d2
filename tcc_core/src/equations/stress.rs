//! # Stress and Force Formulas
//!
//! Stresses and internal forces in the two layers of a TCC section under a
//! given bending moment and shear, expressed through the effective bending
//! stiffness `EI_eff`.
//!
//! All stresses are tension-positive magnitudes at the governing fibre; the
//! caller decides which face is in tension (timber bottom, concrete top in
//! compression for a sagging moment).
//!
//! ## References
//!
//! - EN 1995-1-1:2004 Annex B, Eq. (B.7), (B.8), (B.9), (B.10)

/// Axial (normal) stress at the centroid of a layer
///
/// # Formula (Eq. B.7)
/// σ_i = γ_i·E_i·a_i·M / EI_eff
///
/// The timber layer uses `γ = 1`.
#[inline]
pub fn axial_stress(gamma: f64, e: f64, a: f64, m: f64, ei_eff: f64) -> f64 {
    gamma * e * a * m / ei_eff
}

/// Bending stress at the extreme fibre of a layer about its own centroid
///
/// # Formula (Eq. B.8)
/// σ_m,i = 0.5·E_i·h_i·M / EI_eff
#[inline]
pub fn bending_stress(e: f64, h: f64, m: f64, ei_eff: f64) -> f64 {
    0.5 * e * h * m / ei_eff
}

/// Linear interaction of bending and tension in the timber layer
///
/// # Formula (EN 1995-1-1 Eq. 6.17, without k_mod / γ_M)
/// η = σ_m / f_m + σ_t / f_t
#[inline]
pub fn timber_utilization(sigma_m: f64, f_m: f64, sigma_t: f64, f_t: f64) -> f64 {
    sigma_m / f_m + sigma_t / f_t
}

/// Internal moment carried by a layer about its own centroid
///
/// # Formula
/// M_i = E_i·I_i·M / EI_eff
#[inline]
pub fn layer_moment(e: f64, i: f64, m: f64, ei_eff: f64) -> f64 {
    e * i * m / ei_eff
}

/// Height above the timber base of the point where timber shear stress peaks
///
/// # Formula
/// h = a_t + 0.5·h_t
#[inline]
pub fn shear_critical_height(a_timber: f64, h_timber: f64) -> f64 {
    a_timber + 0.5 * h_timber
}

/// Maximum shear stress in the timber web, per unit width
///
/// # Formula (Eq. B.9, γ₂ = 1)
/// τ_max = 0.5·E_t·h²·V / EI_eff
///
/// `h` is [`shear_critical_height`]. The result is not divided by `b_t`.
#[inline]
pub fn timber_max_shear_stress(e_timber: f64, h: f64, v: f64, ei_eff: f64) -> f64 {
    0.5 * e_timber * h * h * v / ei_eff
}

/// Shear force taken by one connector
///
/// Interface shear flow times the tributary spacing.
///
/// # Formula (Eq. B.10)
/// F = γ·E_c·A_c·a_c·s·V / EI_eff
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn connector_force(
    gamma: f64,
    e_concrete: f64,
    a_concrete: f64,
    a_c: f64,
    s: f64,
    v: f64,
    ei_eff: f64,
) -> f64 {
    gamma * e_concrete * a_concrete * a_c * s * v / ei_eff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axial_and_bending_stress() {
        // 11 GPa × 0.05 m × 30 kNm / 1.5e6 N·m² = 11 MPa
        let sigma = axial_stress(1.0, 11.0e9, 0.05, 30_000.0, 1.5e6);
        assert!((sigma - 11.0e6).abs() < 1.0);

        // 0.5 × 11 GPa × 0.18 m × 30 kNm / 1.5e6 = 19.8 MPa
        let sigma_m = bending_stress(11.0e9, 0.18, 30_000.0, 1.5e6);
        assert!((sigma_m - 19.8e6).abs() < 1.0);
    }

    #[test]
    fn test_utilization() {
        let eta = timber_utilization(12.0e6, 24.0e6, 7.0e6, 14.0e6);
        assert!((eta - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_layer_moment_fraction() {
        // A layer whose E·I is a quarter of EI_eff carries a quarter of M
        let m_layer = layer_moment(1.0e10, 2.5e-5, 40_000.0, 1.0e6);
        assert!((m_layer - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_shear_stress() {
        let h = shear_critical_height(0.02, 0.16);
        assert!((h - 0.10).abs() < 1e-12);
        let tau = timber_max_shear_stress(11.0e9, h, 40_000.0, 2.0e6);
        // 0.5 × 11e9 × 0.01 × 40e3 / 2e6 = 1.1e6
        assert!((tau - 1.1e6).abs() < 1e-3);
    }

    #[test]
    fn test_connector_force_vanishes_with_spacing() {
        let f = connector_force(1.0, 33.0e9, 0.04, 0.1, 0.0, 40_000.0, 2.0e6);
        assert_eq!(f, 0.0);
        let f = connector_force(0.5, 33.0e9, 0.04, 0.1, 0.2, 40_000.0, 2.0e6);
        // 0.5 × 33e9 × 0.04 × 0.1 × 0.2 × 40e3 / 2e6 = 264e3
        assert!((f - 264_000.0).abs() < 1e-3);
    }
}
