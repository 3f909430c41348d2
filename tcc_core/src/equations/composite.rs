//! # Gamma Method Formulas
//!
//! Effective bending stiffness of a two-layer mechanically jointed beam with
//! flexible shear connection, per EN 1995-1-1 Annex B.
//!
//! Layer 1 is the concrete slab (top), layer 2 the timber member (bottom).
//! The timber is taken as the reference layer (`γ₂ = 1`); only the concrete
//! contribution is reduced by the connection efficiency factor.
//!
//! ```text
//!     ┌───────────────────┐  ─┬─
//!     │     concrete      │   │ h_c      a_c ↑ (concrete centroid above NA)
//!     └──────┬─────┬──────┘  ─┼─ interface ────────────── neutral axis
//!            │     │          │            a_t ↓ (timber centroid below NA)
//!            │ tim │          │ h_t
//!            │ ber │          │
//!            └─────┘         ─┴─
//! ```
//!
//! ## References
//!
//! - EN 1995-1-1:2004 Annex B, Eq. (B.1) to (B.5)

use std::f64::consts::PI;

use super::section::centroid_separation;

/// Connection efficiency factor for the concrete layer
///
/// # Formula (EN 1995-1-1 Eq. B.5)
/// ```text
/// γ = 1 / (1 + π²·E_c·A_c·s / (k·L²))
/// ```
///
/// `k → ∞` (rigid connection) gives `γ → 1`; `k → 0` gives `γ → 0` (layers
/// act independently).
///
/// Callers guarantee `k_ser > 0` and `l > 0`.
///
/// # Example
/// ```rust
/// use tcc_core::equations::composite::gamma_factor;
///
/// let gamma = gamma_factor(33.0e9, 0.04, 0.8, 9.0e7, 1.6);
/// assert!(gamma > 0.0 && gamma < 1.0);
/// ```
#[inline]
pub fn gamma_factor(e_concrete: f64, a_concrete: f64, s: f64, k_ser: f64, l: f64) -> f64 {
    1.0 / (1.0 + PI * PI * e_concrete * a_concrete * s / (k_ser * l * l))
}

/// Distance from the timber centroid to the composite neutral axis
///
/// # Formula (EN 1995-1-1 Eq. B.6, two layers)
/// ```text
/// a_t = γ·E_c·A_c·(h_c + h_t) / (2·(γ·E_c·A_c + E_t·A_t))
/// ```
///
/// The factor of 2 applies to the whole denominator sum.
#[inline]
pub fn timber_neutral_axis_offset(
    e_timber: f64,
    a_timber: f64,
    e_concrete: f64,
    a_concrete: f64,
    h_timber: f64,
    h_concrete: f64,
    gamma: f64,
) -> f64 {
    let gamma_ea_c = gamma * e_concrete * a_concrete;
    gamma_ea_c * (h_concrete + h_timber) / (2.0 * (gamma_ea_c + e_timber * a_timber))
}

/// Distance from the concrete centroid to the composite neutral axis
///
/// The two centroids are `h_t/2 + h_c/2` apart and the neutral axis lies
/// between them.
///
/// # Formula
/// a_c = h_t/2 − a_t + h_c/2
#[inline]
pub fn concrete_neutral_axis_offset(h_timber: f64, h_concrete: f64, a_timber: f64) -> f64 {
    centroid_separation(h_timber, h_concrete) - a_timber
}

/// Effective bending stiffness of the composite section
///
/// # Formula (EN 1995-1-1 Eq. B.1)
/// ```text
/// EI_eff = E_t·I_t + E_c·I_c + E_t·A_t·a_t² + γ·E_c·A_c·a_c²
/// ```
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn effective_bending_stiffness(
    e_timber: f64,
    i_timber: f64,
    a_timber: f64,
    a_t: f64,
    e_concrete: f64,
    i_concrete: f64,
    a_concrete: f64,
    a_c: f64,
    gamma: f64,
) -> f64 {
    let timber = e_timber * i_timber + e_timber * a_timber * a_t * a_t;
    let concrete = e_concrete * i_concrete + gamma * e_concrete * a_concrete * a_c * a_c;
    timber + concrete
}

/// Bending stiffness of the two layers acting without any interaction
///
/// # Formula
/// EI_0 = E_t·I_t + E_c·I_c
#[inline]
pub fn non_composite_bending_stiffness(
    e_timber: f64,
    i_timber: f64,
    e_concrete: f64,
    i_concrete: f64,
) -> f64 {
    e_timber * i_timber + e_concrete * i_concrete
}
