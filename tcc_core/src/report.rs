//! # Verification Report
//!
//! Plain-text report of one TCC calculation: inputs, cross-section, the
//! gamma-method formulas, and results. Rendering only reads the input and
//! result; writing the text to disk is left to the caller (see
//! [`crate::file_io::write_text_atomic`]).
//!
//! Inputs are printed in the units the engineer entered them in (GPa, m,
//! N/m, N); results in MPa, kN and kNm.

use std::fmt::Write;

use crate::calculations::tcc::{TccInput, TccResult};
use crate::equations::gamma_method_equations;
use crate::units::{
    Gigapascals, KilonewtonMeters, Kilonewtons, Megapascals, Meters, Millimeters, NewtonMeters,
    Newtons, Pascals,
};

/// Title line of every report
pub const REPORT_TITLE: &str = "TCC Element Stress Verification Report";

const RULE: &str = "════════════════════════════════════════════════════════════";

/// Render the full report as text.
///
/// # Example
///
/// ```rust
/// use tcc_core::calculations::{calculate, TccInput};
/// use tcc_core::report::render_report;
/// use tcc_core::settings::CalcSettings;
///
/// let input = TccInput::example();
/// let result = calculate(&input, &CalcSettings::default()).unwrap();
/// let text = render_report(&input, &result);
/// assert!(text.contains("Force in Connector"));
/// ```
pub fn render_report(input: &TccInput, result: &TccResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, input, result);
    out
}

fn gpa(pa: f64) -> f64 {
    Gigapascals::from(Pascals(pa)).0
}

fn mpa(pa: f64) -> f64 {
    Megapascals::from(Pascals(pa)).0
}

fn mm(m: f64) -> f64 {
    Millimeters::from(Meters(m)).0
}

fn kn(n: f64) -> f64 {
    Kilonewtons::from(Newtons(n)).0
}

fn knm(nm: f64) -> f64 {
    KilonewtonMeters::from(NewtonMeters(nm)).0
}

/// One aligned `label  value` line
fn row(out: &mut String, label: &str, value: std::fmt::Arguments) -> std::fmt::Result {
    writeln!(out, "  {:<38}{}", label, value)
}

fn write_report(out: &mut String, input: &TccInput, result: &TccResult) -> std::fmt::Result {
    let m = &input.materials;
    let g = &input.geometry;
    let c = &input.connection;
    let l = &input.load;
    let st = &input.strength;
    let cs = &result.composite;
    let r = &result.results;
    let f = &result.forces;

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  {}", REPORT_TITLE)?;
    if !input.label.is_empty() {
        writeln!(out, "  Element: {}", input.label)?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    writeln!(out, "INPUT PARAMETERS")?;
    row(out, "Elastic Modulus of Timber:", format_args!("{:.1} GPa", gpa(m.e_timber_pa)))?;
    row(out, "Elastic Modulus of Concrete:", format_args!("{:.1} GPa", gpa(m.e_concrete_pa)))?;
    row(
        out,
        "Timber Section (h x b):",
        format_args!("{:.3} m x {:.3} m", g.h_timber_m, g.b_timber_m),
    )?;
    row(
        out,
        "Concrete Section (h x b):",
        format_args!("{:.3} m x {:.3} m", g.h_concrete_m, g.b_concrete_m),
    )?;
    row(out, "Connector Spacing (s):", format_args!("{:.3} m", c.spacing_m))?;
    row(out, "Slip Modulus per Connector (k_ser):", format_args!("{:.0} N/m", c.k_ser_n_per_m))?;
    row(out, "Point Load (P):", format_args!("{:.0} N", l.point_load_n))?;
    row(out, "Span Length (L):", format_args!("{:.3} m", l.span_m))?;
    row(out, "Timber Bending Strength (f_m):", format_args!("{:.1} MPa", mpa(st.f_m_timber_pa)))?;
    row(out, "Timber Tensile Strength (f_t):", format_args!("{:.1} MPa", mpa(st.f_t_timber_pa)))?;
    writeln!(out)?;

    writeln!(out, "CROSS-SECTION")?;
    writeln!(
        out,
        "  A {:.0} mm concrete slab, {:.0} mm wide, rests on a {:.0} x {:.0} mm timber member.",
        mm(g.h_concrete_m),
        mm(g.b_concrete_m),
        mm(g.b_timber_m),
        mm(g.h_timber_m)
    )?;
    writeln!(
        out,
        "  Shear connectors at {:.0} mm spacing join the layers at the interface.",
        mm(c.spacing_m)
    )?;
    writeln!(
        out,
        "  The composite neutral axis lies {:.1} mm above the timber centroid",
        mm(cs.a_timber_m)
    )?;
    writeln!(
        out,
        "  ({:.1} mm above the timber base).",
        mm(cs.a_timber_m + 0.5 * g.h_timber_m)
    )?;
    writeln!(out)?;

    writeln!(out, "GAMMA METHOD FORMULAS (EN 1995-1-1 Annex B)")?;
    for eq in gamma_method_equations() {
        let meta = eq.metadata();
        writeln!(out, "  {}", meta.formula_plain)?;
    }
    writeln!(out)?;

    writeln!(out, "COMPOSITE SECTION")?;
    row(
        out,
        "Connection Efficiency Factor (gamma):",
        format_args!("{:.4}", cs.gamma_concrete),
    )?;
    row(out, "Neutral Axis Offset, Timber (a_t):", format_args!("{:.1} mm", mm(cs.a_timber_m)))?;
    row(
        out,
        "Neutral Axis Offset, Concrete (a_c):",
        format_args!("{:.1} mm", mm(cs.a_concrete_m)),
    )?;
    // N·m² to kN·m²
    row(
        out,
        "Effective Bending Stiffness (EI_eff):",
        format_args!("{:.1} kNm²", cs.ei_eff_nm2 / 1e3),
    )?;
    writeln!(out)?;

    writeln!(out, "CALCULATED RESULTS")?;
    row(out, "Mid-span Moment (M):", format_args!("{:.2} kNm", knm(f.m_mid_nm)))?;
    row(out, "Maximum Shear (V):", format_args!("{:.2} kN", kn(f.v_max_n)))?;
    row(out, "Normal Stress in Timber:", format_args!("{:.2} MPa", mpa(r.sigma_timber_pa)))?;
    row(out, "Bending Stress in Timber:", format_args!("{:.2} MPa", mpa(r.sigma_m_timber_pa)))?;
    row(out, "Normal Stress in Concrete:", format_args!("{:.2} MPa", mpa(r.sigma_concrete_pa)))?;
    row(
        out,
        "Bending Stress in Concrete:",
        format_args!("{:.2} MPa", mpa(r.sigma_m_concrete_pa)),
    )?;
    row(out, "Bending Moment in Concrete:", format_args!("{:.2} kNm", knm(r.m_concrete_nm)))?;
    row(out, "Normal Force in Concrete:", format_args!("{:.2} kN", kn(r.n_concrete_n)))?;
    row(
        out,
        "Maximum Shear Stress in Timber:",
        format_args!("{:.2} MPa", mpa(r.tau_timber_max_pa)),
    )?;
    row(out, "Shear-Critical Height (h_EC):", format_args!("{:.1} mm", mm(r.h_ec_tau_m)))?;
    row(out, "Force in Connector:", format_args!("{:.2} kN", kn(r.f_connector_n)))?;
    row(
        out,
        "Maximum Deflection:",
        format_args!(
            "{:.2} mm (L/{:.0})",
            mm(result.max_deflection()),
            result.span_to_deflection_ratio()
        ),
    )?;
    writeln!(out)?;

    writeln!(out, "TIMBER UTILIZATION")?;
    writeln!(
        out,
        "  sigma_m/f_m + sigma_t/f_t = {:.3}  {}",
        r.utilization_timber,
        if result.passes() { "PASS" } else { "FAIL" }
    )?;
    writeln!(out, "  (characteristic strengths; no k_mod or partial safety factors applied)")?;

    if !result.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "WARNINGS")?;
        for warning in &result.warnings {
            writeln!(out, "  {}", warning)?;
        }
    }

    writeln!(out, "{}", RULE)?;
    Ok(())
}
