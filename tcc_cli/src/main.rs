//! # TCC CLI Application
//!
//! Terminal front-end for the timber-concrete composite beam calculator.
//! Inputs are entered in GPa, mm, kN and kN/mm, or read from a `.tcc`
//! project file, then converted to SI before calling `tcc_core`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tcc_core::calculations::tcc::{
    ConnectionParams, LoadCase, MaterialProperties, SectionGeometry, StrengthLimits,
};
use tcc_core::equations::generate_equations_markdown;
use tcc_core::diagram::DiagramData;
use tcc_core::file_io::{load_project, save_diagram_json, save_result_json, write_text_atomic};
use tcc_core::report::render_report;
use tcc_core::units::{
    Gigapascals, Kilonewtons, KilonewtonsPerMillimeter, Megapascals, Meters, Millimeters, Newtons,
    NewtonsPerMeter, Pascals,
};
use tcc_core::{calculate, CalcError, CalcResult, CalcSettings, TccInput, TccResult};

/// Timber-concrete composite beam verification (EN 1995-1-1 Annex B)
#[derive(Parser, Debug)]
#[command(name = "tcc_cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project file (.tcc) to calculate instead of prompting
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Deflection samples per half-span (overrides the project setting)
    #[arg(short, long)]
    points: Option<usize>,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Write the JSON result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the plain-text verification report to this file
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Write renderer-facing diagram data (JSON) to this file
    #[arg(short, long)]
    diagram: Option<PathBuf>,

    /// Print the equations reference and exit
    #[arg(long)]
    equations: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, env = "TCC_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Ask for one value. An empty line or end of input keeps the default;
/// anything else must parse as a number.
fn prompt_f64<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    field: &str,
    prompt: &str,
    default: f64,
) -> CalcResult<f64> {
    let io_error = |e: io::Error| CalcError::file_error("prompt", "<stdin>", e.to_string());

    write!(writer, "{} [{}]: ", prompt, default).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    let mut line = String::new();
    reader.read_line(&mut line).map_err(io_error)?;
    let text = line.trim();
    if text.is_empty() {
        return Ok(default);
    }

    text.parse().map_err(|_| {
        CalcError::invalid_input(field, text, "Not a number (use '.' as the decimal separator)")
    })
}

/// Collect an input interactively, defaulting to the reference element.
///
/// Prompts are in front-end units; the returned input is SI.
fn prompt_input<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> CalcResult<TccInput> {
    let example = TccInput::example();
    let gpa = |pa: f64| Gigapascals::from(Pascals(pa)).0;
    let mm = |m: f64| Millimeters::from(Meters(m)).0;
    let kn = |n: f64| Kilonewtons::from(Newtons(n)).0;
    let mpa = |pa: f64| Megapascals::from(Pascals(pa)).0;
    let kn_per_mm = |n_per_m: f64| KilonewtonsPerMillimeter::from(NewtonsPerMeter(n_per_m)).0;
    let heading = |writer: &mut W, text: &str| {
        writeln!(writer, "{}", text)
            .map_err(|e| CalcError::file_error("prompt", "<stdout>", e.to_string()))
    };

    let mut ask = |field: &str, prompt: &str, default: f64, writer: &mut W| {
        prompt_f64(reader, writer, field, prompt, default)
    };

    heading(writer, "Materials")?;
    let e_timber = ask(
        "e_timber_pa",
        "  Timber elastic modulus E_t (GPa)",
        gpa(example.materials.e_timber_pa),
        writer,
    )?;
    let e_concrete = ask(
        "e_concrete_pa",
        "  Concrete elastic modulus E_c (GPa)",
        gpa(example.materials.e_concrete_pa),
        writer,
    )?;
    heading(writer, "Cross-section")?;
    let b_timber =
        ask("b_timber_m", "  Timber width b_t (mm)", mm(example.geometry.b_timber_m), writer)?;
    let h_timber =
        ask("h_timber_m", "  Timber height h_t (mm)", mm(example.geometry.h_timber_m), writer)?;
    let b_concrete = ask(
        "b_concrete_m",
        "  Concrete width b_c (mm)",
        mm(example.geometry.b_concrete_m),
        writer,
    )?;
    let h_concrete = ask(
        "h_concrete_m",
        "  Concrete height h_c (mm)",
        mm(example.geometry.h_concrete_m),
        writer,
    )?;
    heading(writer, "Connection")?;
    let spacing =
        ask("spacing_m", "  Connector spacing s (mm)", mm(example.connection.spacing_m), writer)?;
    let k_ser = ask(
        "k_ser_n_per_m",
        "  Slip modulus k_ser (kN/mm)",
        kn_per_mm(example.connection.k_ser_n_per_m),
        writer,
    )?;
    heading(writer, "Load")?;
    let load = ask(
        "point_load_n",
        "  Mid-span point load P (kN)",
        kn(example.load.point_load_n),
        writer,
    )?;
    let span = ask("span_m", "  Span L (mm)", mm(example.load.span_m), writer)?;
    heading(writer, "Timber strength")?;
    let f_m = ask(
        "f_m_timber_pa",
        "  Bending strength f_m (MPa)",
        mpa(example.strength.f_m_timber_pa),
        writer,
    )?;
    let f_t = ask(
        "f_t_timber_pa",
        "  Tensile strength f_t (MPa)",
        mpa(example.strength.f_t_timber_pa),
        writer,
    )?;
    heading(writer, "")?;

    Ok(TccInput {
        label: "CLI".to_string(),
        materials: MaterialProperties {
            e_timber_pa: Pascals::from(Gigapascals(e_timber)).0,
            e_concrete_pa: Pascals::from(Gigapascals(e_concrete)).0,
        },
        geometry: SectionGeometry {
            b_timber_m: Meters::from(Millimeters(b_timber)).0,
            h_timber_m: Meters::from(Millimeters(h_timber)).0,
            b_concrete_m: Meters::from(Millimeters(b_concrete)).0,
            h_concrete_m: Meters::from(Millimeters(h_concrete)).0,
        },
        connection: ConnectionParams {
            spacing_m: Meters::from(Millimeters(spacing)).0,
            k_ser_n_per_m: NewtonsPerMeter::from(KilonewtonsPerMillimeter(k_ser)).0,
        },
        load: LoadCase {
            point_load_n: Newtons::from(Kilonewtons(load)).0,
            span_m: Meters::from(Millimeters(span)).0,
        },
        strength: StrengthLimits {
            f_m_timber_pa: Pascals::from(Megapascals(f_m)).0,
            f_t_timber_pa: Pascals::from(Megapascals(f_t)).0,
        },
    })
}

fn print_summary(input: &TccInput, result: &TccResult) {
    let g = &input.geometry;
    let cs = &result.composite;
    let r = &result.results;

    println!("═══════════════════════════════════════");
    println!("  TCC CALCULATION RESULTS: {}", result.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Timber:    {:.0} x {:.0} mm, E = {:.1} GPa",
        g.b_timber_m * 1e3, g.h_timber_m * 1e3, input.materials.e_timber_pa / 1e9);
    println!("  Concrete:  {:.0} x {:.0} mm, E = {:.1} GPa",
        g.b_concrete_m * 1e3, g.h_concrete_m * 1e3, input.materials.e_concrete_pa / 1e9);
    println!("  Connector: s = {:.0} mm, k_ser = {:.1} kN/mm",
        input.connection.spacing_m * 1e3, input.connection.k_ser_n_per_m / 1e6);
    println!("  Load:      P = {:.1} kN at mid-span, L = {:.3} m",
        input.load.point_load_n / 1e3, input.load.span_m);
    println!();
    println!("Composite section:");
    println!("  γ       = {:.4}", cs.gamma_concrete);
    println!("  a_t     = {:.1} mm", cs.a_timber_m * 1e3);
    println!("  a_c     = {:.1} mm", cs.a_concrete_m * 1e3);
    println!("  EI_eff  = {:.1} kNm²", cs.ei_eff_nm2 / 1e3);
    println!();
    println!("Demand:");
    println!("  M_mid   = {:.2} kNm", result.forces.m_mid_nm / 1e3);
    println!("  V_max   = {:.2} kN", result.forces.v_max_n / 1e3);
    println!(
        "  δ_max   = {:.2} mm (L/{:.0})",
        result.max_deflection() * 1e3,
        result.span_to_deflection_ratio()
    );
    println!();
    println!("Stresses and forces:");
    println!("  σ_t     = {:.2} MPa", r.sigma_timber_pa / 1e6);
    println!("  σ_m,t   = {:.2} MPa", r.sigma_m_timber_pa / 1e6);
    println!("  σ_c     = {:.2} MPa", r.sigma_concrete_pa / 1e6);
    println!("  σ_m,c   = {:.2} MPa", r.sigma_m_concrete_pa / 1e6);
    println!("  N_c     = {:.2} kN", r.n_concrete_n / 1e3);
    println!("  M_c     = {:.2} kNm", r.m_concrete_nm / 1e3);
    println!("  τ_max   = {:.2} MPa at {:.1} mm", r.tau_timber_max_pa / 1e6, r.h_ec_tau_m * 1e3);
    println!("  F_conn  = {:.2} kN", r.f_connector_n / 1e3);
    println!();
    println!("Capacity Checks:");
    println!(
        "  Timber:  {:.2} (σ_m/f_m + σ_t/f_t) {}",
        r.utilization_timber,
        status_icon(result.passes())
    );
    for warning in &result.warnings {
        println!("  Warning: {}", warning);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", if result.passes() { "PASS" } else { "FAIL" });
    println!("═══════════════════════════════════════");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn run(cli: &Cli) -> Result<TccResult, CalcError> {
    let (input, mut settings) = match &cli.input {
        Some(path) => {
            let project = load_project(path)?;
            tracing::info!(path = %path.display(), job = %project.meta.job_id, "loaded project");
            (project.input, project.settings)
        }
        None => {
            println!("TCC Calc - Timber-Concrete Composite Beam (EN 1995-1-1 Annex B)");
            println!("================================================================");
            println!("Press Enter to accept the value in brackets.");
            println!();
            let input = prompt_input(&mut io::stdin().lock(), &mut io::stdout())?;
            (input, CalcSettings::default())
        }
    };

    if let Some(points) = cli.points {
        settings.deflection_points_per_half = points;
    }

    let result = calculate(&input, &settings)?;
    print_summary(&input, &result);

    if cli.json {
        println!();
        println!("JSON Output:");
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    if let Some(path) = &cli.output {
        save_result_json(&result, path)?;
        println!("Result written to {}", path.display());
    }

    if let Some(path) = &cli.diagram {
        save_diagram_json(&DiagramData::from_calc(&input, &result), path)?;
        println!("Diagram data written to {}", path.display());
    }

    // A failed report write is reported but does not discard the result
    if let Some(path) = &cli.report {
        match write_text_atomic(&render_report(&input, &result), path) {
            Ok(()) => println!("Report written to {}", path.display()),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "report export failed");
                report_error(&e);
            }
        }
    }

    Ok(result)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if cli.equations {
        print!("{}", generate_equations_markdown());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "tcc_cli", "--input", "floor.tcc", "--points", "20", "--json", "--report", "out.txt",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("floor.tcc")));
        assert_eq!(cli.points, Some(20));
        assert!(cli.json);
        assert_eq!(cli.report, Some(PathBuf::from("out.txt")));
        assert!(!cli.equations);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tcc_cli"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_rejects_bad_points() {
        assert!(Cli::try_parse_from(["tcc_cli", "--points", "many"]).is_err());
    }

    #[test]
    fn test_cli_diagram_flag() {
        let cli = Cli::try_parse_from(["tcc_cli", "-i", "floor.tcc", "-d", "floor.json"]).unwrap();
        assert_eq!(cli.diagram, Some(PathBuf::from("floor.json")));
        assert!(Cli::try_parse_from(["tcc_cli"]).unwrap().diagram.is_none());
    }

    #[test]
    fn test_prompt_empty_answers_keep_reference_element() {
        let mut reader = Cursor::new("\n".repeat(12));
        let mut writer = Vec::new();
        let input = prompt_input(&mut reader, &mut writer).unwrap();

        let example = TccInput::example();
        let close = |a: f64, b: f64| (a - b).abs() <= 1e-9 * b.abs();
        assert!(close(input.materials.e_timber_pa, example.materials.e_timber_pa));
        assert!(close(input.geometry.h_timber_m, example.geometry.h_timber_m));
        assert!(close(input.connection.spacing_m, example.connection.spacing_m));
        assert!(close(input.connection.k_ser_n_per_m, example.connection.k_ser_n_per_m));
        assert!(close(input.load.point_load_n, example.load.point_load_n));
        assert!(close(input.strength.f_t_timber_pa, example.strength.f_t_timber_pa));

        let shown = String::from_utf8(writer).unwrap();
        assert!(shown.contains("Span L (mm) ["));
        assert!(shown.contains("Timber strength"));
    }

    #[test]
    fn test_prompt_end_of_input_keeps_default() {
        let mut reader = Cursor::new("");
        let value = prompt_f64(&mut reader, &mut Vec::new(), "span_m", "Span", 1600.0).unwrap();
        assert_eq!(value, 1600.0);
    }

    #[test]
    fn test_prompt_converts_entered_units() {
        let mut reader = Cursor::new("12\n\n\n\n\n\n250\n");
        let input = prompt_input(&mut reader, &mut Vec::new()).unwrap();
        assert!((input.materials.e_timber_pa - 12.0e9).abs() < 1.0);
        assert!((input.connection.spacing_m - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_prompt_rejects_unparseable_text() {
        let mut reader = Cursor::new("abc\n");
        let err = prompt_input(&mut reader, &mut Vec::new()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("e_timber_pa"));

        // A decimal comma is not silently replaced by the default
        let mut reader = Cursor::new("\n\n\n\n\n\n0,5\n");
        let err = prompt_input(&mut reader, &mut Vec::new()).unwrap_err();
        assert_eq!(err.field(), Some("spacing_m"));
        assert!(err.to_string().contains("0,5"));
    }

    #[test]
    fn test_status_icon() {
        assert_eq!(status_icon(true), "[OK]");
        assert_eq!(status_icon(false), "[FAIL]");
    }
}
