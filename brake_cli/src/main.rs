//! # BrakeMate CLI Application
//!
//! Terminal front end for the brake sizing calculator. Prompts for each
//! input (or reads them from a JSON file), runs the full pipeline once and
//! prints the results, the validation messages and the final outcome.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use brake_core::calculations::{calculate_breakdown, FieldGroup, InputField, VehicleInputs};
use brake_core::equations::{Equation, EquationCategory};
use brake_core::errors::{CalcError, CalcResult};
use brake_core::report::{evaluate, BrakeReport};
use brake_core::validation::WarningKind;
use brake_core::{BuildStatus, Classification};
use clap::Parser;

#[derive(Parser)]
#[command(name = "brakemate")]
#[command(about = "BrakeMate - braking performance calculator for small-vehicle teams")]
#[command(version)]
struct Cli {
    /// Read vehicle inputs from a JSON file instead of prompting
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Use the default scenario without prompting
    #[arg(long, conflicts_with = "input")]
    defaults: bool,

    /// Also print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Print every calculation stage with its formula
    #[arg(long)]
    breakdown: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_inputs(defaults: VehicleInputs) -> VehicleInputs {
    let mut inputs = defaults;
    let mut group = None;
    for field in InputField::ALL {
        if group != Some(field.group()) {
            group = Some(field.group());
            println!();
            println!("{}", field.group().title());
        }
        let value = prompt_f64(
            &format!("  {} [{}]: ", field.display_label(), inputs.get(field)),
            inputs.get(field),
        );
        inputs = inputs.with(field, value);
    }
    println!();
    inputs
}

fn load_inputs(path: &Path) -> CalcResult<VehicleInputs> {
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    log::info!("loaded inputs from {}", path.display());
    VehicleInputs::from_json(&json)
}

fn print_inputs(inputs: &VehicleInputs) {
    for group in [FieldGroup::VehicleParameters, FieldGroup::BrakeSystem] {
        println!("{}:", group.title());
        for field in InputField::ALL.iter().filter(|f| f.group() == group) {
            println!("  {:<28} {} {}", field.label(), inputs.get(*field), field.unit());
        }
    }
}

fn breakdown_lines(inputs: &VehicleInputs) -> Vec<String> {
    let breakdown = calculate_breakdown(inputs);
    let mut lines = Vec::new();
    for category in EquationCategory::ALL {
        lines.push(format!("  {}:", category.display_name()));
        for equation in Equation::in_category(category) {
            let meta = equation.metadata();
            lines.push(format!(
                "    {:<22} {:<32} = {:.4} {}",
                meta.name,
                meta.formula_plain,
                breakdown.value_of(equation),
                meta.result_units
            ));
        }
    }
    lines
}

fn print_breakdown(inputs: &VehicleInputs) {
    println!("Calculation Breakdown:");
    for line in breakdown_lines(inputs) {
        println!("{}", line);
    }
    println!();
}

fn print_report(report: &BrakeReport) {
    println!("═══════════════════════════════════════");
    println!("  BRAKING PERFORMANCE RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    print_inputs(&report.inputs);
    println!();
    println!("Results:");
    for metric in report.metrics() {
        println!("  {:<24} {:>12} {}", metric.label, metric.value, metric.unit);
    }
    println!();
    println!("Validation:");
    for warning in &report.warnings {
        println!("  {} {}", kind_icon(warning.kind), warning.message);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", outcome_line(&report.classification));
    println!("═══════════════════════════════════════");
}

fn outcome_line(outcome: &Classification) -> String {
    match (outcome.status, outcome.failure_type) {
        (BuildStatus::Failed, Some(failure)) => format!("FAIL ({})", failure.description()),
        (BuildStatus::Failed, None) => "FAIL".to_string(),
        (BuildStatus::Complete, _) => "PASS".to_string(),
        (BuildStatus::Building, _) => "PENDING".to_string(),
    }
}

fn kind_icon(kind: WarningKind) -> &'static str {
    match kind {
        WarningKind::Error => "[ERROR]",
        WarningKind::Warning => "[WARN]",
        WarningKind::Success => "[OK]",
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn run(cli: &Cli) -> CalcResult<()> {
    let inputs = match &cli.input {
        Some(path) => load_inputs(path)?,
        None if cli.defaults => VehicleInputs::default(),
        None => {
            println!("BrakeMate - Braking Performance Calculator");
            println!("==========================================");
            println!("Press Enter to keep the value in brackets.");
            prompt_inputs(VehicleInputs::default())
        }
    };

    let report = evaluate(inputs);
    log::info!(
        "status {:?}, {} validation message(s)",
        report.classification.status,
        report.warnings.len()
    );

    if cli.breakdown {
        print_breakdown(&report.inputs);
    }
    print_report(&report);

    if cli.json {
        println!();
        println!("JSON Output (for API use):");
        println!("{}", report.to_json_pretty()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brake_core::FailureType;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from(["brakemate", "--defaults", "--json", "-vv"]).unwrap();
        assert!(cli.defaults);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["brakemate", "--defaults", "--input", "car.json"]).is_err());
    }

    #[test]
    fn test_outcome_line() {
        let fail = Classification {
            status: BuildStatus::Failed,
            failure_type: Some(FailureType::Sliding),
        };
        assert_eq!(outcome_line(&fail), "FAIL (wheels lock up and the car slides)");
        let pass = Classification {
            status: BuildStatus::Complete,
            failure_type: None,
        };
        assert_eq!(outcome_line(&pass), "PASS");
    }

    #[test]
    fn test_breakdown_grouped_by_category() {
        let lines = breakdown_lines(&VehicleInputs::default());
        assert_eq!(lines.len(), EquationCategory::ALL.len() + Equation::ALL.len());
        assert_eq!(lines[0], "  Hydraulics:");
        assert!(lines[1].trim_start().starts_with("Piston Area"));
        assert_eq!(lines[4], "  Torque:");
        assert_eq!(lines[7], "  Vehicle Dynamics:");
        assert_eq!(lines[10], "  Kinematics:");
        assert!(lines[13].trim_start().starts_with("Stopping Time"));
        assert!(lines[13].ends_with("73.6828 s"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_inputs(Path::new("/nonexistent/brakemate-inputs.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_inputs_file() {
        let path = std::env::temp_dir().join(format!("brakemate_cli_{}.json", std::process::id()));
        fs::write(&path, r#"{"vehicle_mass_kg": 320.0}"#).unwrap();
        let inputs = load_inputs(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(inputs.vehicle_mass_kg, 320.0);
        assert_eq!(inputs.friction_coefficient, 0.4);
    }
}
