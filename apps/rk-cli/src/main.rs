mod error;

use clap::{Parser, ValueEnum};
use error::{CliError, CliResult};
use rk_cycle::{
    CycleConfigDef, CycleParameters, DiagramData, PerformanceMetrics, load_def,
    solve_reheat_cycle,
};
use rk_fluids::{If97Model, SteamModel};
use rk_report::{CycleSummary, DEFAULT_PLOT_FILE, PlotConfig, render_ts_diagram, write_text};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rk-cli")]
#[command(about = "Ideal reheat Rankine cycle calculator with T-s diagram", long_about = None)]
struct Cli {
    /// Load cycle parameters from a YAML or JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path for the T-s diagram PNG
    #[arg(short, long, default_value = DEFAULT_PLOT_FILE)]
    output: PathBuf,

    /// Skip rendering the T-s diagram
    #[arg(long)]
    no_plot: bool,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Steam property backend
    #[arg(long, value_enum, default_value_t = Backend::If97)]
    backend: Backend,

    /// Condenser pressure, e.g. "10 kPa"
    #[arg(long)]
    condenser_pressure: Option<String>,

    /// Boiler pressure, e.g. "4 MPa"
    #[arg(long)]
    boiler_pressure: Option<String>,

    /// Reheat pressure, e.g. "400 kPa"
    #[arg(long)]
    reheat_pressure: Option<String>,

    /// Boiler exit temperature, e.g. "400 C"
    #[arg(long)]
    boiler_temperature: Option<String>,

    /// Reheat exit temperature, e.g. "400 C"
    #[arg(long)]
    reheat_temperature: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// IAPWS-IF97 (built in)
    If97,
    /// CoolProp (requires the `coolprop` feature)
    Coolprop,
}

fn main() -> CliResult<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> CliResult<()> {
    let params = resolve_parameters(cli)?;
    let steam = select_backend(cli.backend)?;
    info!(backend = steam.name(), ?params, "evaluating cycle");

    let states = solve_reheat_cycle(&params, steam.as_ref())?;
    let metrics = PerformanceMetrics::from_states(&states);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => write_text(&mut out, &states, &metrics)?,
        OutputFormat::Json => {
            let summary = CycleSummary::new(steam.name(), &states, &metrics);
            writeln!(out, "{}", summary.to_json()?)?;
        }
    }
    out.flush()?;

    if !cli.no_plot {
        let diagram = DiagramData::build(&states, steam.as_ref())?;
        render_ts_diagram(&diagram, &cli.output, &PlotConfig::default())?;
    }

    Ok(())
}

/// Defaults, then the config file, then command-line overrides.
fn resolve_parameters(cli: &Cli) -> CliResult<CycleParameters> {
    let base = match &cli.config {
        Some(path) => load_def(path)?,
        None => CycleConfigDef::default(),
    };
    let overrides = CycleConfigDef {
        condenser_pressure: cli.condenser_pressure.clone(),
        boiler_pressure: cli.boiler_pressure.clone(),
        reheat_pressure: cli.reheat_pressure.clone(),
        boiler_exit_temperature: cli.boiler_temperature.clone(),
        reheat_exit_temperature: cli.reheat_temperature.clone(),
    };
    Ok(base.overlay(overrides).resolve()?)
}

fn select_backend(backend: Backend) -> CliResult<Box<dyn SteamModel>> {
    match backend {
        Backend::If97 => Ok(Box::new(If97Model::new())),
        #[cfg(feature = "coolprop")]
        Backend::Coolprop => Ok(Box::new(rk_fluids::CoolPropModel::new())),
        #[cfg(not(feature = "coolprop"))]
        Backend::Coolprop => Err(CliError::BackendUnavailable {
            backend: "coolprop",
            feature: "coolprop",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reproduce_defaults() {
        let cli = Cli::try_parse_from(["rk-cli"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("rankine_reheat_ts.png"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.backend, Backend::If97);
        assert!(!cli.no_plot);
        assert_eq!(resolve_parameters(&cli).unwrap(), CycleParameters::default());
    }

    #[test]
    fn overrides_take_precedence_over_config_file() {
        let path = std::env::temp_dir().join("rk_cli_override.yaml");
        std::fs::write(&path, "boiler_pressure: \"6 MPa\"\nreheat_pressure: \"600 kPa\"\n")
            .unwrap();

        let cli = Cli::try_parse_from([
            "rk-cli",
            "--config",
            path.to_str().unwrap(),
            "--boiler-pressure",
            "8 MPa",
        ])
        .unwrap();
        let params = resolve_parameters(&cli).unwrap();
        assert!((params.boiler_pressure.value - 8.0e6).abs() < 1e-6);
        assert!((params.reheat_pressure.value - 6.0e5).abs() < 1e-6);
    }

    #[test]
    fn parses_format_and_flags() {
        let cli = Cli::try_parse_from([
            "rk-cli",
            "--format",
            "json",
            "--no-plot",
            "-o",
            "out.png",
            "--reheat-temperature",
            "450 C",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_plot);
        assert_eq!(cli.output, PathBuf::from("out.png"));
        let params = resolve_parameters(&cli).unwrap();
        assert!((params.reheat_exit_temperature.value - 723.15).abs() < 1e-9);
    }

    #[test]
    fn invalid_override_is_a_config_error() {
        let cli = Cli::try_parse_from(["rk-cli", "--reheat-pressure", "5 MPa"]).unwrap();
        assert!(matches!(resolve_parameters(&cli), Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(Cli::try_parse_from(["rk-cli", "--backend", "refprop"]).is_err());
    }

    #[cfg(not(feature = "coolprop"))]
    #[test]
    fn coolprop_without_feature_is_reported() {
        let err = select_backend(Backend::Coolprop).err().unwrap();
        assert!(matches!(err, CliError::BackendUnavailable { .. }));
    }
}
