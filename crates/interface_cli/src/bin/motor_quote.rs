//! Motor Quote - command-line estimator
//!
//! # Usage
//!
//! ```bash
//! # Estimate from a request file
//! motor-quote estimate --input request.json
//!
//! # Raw form fields on stdin, reproducible factor
//! cat form.json | motor-quote estimate --form --seed 42
//!
//! # Show the tariff in use
//! motor-quote rating-table --pretty
//! ```
//!
//! # Environment Variables
//!
//! * `QUOTE_CURRENCY` - ISO 4217 code (default: USD)
//! * `QUOTE_RATING_TABLE_PATH` - JSON rating table replacing the standard tariff
//! * `QUOTE_SEED` - Seed for the uncertainty factor
//! * `QUOTE_CURRENT_YEAR` - Year vehicle ages are measured against
//! * `QUOTE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use interface_cli::cli::{Cli, Commands, EstimateCommand};
use interface_cli::config::CliConfig;
use interface_cli::error::CliError;
use interface_cli::view::EstimateView;
use interface_cli::{build_estimator, parse_request, render, run_estimate, UncertaintyMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().map_err(CliError::from);
    let log_level = config.as_ref().map_or("warn", |c| c.log_level.as_str());
    init_tracing(log_level);

    let cli = Cli::parse();
    match config.and_then(|config| execute(&cli, &config)) {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Estimate failed");
            println!("{}", render(&err.to_response(), cli.pretty)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn execute(cli: &Cli, config: &CliConfig) -> Result<String, CliError> {
    match &cli.command {
        Commands::Estimate(cmd) => {
            let estimator = build_estimator(config, cmd.year)?;
            let input = read_input(cmd)?;
            let request = parse_request(&input, cmd.form)?;
            let estimate = run_estimate(&estimator, &request, uncertainty_mode(cmd, config))?;
            render(&EstimateView::try_from(&estimate)?, cli.pretty)
        }
        Commands::RatingTable => {
            let estimator = build_estimator(config, None)?;
            render(estimator.rating_table(), cli.pretty)
        }
    }
}

fn uncertainty_mode(cmd: &EstimateCommand, config: &CliConfig) -> UncertaintyMode {
    if cmd.deterministic {
        return UncertaintyMode::Neutral;
    }
    match cmd.seed.or(config.seed) {
        Some(seed) => UncertaintyMode::Seeded(seed),
        None => UncertaintyMode::Random,
    }
}

fn read_input(cmd: &EstimateCommand) -> Result<String, CliError> {
    match &cmd.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Initializes the tracing subscriber, writing to stderr so stdout stays JSON
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
