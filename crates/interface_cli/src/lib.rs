//! Command-line Presentation Layer
//!
//! Stands in for the quote page: it gathers a request, hands it to the
//! estimator, and renders the estimate as JSON.
//!
//! # Architecture
//!
//! - **Config**: `QUOTE_*` environment variables, optionally from `.env`
//! - **CLI**: argument parsing
//! - **View**: rendering of estimates
//! - **Error Handling**: machine-readable error bodies
//!
//! # Example
//!
//! ```bash
//! echo '{"vehicleMake":"Toyota", ...}' | motor-quote estimate --seed 7
//! QUOTE_CURRENCY=GBP motor-quote estimate --form --input form.json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod view;

use core_kernel::FixedClock;
use domain_quote::{
    Estimate, FixedUncertainty, PremiumEstimator, QuoteForm, QuoteRequest, QuoteRequestDocument,
    RatingTable, UniformUncertainty,
};
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliError;

/// How the uncertainty factor is chosen for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncertaintyMode {
    /// Fresh entropy per estimate
    Random,
    /// Reproducible sequence from a seed
    Seeded(u64),
    /// Factor pinned to 1.0
    Neutral,
}

/// Builds an estimator from configuration
///
/// A rating table file, when configured, takes precedence over the standard
/// table; the configured currency applies in either case.
pub fn build_estimator(config: &CliConfig, year: Option<i32>) -> Result<PremiumEstimator, CliError> {
    let mut estimator = PremiumEstimator::new();

    if let Some(path) = &config.rating_table_path {
        let table = RatingTable::from_path(path)?;
        info!(
            path = %path.display(),
            product_code = %table.metadata.product_code,
            version = %table.metadata.version,
            "Loaded rating table"
        );
        estimator = estimator.with_rating_table(table);
    }

    estimator = estimator.with_currency(config.currency()?);

    if let Some(year) = year.or(config.current_year) {
        estimator = estimator.with_clock(FixedClock::year(year));
    }

    Ok(estimator)
}

/// Parses a request document, either typed JSON or raw form fields
pub fn parse_request(input: &str, form: bool) -> Result<QuoteRequest, CliError> {
    if form {
        let form: QuoteForm = serde_json::from_str(input)?;
        Ok(form.into_request()?)
    } else {
        let document: QuoteRequestDocument = serde_json::from_str(input)?;
        Ok(document.into_request()?)
    }
}

/// Runs one estimate
pub fn run_estimate(
    estimator: &PremiumEstimator,
    request: &QuoteRequest,
    mode: UncertaintyMode,
) -> Result<Estimate, CliError> {
    let estimate = match mode {
        UncertaintyMode::Random => estimator.estimate(request)?,
        UncertaintyMode::Seeded(seed) => {
            estimator.estimate_with(request, &mut UniformUncertainty::seeded(seed))?
        }
        UncertaintyMode::Neutral => {
            estimator.estimate_with(request, &mut FixedUncertainty::neutral())?
        }
    };

    info!(
        annual = %estimate.quote.annual_premium,
        monthly = %estimate.quote.monthly_premium,
        "Estimate complete"
    );
    Ok(estimate)
}

/// Serializes a value for stdout
pub fn render<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
