//! Command-line arguments

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "motor-quote",
    version,
    about = "Estimate a motor insurance premium and its risk factors"
)]
pub struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Estimate a premium from a JSON request
    Estimate(EstimateCommand),
    /// Print the active rating table
    RatingTable,
}

#[derive(Debug, Args)]
pub struct EstimateCommand {
    /// Request file; reads stdin when omitted
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Treat the input as raw form fields (all values as strings)
    #[arg(long)]
    pub form: bool,

    /// Seed for the uncertainty factor
    #[arg(long)]
    pub seed: Option<u64>,

    /// Year to measure vehicle age against
    #[arg(long)]
    pub year: Option<i32>,

    /// Pin the uncertainty factor to 1.0 and report the base premium
    #[arg(long, conflicts_with = "seed")]
    pub deterministic: bool,
}
