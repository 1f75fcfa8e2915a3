//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "provador-algo",
    version,
    about = "Virtual try-on size recommendation",
    long_about = "Estimate body measurements and recommend a size from a merchant size chart.\n\n\
                  Inputs and outputs are JSON. Pass '-' as a path to read from stdin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (defaults to config/default.toml and config/local.toml).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate bust, waist and hips from basic data.
    Estimate {
        /// JSON file with gender, height, weight and age.
        #[arg(long, short, value_name = "PATH")]
        input: PathBuf,
    },

    /// Recommend a size for known measurements.
    Recommend {
        /// JSON file with bust, waist and hips.
        #[arg(long, short, value_name = "PATH")]
        measurements: PathBuf,

        /// JSON size chart: {"SIZE": {"Measurement": "min - max"}}.
        #[arg(long, short, value_name = "PATH")]
        chart: PathBuf,
    },

    /// Estimate from basic data, then recommend a size.
    Fit {
        /// JSON file with gender, height, weight and age.
        #[arg(long, short, value_name = "PATH")]
        input: PathBuf,

        /// JSON size chart.
        #[arg(long, short, value_name = "PATH")]
        chart: PathBuf,

        /// Measurements that replace the estimate, as the user would adjust them.
        #[arg(long, short, value_name = "PATH")]
        measurements: Option<PathBuf>,
    },
}
