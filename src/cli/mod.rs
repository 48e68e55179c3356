pub mod analyze;
pub mod config;
pub mod detect;
pub mod keywords;

use std::path::Path;

use clap::{Parser, Subcommand};

use finhealth::error::Result;
use finhealth::settings::OutputFormat;

/// Reads an upload from disk, keeping only its file name for format detection.
pub(crate) fn read_upload(file: &str) -> Result<(Vec<u8>, String)> {
    let content = std::fs::read(file)?;
    let filename = Path::new(file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file)
        .to_string();
    Ok((content, filename))
}

#[derive(Parser)]
#[command(
    name = "finhealth",
    about = "Extract financial health metrics from SME ledger exports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract metric buckets from a CSV/XLSX export.
    Analyze {
        /// Path to CSV or Excel file
        file: String,
        /// Industry tag attached to the metrics
        #[arg(long)]
        industry: Option<String>,
        /// Locale tag passed through with the result (e.g. en, hi)
        #[arg(long)]
        locale: Option<String>,
        /// Print the metrics envelope as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which extraction strategy a file would use.
    Detect {
        /// Path to CSV or Excel file
        file: String,
    },
    /// List the classification keywords.
    Keywords,
    /// Show or update settings.
    Config {
        /// Default locale tag
        #[arg(long)]
        locale: Option<String>,
        /// Default industry tag
        #[arg(long)]
        industry: Option<String>,
        /// Log level used when RUST_LOG is unset
        #[arg(long = "log-level")]
        log_level: Option<String>,
        /// Default output format
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
    },
}
