//! netpath — lists the slowest routed net delays in a timing report.
//!
//! Reads the JSON report written by the place-and-route timing analyser,
//! keeps the driver/endpoint pairs whose names contain the `--src` and
//! `--dst` substrings, and prints the `--results` slowest of them.

#![warn(missing_docs)]

mod rank;
mod render;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use netpath_config::OutputFormat;
use tracing_subscriber::EnvFilter;

/// Rank the slowest net delays in a JSON timing report.
#[derive(Parser, Debug)]
#[command(name = "netpath", version, about = "Rank net delays in a JSON timing report")]
pub struct Cli {
    /// JSON timing report (`-` reads standard input).
    pub file: PathBuf,

    /// Only nets whose driver name contains this substring [default: match all].
    #[arg(long)]
    pub src: Option<String>,

    /// Only endpoints whose cell name contains this substring [default: match all].
    #[arg(long)]
    pub dst: Option<String>,

    /// Number of paths reported [default: 100].
    #[arg(long)]
    pub results: Option<NonZeroUsize>,

    /// Output format [default: text].
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Path to a `netpath.toml` file with default settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress all output except results and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Path output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// `<source> -> <destination> : <delay>` lines.
    Text,
    /// Machine-readable JSON array.
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match rank::run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs a stderr `tracing` subscriber when verbose output is requested.
fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}
