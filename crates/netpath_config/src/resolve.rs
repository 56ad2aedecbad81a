//! Option resolution: command-line values layered over the defaults file.

use crate::error::ConfigError;
use crate::types::{OutputFormat, ToolConfig};
use netpath_rank::PathQuery;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Values given on the command line. `None` defers to the defaults file.
#[derive(Debug, Default)]
pub struct CliOverrides {
    /// Path to the timing report (`-` for standard input).
    pub report_path: PathBuf,
    /// `--src` value.
    pub source_filter: Option<String>,
    /// `--dst` value.
    pub destination_filter: Option<String>,
    /// `--results` value.
    pub result_limit: Option<NonZeroUsize>,
    /// `--format` value.
    pub format: Option<OutputFormat>,
}

/// The settings for one ranking run after all layers are merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Path to the timing report (`-` for standard input).
    pub report_path: PathBuf,
    /// Substring the net driver name must contain.
    pub source_filter: String,
    /// Substring the endpoint cell name must contain.
    pub destination_filter: String,
    /// Maximum number of paths to output.
    pub result_limit: NonZeroUsize,
    /// Output format.
    pub format: OutputFormat,
}

impl ResolvedOptions {
    /// Builds the path query described by these options.
    pub fn query(&self) -> PathQuery {
        PathQuery::new(self.result_limit)
            .with_source(self.source_filter.as_str())
            .with_destination(self.destination_filter.as_str())
    }

    /// Returns `true` if the report should be read from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.report_path.as_os_str() == "-"
    }
}

/// Merges command-line overrides with a loaded configuration.
///
/// A value given on the command line always wins, even an empty filter.
pub fn resolve_options(
    config: &ToolConfig,
    cli: CliOverrides,
) -> Result<ResolvedOptions, ConfigError> {
    let result_limit = match cli.result_limit {
        Some(limit) => limit,
        None => NonZeroUsize::new(config.output.results).ok_or_else(|| {
            ConfigError::ValidationError("output.results must be at least 1".to_string())
        })?,
    };

    Ok(ResolvedOptions {
        report_path: cli.report_path,
        source_filter: cli
            .source_filter
            .unwrap_or_else(|| config.filter.source.clone()),
        destination_filter: cli
            .destination_filter
            .unwrap_or_else(|| config.filter.destination.clone()),
        result_limit,
        format: cli.format.unwrap_or(config.output.format),
    })
}
