//! Configuration types deserialized from `netpath.toml`.

use netpath_rank::DEFAULT_RESULT_LIMIT;
use serde::Deserialize;

/// The top-level configuration parsed from `netpath.toml`.
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ToolConfig {
    /// Default name filters.
    #[serde(default)]
    pub filter: FilterConfig,
    /// Output settings (result limit, format).
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default substring filters applied to driver and endpoint names.
#[derive(Debug, Default, Deserialize)]
pub struct FilterConfig {
    /// Substring the net driver name must contain.
    #[serde(default)]
    pub source: String,
    /// Substring the endpoint cell name must contain.
    #[serde(default)]
    pub destination: String,
}

/// Output settings.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Maximum number of paths to print. Must be at least 1.
    #[serde(default = "default_results")]
    pub results: usize,
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results: default_results(),
            format: OutputFormat::default(),
        }
    }
}

fn default_results() -> usize {
    DEFAULT_RESULT_LIMIT.get()
}

/// How ranked paths are written to standard output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<source> -> <destination> : <delay>` line per path.
    #[default]
    Text,
    /// A JSON array of path objects.
    Json,
}
