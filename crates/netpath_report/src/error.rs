//! Error types for report loading.

use std::path::PathBuf;

/// The loading stage at which a report was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStage {
    /// The report source could not be read.
    Read,
    /// The content is not valid JSON.
    Parse,
    /// The JSON is valid but lacks the expected timing fields.
    Structure,
}

/// Errors that can occur when loading a timing report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report file could not be opened or read.
    #[error("failed to read report `{}`: {source}", path.display())]
    Io {
        /// Path of the report that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The report content is not valid JSON.
    #[error("failed to parse report: {0}")]
    Parse(String),

    /// The report is valid JSON but does not have the timing report layout.
    #[error("malformed report: {0}")]
    Structural(String),
}

impl ReportError {
    /// Returns the stage at which loading failed.
    pub fn stage(&self) -> ReportStage {
        match self {
            ReportError::Io { .. } => ReportStage::Read,
            ReportError::Parse(_) => ReportStage::Parse,
            ReportError::Structural(_) => ReportStage::Structure,
        }
    }
}
