//! Timing report loading: read, parse, then map onto the typed model.

use crate::error::ReportError;
use crate::types::TimingDocument;
use std::io::Read;
use std::path::Path;

/// Loads a timing report from a file.
///
/// Fails with [`ReportError::Io`] when the file cannot be read, then defers
/// to [`load_report_from_str`] for the parse and structure stages.
pub fn load_report(path: &Path) -> Result<TimingDocument, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read timing report");
    load_report_from_str(&content)
}

/// Loads a timing report from an arbitrary reader such as standard input.
///
/// `origin` names the source in read errors.
pub fn load_report_from_reader<R: Read>(
    mut reader: R,
    origin: &Path,
) -> Result<TimingDocument, ReportError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| ReportError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
    tracing::debug!(origin = %origin.display(), bytes = content.len(), "read timing report");
    load_report_from_str(&content)
}

/// Parses a timing report from a string.
///
/// Invalid JSON is a [`ReportError::Parse`]; valid JSON without the
/// `timing_analysis.detailed_net_timings` layout is a
/// [`ReportError::Structural`]. No partial document is ever returned.
pub fn load_report_from_str(content: &str) -> Result<TimingDocument, ReportError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ReportError::Parse(e.to_string()))?;
    let document: TimingDocument =
        serde_json::from_value(value).map_err(|e| ReportError::Structural(e.to_string()))?;
    tracing::debug!(
        nets = document.nets().len(),
        endpoints = document.endpoint_count(),
        "loaded timing report"
    );
    Ok(document)
}
