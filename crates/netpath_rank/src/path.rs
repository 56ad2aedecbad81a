//! The path tuple produced for each matching driver/endpoint pair.

use netpath_report::Delay;
use serde::Serialize;
use std::fmt;

/// A single driver-to-endpoint connection and its routed delay.
///
/// `delay` is always copied from exactly one endpoint record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathTuple {
    /// Name of the driving cell.
    pub source: String,
    /// Name of the destination cell.
    pub destination: String,
    /// Routed delay, in the report's unit.
    pub delay: Delay,
}

impl PathTuple {
    /// Creates a new path tuple.
    pub fn new(source: impl Into<String>, destination: impl Into<String>, delay: Delay) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            delay,
        }
    }
}

impl fmt::Display for PathTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} : {}", self.source, self.destination, self.delay)
    }
}
