//! Report types deserialized from the timing analyser's JSON output.
//!
//! Field names follow the producing tool byte-for-byte. Sections the ranker
//! does not use (`fmax`, `critical_paths`, ...) are ignored on load.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The top-level timing report document.
#[derive(Clone, Debug, Deserialize)]
pub struct TimingDocument {
    /// The `timing_analysis` section.
    pub timing_analysis: TimingAnalysis,
}

/// The `timing_analysis` section of a report.
#[derive(Clone, Debug, Deserialize)]
pub struct TimingAnalysis {
    /// Per-net routed delays from each driver to each of its endpoints.
    pub detailed_net_timings: Vec<NetTiming>,
}

/// Routed timing for a single net: one driver fanning out to its endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct NetTiming {
    /// Name of the driving cell.
    pub driver: String,
    /// Endpoints in the order the analyser reported them.
    pub endpoints: Vec<EndpointTiming>,
    /// Net name, when the analyser reports it.
    #[serde(default)]
    pub net: Option<String>,
    /// Output port on the driving cell.
    #[serde(default)]
    pub port: Option<String>,
}

/// One sink of a net and the routed delay to reach it.
#[derive(Clone, Debug, Deserialize)]
pub struct EndpointTiming {
    /// Name of the destination cell.
    pub cell: String,
    /// Routed delay from the driver to this endpoint.
    pub delay: Delay,
    /// Input port on the destination cell.
    #[serde(default)]
    pub port: Option<String>,
    /// Timing budget allotted to this connection.
    #[serde(default)]
    pub budget: Option<Delay>,
}

/// A delay value exactly as written in the report.
///
/// The unit is whatever the analyser emits and is never converted. The
/// original JSON number is kept so integers print as integers and floats
/// print as floats; ranking and equality compare the `f64` value, so `2`
/// and `2.0` are equal even though they print differently.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "serde_json::Number", into = "serde_json::Number")]
pub struct Delay {
    raw: serde_json::Number,
    value: f64,
}

impl Delay {
    /// Returns the numeric value of this delay.
    pub fn as_f64(&self) -> f64 {
        self.value
    }

    /// Orders two delays by numeric value using IEEE 754 total ordering.
    pub fn total_cmp(&self, other: &Delay) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl PartialEq for Delay {
    fn eq(&self, other: &Delay) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }
}

impl TryFrom<serde_json::Number> for Delay {
    type Error = String;

    fn try_from(raw: serde_json::Number) -> Result<Self, Self::Error> {
        let value = raw
            .as_f64()
            .ok_or_else(|| format!("delay {raw} is not representable as a float"))?;
        Ok(Self { raw, value })
    }
}

impl From<Delay> for serde_json::Number {
    fn from(delay: Delay) -> Self {
        delay.raw
    }
}

impl From<u32> for Delay {
    fn from(value: u32) -> Self {
        Self {
            raw: value.into(),
            value: f64::from(value),
        }
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl TimingDocument {
    /// Returns the net timing records in report order.
    pub fn nets(&self) -> &[NetTiming] {
        &self.timing_analysis.detailed_net_timings
    }

    /// Returns the total number of endpoints across all nets.
    pub fn endpoint_count(&self) -> usize {
        self.nets().iter().map(|n| n.endpoints.len()).sum()
    }
}
