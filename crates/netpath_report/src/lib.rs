//! Typed model and loader for JSON static-timing-analysis reports.
//!
//! A report is the JSON document written by a place-and-route tool's timing
//! analyser (nextpnr's `--report` output). This crate exposes the part of
//! that document the path ranker consumes: the per-net driver and its
//! endpoints with their routed delays. Loading happens in three stages
//! (read, parse, structure) and each stage fails with its own
//! [`ReportError`] variant.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::{ReportError, ReportStage};
pub use loader::{load_report, load_report_from_reader, load_report_from_str};
pub use types::{Delay, EndpointTiming, NetTiming, TimingAnalysis, TimingDocument};
