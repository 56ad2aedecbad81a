//! Extraction and ranking of driver-to-endpoint net delays.
//!
//! Given a loaded [`TimingDocument`](netpath_report::TimingDocument), this
//! crate picks every (driver, endpoint) pair whose names contain the
//! requested substrings and returns the slowest ones first.
//!
//! Filtering happens in two stages: a net is skipped entirely unless its
//! driver matches the source filter, and only then are its endpoints tested
//! against the destination filter.
//!
//! # Usage
//!
//! ```ignore
//! use netpath_rank::{top_paths, PathQuery};
//!
//! let query = PathQuery::default().with_source("cpu").with_destination("ram");
//! for path in top_paths(&document, &query).paths {
//!     println!("{path}");
//! }
//! ```

#![warn(missing_docs)]

pub mod extract;
pub mod path;
pub mod query;

pub use extract::{extract_paths, rank_paths, top_paths, RankedPaths};
pub use path::PathTuple;
pub use query::{PathQuery, DEFAULT_RESULT_LIMIT};
