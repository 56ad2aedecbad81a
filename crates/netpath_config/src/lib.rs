//! Parsing and resolution of `netpath.toml` defaults files.
//!
//! A defaults file can preset the filters, result limit, and output format.
//! [`resolve_options`] layers command-line values over the file, producing
//! the [`ResolvedOptions`] a ranking run is driven by.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use resolve::{resolve_options, CliOverrides, ResolvedOptions};
pub use types::*;
