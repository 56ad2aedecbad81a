//! Path query: the two name filters and the result limit.

use std::num::NonZeroUsize;

/// Number of paths returned when no limit is given.
pub const DEFAULT_RESULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(n) => n,
    None => unreachable!(),
};

/// Selects which paths to extract and how many to keep.
///
/// An empty filter matches every name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathQuery {
    /// Substring the net driver name must contain.
    pub source_filter: String,
    /// Substring the endpoint cell name must contain.
    pub destination_filter: String,
    /// Maximum number of paths to return.
    pub limit: NonZeroUsize,
}

impl PathQuery {
    /// Creates a query with empty filters and the given limit.
    pub fn new(limit: NonZeroUsize) -> Self {
        Self {
            source_filter: String::new(),
            destination_filter: String::new(),
            limit,
        }
    }

    /// Sets the source (driver) filter.
    pub fn with_source(mut self, filter: impl Into<String>) -> Self {
        self.source_filter = filter.into();
        self
    }

    /// Sets the destination (endpoint cell) filter.
    pub fn with_destination(mut self, filter: impl Into<String>) -> Self {
        self.destination_filter = filter.into();
        self
    }

    /// Returns `true` if `driver` passes the source filter.
    pub fn matches_source(&self, driver: &str) -> bool {
        driver.contains(self.source_filter.as_str())
    }

    /// Returns `true` if `cell` passes the destination filter.
    pub fn matches_destination(&self, cell: &str) -> bool {
        cell.contains(self.destination_filter.as_str())
    }
}

impl Default for PathQuery {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_LIMIT)
    }
}
