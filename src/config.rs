//! Sorter and server configuration

use std::fmt;
use std::str::FromStr;

use crate::{BatchSortError, Result};

/// How many units of work the concurrent sorter runs at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyLimit {
    /// At most this many units at once (always >= 1)
    Bounded(usize),
    /// One unit per sequence, all dispatched immediately
    Unbounded,
}

impl ConcurrencyLimit {
    /// Bounded limit, clamped to at least one unit
    pub fn bounded(limit: usize) -> Self {
        ConcurrencyLimit::Bounded(limit.max(1))
    }
}

impl Default for ConcurrencyLimit {
    fn default() -> Self {
        ConcurrencyLimit::bounded(num_cpus::get())
    }
}

impl fmt::Display for ConcurrencyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcurrencyLimit::Bounded(limit) => write!(f, "{}", limit),
            ConcurrencyLimit::Unbounded => f.write_str("unbounded"),
        }
    }
}

impl FromStr for ConcurrencyLimit {
    type Err = BatchSortError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("unbounded") {
            return Ok(ConcurrencyLimit::Unbounded);
        }

        match value.parse::<usize>() {
            Ok(0) => Err(BatchSortError::Config(
                "concurrency limit must be at least 1".to_string(),
            )),
            Ok(limit) => Ok(ConcurrencyLimit::Bounded(limit)),
            Err(e) => Err(BatchSortError::Config(format!(
                "invalid concurrency limit '{}': {}",
                value, e
            ))),
        }
    }
}

/// Configuration for the sorters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortConfig {
    /// Concurrency limit of the concurrent sorter
    pub concurrency_limit: ConcurrencyLimit,
}

impl SortConfig {
    /// Set concurrency limit
    pub fn with_concurrency_limit(mut self, limit: ConcurrencyLimit) -> Self {
        self.concurrency_limit = limit;
        self
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// `EnvFilter` directive for logging
    pub log_level: String,
    /// Sorter configuration
    pub sort: SortConfig,
}

impl ServerConfig {
    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            sort: SortConfig::default(),
        }
    }
}
