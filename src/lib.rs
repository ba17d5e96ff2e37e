//! # batchsort
//!
//! Sorts a batch of independent integer sequences with one of two
//! interchangeable strategies and reports how long the strategy took.
//!
//! ## Quick Start
//!
//! ```rust
//! use batchsort::sort::{BatchSortStrategy, ConcurrentSorter, SequentialSorter};
//!
//! # async fn example() -> batchsort::Result<()> {
//! let batch = vec![vec![5, 4], vec![2, 2, 1], vec![]];
//!
//! let single = SequentialSorter::new().sort_batch(&batch).await?;
//! let parallel = ConcurrentSorter::new().sort_batch(&batch).await?;
//!
//! assert_eq!(single.sorted, vec![vec![4, 5], vec![1, 2, 2], vec![]]);
//! assert_eq!(single.sorted, parallel.sorted);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`sort`]: batch types, the strategy trait and both sorters
//! - [`config`]: concurrency and server configuration
//! - [`metrics`]: Prometheus metrics for batch runs
//! - [`api`]: the HTTP surface (`/process-single`, `/process-concurrent`)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use thiserror::Error;

/// Result type for batch sort operations
pub type Result<T> = std::result::Result<T, BatchSortError>;

/// Main error type for batch sort operations
#[derive(Error, Debug)]
pub enum BatchSortError {
    /// A unit of work was cancelled before it produced its slot
    #[error("Async join error: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// No strategy is registered under the given name
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Batch sorting core
pub mod sort;

/// Configuration for the sorters and the server
pub mod config;

/// Prometheus metrics
pub mod metrics;

/// HTTP request/response surface
pub mod api;
