use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::SortConfig;
use crate::sort::{ConcurrentSorter, Sequence, SequentialSorter, SortOutcome};
use crate::{BatchSortError, Result};

/// Common contract of every batch sorting strategy.
///
/// Implementations take the batch by reference, never mutate it, and return
/// a batch of the same length where slot `i` holds the ascending form of
/// `batch[i]`. A call either yields the whole sorted batch or an error, never
/// a partial result.
#[async_trait]
pub trait BatchSortStrategy: Send + Sync {
    /// Which strategy this is
    fn kind(&self) -> StrategyKind;

    /// Sort every sequence of the batch and time the run
    async fn sort_batch(&self, batch: &[Sequence]) -> Result<SortOutcome>;
}

/// Named strategy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// One sequence after another on the calling thread
    Sequential,
    /// One unit of work per sequence, joined before returning
    Concurrent,
}

impl StrategyKind {
    /// All variants, in routing order
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Sequential, StrategyKind::Concurrent];

    /// Entry point name exposed to callers
    pub fn route(&self) -> &'static str {
        match self {
            StrategyKind::Sequential => "process-single",
            StrategyKind::Concurrent => "process-concurrent",
        }
    }

    /// Short label used in logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::Concurrent => "concurrent",
        }
    }

    /// Build the strategy this variant names
    pub fn build(&self, config: &SortConfig) -> Arc<dyn BatchSortStrategy> {
        match self {
            StrategyKind::Sequential => Arc::new(SequentialSorter::new()),
            StrategyKind::Concurrent => Arc::new(ConcurrentSorter::from_config(config)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = BatchSortError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('/');
        StrategyKind::ALL
            .into_iter()
            .find(|kind| name == kind.route() || name.eq_ignore_ascii_case(kind.as_str()))
            .ok_or_else(|| BatchSortError::UnknownStrategy(s.to_string()))
    }
}
