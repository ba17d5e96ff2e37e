//! Sequential batch sorter
//!
//! Sorts every sequence in input order on the calling thread. This is the
//! baseline the concurrent sorter must match element for element.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::metrics::MetricsCollector;
use crate::sort::{sorted_copy, BatchSortStrategy, Sequence, SortOutcome, Stopwatch, StrategyKind};
use crate::Result;

/// Single-threaded batch sorter
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSorter;

impl SequentialSorter {
    /// Create a new sequential sorter
    pub fn new() -> Self {
        Self
    }

    /// Sort the batch synchronously. Never fails.
    #[instrument(skip(self, batch), fields(sequences = batch.len()))]
    pub fn sort_now(&self, batch: &[Sequence]) -> SortOutcome {
        let watch = Stopwatch::start();

        let mut sorted = Vec::with_capacity(batch.len());
        for sequence in batch {
            sorted.push(sorted_copy(sequence));
        }

        let elapsed_ns = watch.elapsed_ns();
        MetricsCollector::new(StrategyKind::Sequential).record_batch(batch.len(), watch.elapsed_secs());
        debug!(sequences = sorted.len(), elapsed_ns, "Sequential batch sorted");

        SortOutcome { sorted, elapsed_ns }
    }
}

/// Sort a batch sequentially with a default sorter
pub fn sort_sequential(batch: &[Sequence]) -> SortOutcome {
    SequentialSorter::new().sort_now(batch)
}

#[async_trait]
impl BatchSortStrategy for SequentialSorter {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Sequential
    }

    async fn sort_batch(&self, batch: &[Sequence]) -> Result<SortOutcome> {
        Ok(self.sort_now(batch))
    }
}
