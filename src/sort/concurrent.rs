//! Concurrent batch sorter
//!
//! Dispatches one unit of work per sequence onto tokio's blocking pool and
//! joins them all before returning:
//! - Slot `i` is filled from the handle of unit `i` only, so completion order
//!   never affects placement
//! - The result is sized to the batch before any slot is written
//! - A semaphore bounds how many units run at once unless the sorter is
//!   configured as unbounded
//! - A panicking unit re-raises its panic on the caller; no partial batch is
//!   ever returned

use std::panic;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::config::{ConcurrencyLimit, SortConfig};
use crate::metrics::{ActiveUnit, MetricsCollector};
use crate::sort::{sort_owned, BatchSortStrategy, Sequence, SortOutcome, Stopwatch, StrategyKind};
use crate::Result;

/// Batch sorter that fans out one unit of work per sequence
#[derive(Debug, Clone)]
pub struct ConcurrentSorter {
    /// Maximum units running at once
    concurrency_limit: ConcurrencyLimit,
}

impl ConcurrentSorter {
    /// Create a sorter bounded by the number of CPUs
    pub fn new() -> Self {
        Self::from_config(&SortConfig::default())
    }

    /// Create a sorter from configuration
    pub fn from_config(config: &SortConfig) -> Self {
        Self {
            concurrency_limit: config.concurrency_limit,
        }
    }

    /// Set concurrency limit (number of units sorting at once)
    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = ConcurrencyLimit::bounded(limit);
        self
    }

    /// Dispatch every unit at once, with no cap
    pub fn unbounded(mut self) -> Self {
        self.concurrency_limit = ConcurrencyLimit::Unbounded;
        self
    }

    /// Configured concurrency limit
    pub fn concurrency_limit(&self) -> ConcurrencyLimit {
        self.concurrency_limit
    }
}

impl Default for ConcurrentSorter {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort a batch concurrently with a CPU-bounded sorter
pub async fn sort_concurrent(batch: &[Sequence]) -> Result<SortOutcome> {
    ConcurrentSorter::new().sort_batch(batch).await
}

#[async_trait]
impl BatchSortStrategy for ConcurrentSorter {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Concurrent
    }

    #[instrument(skip(self, batch), fields(sequences = batch.len(), limit = %self.concurrency_limit))]
    async fn sort_batch(&self, batch: &[Sequence]) -> Result<SortOutcome> {
        let watch = Stopwatch::start();
        let metrics = MetricsCollector::new(StrategyKind::Concurrent);

        if batch.is_empty() {
            debug!("No sequences to sort in batch");
            metrics.record_batch(0, watch.elapsed_secs());
            return Ok(SortOutcome::empty(watch.elapsed_ns()));
        }

        let gate = match self.concurrency_limit {
            ConcurrencyLimit::Bounded(permits) => Some(Arc::new(Semaphore::new(permits))),
            ConcurrencyLimit::Unbounded => None,
        };

        let mut units = Vec::with_capacity(batch.len());
        for sequence in batch {
            // Waiting here is the queue when all permits are taken.
            let permit = match &gate {
                Some(gate) => Some(
                    gate.clone()
                        .acquire_owned()
                        .await
                        .expect("Gate is local to this call and never closed"),
                ),
                None => None,
            };
            let owned = sequence.clone();

            units.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                let _active = ActiveUnit::enter();
                sort_owned(owned)
            }));
        }
        debug!(units = units.len(), "All units dispatched, joining");

        let sorted = join_in_order(units).await?;

        let elapsed_ns = watch.elapsed_ns();
        metrics.record_batch(batch.len(), watch.elapsed_secs());
        info!(
            sequences = sorted.len(),
            elapsed_ns,
            "Concurrent batch sorted"
        );

        Ok(SortOutcome { sorted, elapsed_ns })
    }
}

/// Await every unit and place its output at the unit's own index.
///
/// All handles are awaited before any failure is reported. A panicked unit
/// re-raises its panic here; a cancelled unit fails the whole batch.
async fn join_in_order(units: Vec<JoinHandle<Sequence>>) -> Result<Vec<Sequence>> {
    let mut sorted: Vec<Sequence> = vec![Vec::new(); units.len()];
    for (slot, joined) in sorted.iter_mut().zip(join_all(units).await) {
        *slot = match joined {
            Ok(sequence) => sequence,
            Err(e) if e.is_panic() => panic::resume_unwind(e.into_panic()),
            Err(e) => return Err(e.into()),
        };
    }
    Ok(sorted)
}
