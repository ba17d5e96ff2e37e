use std::time::Instant;

/// One ordered list of integers to be sorted
pub type Sequence = Vec<i64>;

/// Ordered collection of sequences submitted together
pub type Batch = Vec<Sequence>;

/// Output of one strategy invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// Sorted sequences, positionally aligned with the input batch
    pub sorted: Batch,
    /// Wall-clock cost of the strategy in nanoseconds
    pub elapsed_ns: u64,
}

impl SortOutcome {
    /// Empty outcome for a zero-length batch
    pub fn empty(elapsed_ns: u64) -> Self {
        Self {
            sorted: Vec::new(),
            elapsed_ns,
        }
    }

    /// Number of sequences in the outcome
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// True when the outcome holds no sequences
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// Monotonic stopwatch shared by both strategies
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch
    #[inline]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed nanoseconds, saturating at `u64::MAX`
    #[inline]
    pub fn elapsed_ns(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Elapsed seconds for histogram observations
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Sort an owned copy of a sequence in place and hand it back.
///
/// The caller's sequence is never touched.
#[inline]
pub fn sorted_copy(sequence: &[i64]) -> Sequence {
    sort_owned(sequence.to_vec())
}

/// Sort a sequence the caller already owns, ascending.
#[inline]
pub fn sort_owned(mut sequence: Sequence) -> Sequence {
    sequence.sort();
    sequence
}
