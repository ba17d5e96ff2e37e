//! Batch Sort Tests
//!
//! Both strategies against the shared contract: equivalence, shape,
//! sortedness, permutation, non-mutation and the concurrency stress run.

use batchsort::config::{ConcurrencyLimit, SortConfig};
use batchsort::sort::{
    sort_concurrent, sort_sequential, BatchSortStrategy, ConcurrentSorter, Sequence,
    SequentialSorter, StrategyKind,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::Rng;

fn random_batch(sequences: usize, max_len: usize) -> Vec<Sequence> {
    let mut rng = rand::thread_rng();
    (0..sequences)
        .map(|_| {
            let len = rng.gen_range(0..=max_len);
            (0..len).map(|_| rng.gen::<i64>()).collect()
        })
        .collect()
}

fn assert_contract(input: &[Sequence], output: &[Sequence]) {
    assert_eq!(output.len(), input.len(), "batch length must be preserved");

    for (i, (before, after)) in input.iter().zip(output).enumerate() {
        assert_eq!(after.len(), before.len(), "sequence {} changed length", i);
        assert!(
            after.windows(2).all(|pair| pair[0] <= pair[1]),
            "sequence {} is not sorted",
            i
        );

        let mut expected = before.clone();
        expected.sort();
        assert_eq!(after, &expected, "sequence {} is not a permutation of its input", i);
    }
}

#[tokio::test]
async fn test_scenario_single_sequence() {
    let batch = vec![vec![3, 1, 2]];

    let single = sort_sequential(&batch);
    let parallel = sort_concurrent(&batch).await.unwrap();

    assert_eq!(single.sorted, vec![vec![1, 2, 3]]);
    assert_eq!(parallel.sorted, vec![vec![1, 2, 3]]);
}

#[tokio::test]
async fn test_scenario_mixed_lengths() {
    let batch = vec![vec![5, 4], vec![2, 2, 1], vec![]];
    let expected = vec![vec![4, 5], vec![1, 2, 2], vec![]];

    for kind in StrategyKind::ALL {
        let outcome = kind
            .build(&SortConfig::default())
            .sort_batch(&batch)
            .await
            .unwrap();
        assert_eq!(outcome.sorted, expected, "strategy {}", kind);
    }
}

#[tokio::test]
async fn test_scenario_empty_batch() {
    let single = sort_sequential(&[]);
    let bounded = ConcurrentSorter::new().sort_batch(&[]).await.unwrap();
    let unbounded = ConcurrentSorter::new().unbounded().sort_batch(&[]).await.unwrap();

    assert!(single.sorted.is_empty());
    assert!(bounded.sorted.is_empty());
    assert!(unbounded.sorted.is_empty());
}

#[tokio::test]
async fn test_input_is_not_mutated() {
    let batch = random_batch(50, 64);
    let snapshot = batch.clone();

    let _ = SequentialSorter::new().sort_batch(&batch).await.unwrap();
    assert_eq!(batch, snapshot);

    let _ = ConcurrentSorter::new().sort_batch(&batch).await.unwrap();
    assert_eq!(batch, snapshot);
}

#[tokio::test]
async fn test_strategies_are_substitutable() {
    let batch = random_batch(32, 128);
    let config = SortConfig::default().with_concurrency_limit(ConcurrencyLimit::Bounded(3));

    let strategies: Vec<std::sync::Arc<dyn BatchSortStrategy>> = StrategyKind::ALL
        .iter()
        .map(|kind| kind.build(&config))
        .collect();

    let mut outputs = Vec::new();
    for strategy in &strategies {
        let outcome = strategy.sort_batch(&batch).await.unwrap();
        assert_contract(&batch, &outcome.sorted);
        outputs.push(outcome.sorted);
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[tokio::test]
async fn test_extreme_values_and_duplicates() {
    let batch = vec![
        vec![i64::MAX, i64::MIN, 0, -1, 1],
        vec![7; 16],
        vec![i64::MIN, i64::MIN],
    ];

    let single = sort_sequential(&batch);
    let parallel = ConcurrentSorter::new().unbounded().sort_batch(&batch).await.unwrap();

    assert_eq!(single.sorted[0], vec![i64::MIN, -1, 0, 1, i64::MAX]);
    assert_eq!(single.sorted, parallel.sorted);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrency_stress_unbounded() {
    for round in 0..10 {
        let batch = random_batch(1_000, 256);

        let expected = sort_sequential(&batch);
        let outcome = ConcurrentSorter::new()
            .unbounded()
            .sort_batch(&batch)
            .await
            .unwrap();

        assert_eq!(outcome.sorted, expected.sorted, "round {} diverged", round);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrency_stress_bounded() {
    for limit in [1, 2, 8] {
        let batch = random_batch(1_000, 256);

        let expected = sort_sequential(&batch);
        let outcome = ConcurrentSorter::new()
            .with_concurrency_limit(limit)
            .sort_batch(&batch)
            .await
            .unwrap();

        assert_contract(&batch, &outcome.sorted);
        assert_eq!(outcome.sorted, expected.sorted, "limit {} diverged", limit);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_concurrent_matches_sequential(
        batch in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..64), 0..32),
        limit in 1usize..8,
    ) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();

        let expected = sort_sequential(&batch);
        let outcome = runtime
            .block_on(ConcurrentSorter::new().with_concurrency_limit(limit).sort_batch(&batch))
            .unwrap();

        assert_contract(&batch, &outcome.sorted);
        prop_assert_eq!(outcome.sorted, expected.sorted);
    }
}
