//! Randomized checks of Pareto ranking invariants
//!
//! These tests verify, over many seeded random inputs:
//! - Ranked values are non-increasing and ties keep input order
//! - Cumulative shares are non-decreasing and end at 1.0
//! - The cutoff is the first position reaching the threshold
//! - Ranking is deterministic

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::model::Contribution;
use crate::pareto::{ParetoResult, SHARE_TOLERANCE, rank};

const CASES: u64 = 200;

fn random_contributions(rng: &mut SmallRng) -> Vec<Contribution> {
    let len = rng.random_range(1..60);
    (0..len)
        .map(|i| {
            // Small integer values make exact ties common
            let value = if rng.random_bool(0.5) {
                f64::from(rng.random_range(0..8_u32))
            } else {
                rng.random_range(0.0..10_000.0)
            };
            Contribution::new(format!("e{i}"), value)
        })
        .collect()
}

fn input_position(entity: &str) -> usize {
    entity[1..].parse().expect("entity names are e<index>")
}

fn check_invariants(input: &[Contribution], threshold: f64, result: &ParetoResult) {
    assert_eq!(result.ranked.len(), input.len());

    for pair in result.ranked.windows(2) {
        assert!(
            pair[0].value >= pair[1].value,
            "values must be non-increasing: {} then {}",
            pair[0].value,
            pair[1].value
        );
        if pair[0].value == pair[1].value {
            assert!(
                input_position(&pair[0].entity) < input_position(&pair[1].entity),
                "ties must keep input order"
            );
        }
        assert!(pair[0].cumulative_share <= pair[1].cumulative_share);
    }

    if result.total == 0.0 {
        assert_eq!(result.cutoff_index, input.len());
        return;
    }

    let last = result.ranked.last().expect("non-empty input");
    assert!((last.cumulative_share - 1.0).abs() <= SHARE_TOLERANCE);

    let cutoff = result.cutoff_index;
    assert!(cutoff >= 1);
    assert!(result.ranked[cutoff - 1].cumulative_share >= threshold);
    for earlier in &result.ranked[..cutoff - 1] {
        assert!(earlier.cumulative_share < threshold);
    }
}

#[test]
fn test_random_inputs_satisfy_invariants() {
    for seed in 0..CASES {
        let mut rng = SmallRng::seed_from_u64(seed);
        let input = random_contributions(&mut rng);
        let threshold = rng.random_range(0.01..1.0);

        let result = rank(&input, threshold).expect("random input is valid");
        check_invariants(&input, threshold, &result);
    }
}

#[test]
fn test_shares_sum_to_one() {
    for seed in 0..CASES {
        let mut rng = SmallRng::seed_from_u64(seed);
        let input = random_contributions(&mut rng);
        let result = rank(&input, 0.8).expect("random input is valid");
        if result.total > 0.0 {
            let sum: f64 = result.ranked.iter().map(|r| r.share_of_total).sum();
            assert!((sum - 1.0).abs() < 1e-9, "shares summed to {sum}");
        }
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let mut rng = SmallRng::seed_from_u64(7);
    let input = random_contributions(&mut rng);
    let first = rank(&input, 0.8).unwrap();
    let second = rank(&input, 0.8).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_higher_threshold_never_shrinks_head() {
    for seed in 0..CASES {
        let mut rng = SmallRng::seed_from_u64(seed);
        let input = random_contributions(&mut rng);
        let low = rank(&input, 0.5).unwrap();
        let high = rank(&input, 0.9).unwrap();
        assert!(low.cutoff_index <= high.cutoff_index);
    }
}
