//! Top-N display slices.
//!
//! These lists are for charts only. Pareto cutoffs are always computed from
//! the full contribution set via [`crate::pareto::rank`].

use std::cmp::Ordering;

use crate::model::Contribution;

/// The `n` largest contributions in descending order.
///
/// Ties keep their input order. NaN values sort last.
#[must_use]
pub fn top_n(contributions: &[Contribution], n: usize) -> Vec<Contribution> {
    let mut sorted: Vec<&Contribution> = contributions.iter().collect();
    sorted.sort_by(|a, b| match (a.value.is_nan(), b.value.is_nan()) {
        (false, false) => b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    });
    sorted.into_iter().take(n).cloned().collect()
}
