//! Pareto (80/20) cumulative-contribution ranking.
//!
//! [`rank`] orders entities by value, annotates each with its share of the
//! total and the running cumulative share, and finds the smallest leading
//! subset whose cumulative share reaches a threshold.
//!
//! ```ignore
//! use salesdash_core::model::Contribution;
//! use salesdash_core::pareto::{rank, DEFAULT_THRESHOLD};
//!
//! let result = rank(
//!     &[Contribution::new("A", 50.0), Contribution::new("B", 30.0), Contribution::new("C", 20.0)],
//!     DEFAULT_THRESHOLD,
//! )?;
//! assert_eq!(result.cutoff_index, 2);
//! ```
//!
//! The cutoff is always computed over every entity supplied. Truncating to a
//! "top 10" list before ranking would bias the cutoff; use [`crate::top_n`]
//! for display slices instead.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInputError, Result};
use crate::model::Contribution;

/// Canonical Pareto threshold (80% of total)
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Tolerance used when comparing cumulative shares against 1.0
pub const SHARE_TOLERANCE: f64 = 1e-9;

/// A contribution annotated with its position in the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedContribution {
    pub entity: String,
    pub value: f64,
    /// value / total, as a fraction in [0, 1]
    pub share_of_total: f64,
    /// Running share up to and including this entity
    pub cumulative_share: f64,
}

/// Descending ranking plus the threshold cutoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoResult {
    pub ranked: Vec<RankedContribution>,
    /// Number of leading entities needed to reach the threshold
    pub cutoff_index: usize,
    pub total: f64,
    pub threshold: f64,
}

impl ParetoResult {
    /// Number of ranked entities
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.ranked.len()
    }

    /// The leading entities that together reach the threshold
    #[must_use]
    pub fn head(&self) -> &[RankedContribution] {
        &self.ranked[..self.cutoff_index.min(self.ranked.len())]
    }

    /// Percentage of entities needed to reach the threshold (0 when empty)
    #[must_use]
    pub fn head_percent(&self) -> f64 {
        if self.ranked.is_empty() {
            0.0
        } else {
            self.cutoff_index as f64 / self.ranked.len() as f64 * 100.0
        }
    }

    /// Cumulative share actually covered by the head
    #[must_use]
    pub fn head_share(&self) -> f64 {
        self.head().last().map_or(0.0, |r| r.cumulative_share)
    }

    /// True when there is nothing meaningful to rank (no entities or zero total)
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.total == 0.0
    }
}

/// Check that a threshold lies in (0, 1].
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(InvalidInputError::InvalidThreshold(threshold))
    }
}

fn validate_contribution(c: &Contribution) -> Result<()> {
    if !c.value.is_finite() {
        return Err(InvalidInputError::NonFiniteValue {
            entity: c.entity.clone(),
            value: c.value,
        });
    }
    if c.value < 0.0 {
        return Err(InvalidInputError::NegativeValue {
            entity: c.entity.clone(),
            value: c.value,
        });
    }
    Ok(())
}

/// Rank contributions descending and locate the `threshold` cutoff.
///
/// Ties keep their input order. An empty input yields an empty result with
/// cutoff 0; an all-zero input yields zero shares with the cutoff covering
/// every entity.
///
/// # Errors
/// Returns [`InvalidInputError`] if any value is negative, NaN or infinite,
/// if the values sum past `f64::MAX`, or if `threshold` is outside (0, 1].
pub fn rank(contributions: &[Contribution], threshold: f64) -> Result<ParetoResult> {
    validate_threshold(threshold)?;
    for c in contributions {
        validate_contribution(c)?;
    }

    let mut sorted: Vec<&Contribution> = contributions.iter().collect();
    // Values are finite here, so partial_cmp never fails; sort_by is stable
    sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    // Summing in ranked order makes the final running sum equal the total exactly
    let total: f64 = sorted.iter().map(|c| c.value).sum();
    if !total.is_finite() {
        return Err(InvalidInputError::NonFiniteTotal);
    }

    if total == 0.0 {
        let ranked: Vec<RankedContribution> = sorted
            .into_iter()
            .map(|c| RankedContribution {
                entity: c.entity.clone(),
                value: c.value,
                share_of_total: 0.0,
                cumulative_share: 0.0,
            })
            .collect();
        tracing::debug!(entities = ranked.len(), "Pareto ranking over zero total");
        return Ok(ParetoResult {
            cutoff_index: ranked.len(),
            ranked,
            total: 0.0,
            threshold,
        });
    }

    let mut ranked = Vec::with_capacity(sorted.len());
    let mut running = 0.0;
    let mut cutoff = None;
    for (i, c) in sorted.into_iter().enumerate() {
        running += c.value;
        let cumulative_share = running / total;
        if cutoff.is_none() && cumulative_share >= threshold {
            cutoff = Some(i + 1);
        }
        ranked.push(RankedContribution {
            entity: c.entity.clone(),
            value: c.value,
            share_of_total: c.value / total,
            cumulative_share,
        });
    }

    let cutoff_index = cutoff.unwrap_or(ranked.len());
    tracing::debug!(
        entities = ranked.len(),
        cutoff_index,
        total,
        threshold,
        "Pareto ranking complete"
    );

    Ok(ParetoResult {
        ranked,
        cutoff_index,
        total,
        threshold,
    })
}
