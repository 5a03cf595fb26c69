//! Row filtering for sales records (date range, city, subgroup).

use jiff::civil::{Date, date};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::aggregate::Dimension;
use crate::model::SaleRecord;

/// Default start of the date filter
pub const DEFAULT_START: Date = date(2014, 1, 10);
/// Default end of the date filter
pub const DEFAULT_END: Date = date(2017, 12, 31);

/// Which values of a categorical column are selected.
///
/// Serialized as an optional list: absent/null means every value, a list
/// (possibly empty) means exactly those values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum Selection {
    #[default]
    All,
    Only(Vec<String>),
}

impl Selection {
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(values) => values.iter().any(|v| v == value),
        }
    }
}

impl From<Option<Vec<String>>> for Selection {
    fn from(value: Option<Vec<String>>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

impl From<Selection> for Option<Vec<String>> {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All => None,
            Selection::Only(values) => Some(values),
        }
    }
}

/// Predicates applied to the sales dataset before any aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesFilter {
    /// Inclusive start date
    pub start: Date,
    /// Inclusive end date
    pub end: Date,
    pub cities: Selection,
    pub subgroups: Selection,
}

impl Default for SalesFilter {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            cities: Selection::All,
            subgroups: Selection::All,
        }
    }
}

impl SalesFilter {
    /// Restore every predicate to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn matches(&self, record: &SaleRecord) -> bool {
        record.date >= self.start
            && record.date <= self.end
            && self.cities.contains(&record.city)
            && self.subgroups.contains(&record.subgroup)
    }

    /// Records that satisfy every predicate, in input order.
    ///
    /// An inverted date range selects nothing.
    pub fn apply<'a>(&self, records: &'a [SaleRecord]) -> Vec<&'a SaleRecord> {
        if self.start > self.end {
            tracing::warn!(start = %self.start, end = %self.end, "Date filter is inverted");
            return Vec::new();
        }
        let filtered: Vec<&SaleRecord> = records.iter().filter(|r| self.matches(r)).collect();
        tracing::debug!(
            total = records.len(),
            kept = filtered.len(),
            "Applied sales filter"
        );
        filtered
    }
}

/// Distinct values of a column in first-seen order, for building option lists
#[must_use]
pub fn distinct_values(records: &[SaleRecord], dimension: Dimension) -> Vec<String> {
    let mut seen = FxHashSet::default();
    records
        .iter()
        .map(|r| dimension.key(r))
        .filter(|key| seen.insert(*key))
        .map(str::to_string)
        .collect()
}
