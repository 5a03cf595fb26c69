//! Group-by sums and headline metrics over filtered sales records.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::model::{Contribution, SaleRecord};

/// A categorical column of the sales dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    City,
    Subgroup,
    Item,
    Client,
}

impl Dimension {
    #[must_use]
    pub fn key(self, record: &SaleRecord) -> &str {
        match self {
            Dimension::City => &record.city,
            Dimension::Subgroup => &record.subgroup,
            Dimension::Item => &record.item,
            Dimension::Client => &record.client,
        }
    }

    /// Plural noun used in report narratives
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Dimension::City => "cities",
            Dimension::Subgroup => "subgroups",
            Dimension::Item => "products",
            Dimension::Client => "clients",
        }
    }
}

/// Sum `amount` per distinct key of `dimension`.
///
/// Output is in first-seen order so that ties ranked later stay deterministic.
pub fn sum_by<'a, I>(records: I, dimension: Dimension) -> Vec<Contribution>
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut sums: Vec<Contribution> = Vec::new();

    for record in records {
        let key = dimension.key(record);
        let next = sums.len();
        let i = *index.entry(key).or_insert(next);
        if i == next {
            sums.push(Contribution::new(key, record.amount));
        } else {
            sums[i].value += record.amount;
        }
    }

    sums
}

/// Headline figures shown above the charts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    /// Total sales in local currency
    pub total_amount: f64,
    pub total_amount_usd: f64,
    pub unique_clients: usize,
    /// Distinct products sold
    pub unique_items: usize,
    pub record_count: usize,
}

impl KeyMetrics {
    pub fn compute<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SaleRecord>,
    {
        let mut clients = FxHashSet::default();
        let mut items = FxHashSet::default();
        let mut metrics = Self::default();

        for record in records {
            metrics.total_amount += record.amount;
            metrics.total_amount_usd += record.amount_usd;
            metrics.record_count += 1;
            clients.insert(record.client.as_str());
            items.insert(record.item.as_str());
        }

        metrics.unique_clients = clients.len();
        metrics.unique_items = items.len();
        metrics
    }
}
