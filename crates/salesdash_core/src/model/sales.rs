//! Sales transaction records and ranking inputs

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A single sales transaction line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: Date,
    pub city: String,
    /// Product subgroup the item belongs to
    pub subgroup: String,
    pub item: String,
    pub client: String,
    /// Line total in local currency (pesos)
    pub amount: f64,
    /// Line total converted to US dollars
    #[serde(default)]
    pub amount_usd: f64,
}

/// An entity's aggregated value, the unit of Pareto ranking.
///
/// Entities are opaque labels. Callers must sum duplicate entities before
/// ranking; see [`crate::aggregate::sum_by`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub entity: String,
    pub value: f64,
}

impl Contribution {
    #[must_use]
    pub fn new(entity: impl Into<String>, value: f64) -> Self {
        Self {
            entity: entity.into(),
            value,
        }
    }
}
