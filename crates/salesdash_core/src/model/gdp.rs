//! World Bank GDP data in wide and long layouts

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One country in the wide World Bank layout (one column per year)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpRow {
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    /// GDP in current US dollars keyed by year; `None` marks a missing datapoint
    #[serde(default)]
    pub values: BTreeMap<i16, Option<f64>>,
}

/// A single (country, year) datapoint in the long layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpObservation {
    pub country_code: String,
    pub year: i16,
    pub gdp: Option<f64>,
}
