//! Dashboard assembly: one filtered snapshot in, every panel's data out.

use serde::{Deserialize, Serialize};

use crate::aggregate::{Dimension, KeyMetrics, sum_by};
use crate::error::{ConfigError, DashboardError};
use crate::filter::SalesFilter;
use crate::gdp::GdpQuery;
use crate::model::{Contribution, SaleRecord};
use crate::pareto::{DEFAULT_THRESHOLD, ParetoResult, rank, validate_threshold};
use crate::period::{Granularity, PeriodTotal, time_series};
use crate::top_n::top_n;

/// Default length of the top-N bar charts
pub const DEFAULT_TOP_N: usize = 10;

/// User-controlled dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Cumulative share the Pareto head must reach
    pub threshold: f64,
    pub top_n: usize,
    pub granularity: Granularity,
    pub filter: SalesFilter,
    pub gdp: GdpQuery,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            top_n: DEFAULT_TOP_N,
            granularity: Granularity::default(),
            filter: SalesFilter::default(),
            gdp: GdpQuery::default(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_threshold(self.threshold)?;
        if self.top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }
        self.gdp.validate()
    }
}

/// Headline numbers of a Pareto ranking, ready for a narrative sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoSummary {
    pub dimension: Dimension,
    pub entity_count: usize,
    /// Leading entities needed to reach the threshold
    pub head_count: usize,
    /// head_count as a percentage of entity_count
    pub head_percent: f64,
    /// Cumulative share actually covered by the head
    pub head_share: f64,
    pub threshold: f64,
}

impl ParetoSummary {
    #[must_use]
    pub fn from_result(dimension: Dimension, result: &ParetoResult) -> Self {
        Self {
            dimension,
            entity_count: result.entity_count(),
            head_count: result.cutoff_index,
            head_percent: result.head_percent(),
            head_share: result.head_share(),
            threshold: result.threshold,
        }
    }
}

/// Pareto ranking over every entity of one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoPanel {
    pub summary: ParetoSummary,
    pub result: ParetoResult,
}

/// Everything the dashboard shows for one filter state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub metrics: KeyMetrics,
    pub granularity: Granularity,
    pub series: Vec<PeriodTotal>,
    pub top_items: Vec<Contribution>,
    pub top_subgroups: Vec<Contribution>,
    pub subgroup_pareto: ParetoPanel,
    pub item_pareto: ParetoPanel,
}

fn pareto_panel(
    records: &[&SaleRecord],
    dimension: Dimension,
    threshold: f64,
) -> Result<(Vec<Contribution>, ParetoPanel), DashboardError> {
    // Rank the full set; top-N slices are taken separately
    let contributions = sum_by(records.iter().copied(), dimension);
    let result = rank(&contributions, threshold)?;
    let summary = ParetoSummary::from_result(dimension, &result);
    Ok((contributions, ParetoPanel { summary, result }))
}

/// Filter `records` once and compute every panel from the same snapshot.
///
/// # Errors
/// Returns [`DashboardError::Config`] for an invalid configuration and
/// [`DashboardError::Input`] if an aggregated amount is negative or non-finite.
pub fn build_dashboard(
    records: &[SaleRecord],
    config: &DashboardConfig,
) -> Result<Dashboard, DashboardError> {
    config.validate()?;

    let filtered = config.filter.apply(records);
    let metrics = KeyMetrics::compute(filtered.iter().copied());
    let series = time_series(filtered.iter().copied(), config.granularity);

    let (subgroups, subgroup_pareto) =
        pareto_panel(&filtered, Dimension::Subgroup, config.threshold)?;
    let (items, item_pareto) = pareto_panel(&filtered, Dimension::Item, config.threshold)?;

    tracing::info!(
        records = filtered.len(),
        periods = series.len(),
        subgroups = subgroups.len(),
        items = items.len(),
        subgroup_head = subgroup_pareto.summary.head_count,
        item_head = item_pareto.summary.head_count,
        "Built dashboard"
    );

    Ok(Dashboard {
        metrics,
        granularity: config.granularity,
        series,
        top_items: top_n(&items, config.top_n),
        top_subgroups: top_n(&subgroups, config.top_n),
        subgroup_pareto,
        item_pareto,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInputError;
    use crate::filter::Selection;
    use jiff::civil::date;

    fn sale(item: &str, subgroup: &str, city: &str, amount: f64) -> SaleRecord {
        SaleRecord {
            date: date(2015, 6, 1),
            city: city.to_string(),
            subgroup: subgroup.to_string(),
            item: item.to_string(),
            client: format!("client-{item}"),
            amount,
            amount_usd: amount / 3000.0,
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(DashboardConfig::default().validate().is_ok());

        let bad_threshold = DashboardConfig {
            threshold: 1.2,
            ..Default::default()
        };
        assert_eq!(
            bad_threshold.validate(),
            Err(ConfigError::Threshold(InvalidInputError::InvalidThreshold(
                1.2
            )))
        );

        let zero_top = DashboardConfig {
            top_n: 0,
            ..Default::default()
        };
        assert_eq!(zero_top.validate(), Err(ConfigError::ZeroTopN));
    }

    #[test]
    fn test_build_dashboard_ranks_after_filtering() {
        let records = vec![
            sale("hammer", "Tools", "Cali", 50.0),
            sale("saw", "Tools", "Cali", 30.0),
            sale("brush", "Paint", "Cali", 15.0),
            sale("roller", "Paint", "Cali", 5.0),
            sale("drill", "Tools", "Bogota", 1000.0),
        ];
        let config = DashboardConfig {
            filter: SalesFilter {
                cities: Selection::Only(vec!["Cali".to_string()]),
                ..Default::default()
            },
            ..Default::default()
        };

        let dashboard = build_dashboard(&records, &config).unwrap();

        assert_eq!(dashboard.metrics.total_amount, 100.0);
        assert_eq!(dashboard.item_pareto.summary.entity_count, 4);
        assert_eq!(dashboard.item_pareto.summary.head_count, 2);
        assert!((dashboard.item_pareto.summary.head_percent - 50.0).abs() < 1e-12);

        let subgroups = &dashboard.subgroup_pareto.result;
        assert_eq!(subgroups.ranked[0].entity, "Tools");
        assert_eq!(subgroups.cutoff_index, 1);
        assert_eq!(dashboard.series.len(), 1);
    }

    #[test]
    fn test_top_n_does_not_truncate_pareto() {
        let records: Vec<SaleRecord> = (1..=20)
            .map(|i| sale(&format!("item-{i:02}"), "Tools", "Cali", f64::from(i)))
            .collect();
        let config = DashboardConfig {
            top_n: 5,
            ..Default::default()
        };

        let dashboard = build_dashboard(&records, &config).unwrap();

        assert_eq!(dashboard.top_items.len(), 5);
        assert_eq!(dashboard.item_pareto.result.entity_count(), 20);
        assert_eq!(dashboard.item_pareto.summary.head_count, 12);
    }

    #[test]
    fn test_empty_snapshot_is_not_an_error() {
        let dashboard = build_dashboard(&[], &DashboardConfig::default()).unwrap();
        assert_eq!(dashboard.metrics, KeyMetrics::default());
        assert!(dashboard.series.is_empty());
        assert_eq!(dashboard.item_pareto.summary.head_count, 0);
        assert_eq!(dashboard.subgroup_pareto.summary.head_percent, 0.0);
    }

    #[test]
    fn test_negative_amount_surfaces_input_error() {
        let records = vec![sale("refund", "Tools", "Cali", -10.0)];
        let err = build_dashboard(&records, &DashboardConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Input(InvalidInputError::NegativeValue { .. })
        ));
    }
}
