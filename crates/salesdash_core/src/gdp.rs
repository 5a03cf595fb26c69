//! GDP comparison panel built from World Bank country data.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{GdpObservation, GdpRow};

/// First year covered by the World Bank dataset
pub const FIRST_YEAR: i16 = 1960;
/// Last year covered by the World Bank dataset
pub const LAST_YEAR: i16 = 2022;
/// Countries selected when the user has not chosen any
pub const DEFAULT_COUNTRIES: [&str; 6] = ["DEU", "FRA", "GBR", "BRA", "MEX", "JPN"];

const BILLION: f64 = 1_000_000_000.0;

/// Reshape wide rows into one observation per (country, year).
///
/// Observations are ordered by year, then by row order. Years absent from a
/// row become missing datapoints.
#[must_use]
pub fn melt(rows: &[GdpRow], years: RangeInclusive<i16>) -> Vec<GdpObservation> {
    years
        .flat_map(|year| {
            rows.iter().map(move |row| GdpObservation {
                country_code: row.country_code.clone(),
                year,
                gdp: row.values.get(&year).copied().flatten(),
            })
        })
        .collect()
}

/// Country and year-range selection for the GDP panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GdpQuery {
    pub countries: Vec<String>,
    pub from_year: i16,
    pub to_year: i16,
}

impl Default for GdpQuery {
    fn default() -> Self {
        Self {
            countries: DEFAULT_COUNTRIES.iter().map(|c| (*c).to_string()).collect(),
            from_year: FIRST_YEAR,
            to_year: LAST_YEAR,
        }
    }
}

impl GdpQuery {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.from_year > self.to_year {
            return Err(ConfigError::InvertedYearRange {
                from_year: self.from_year,
                to_year: self.to_year,
            });
        }
        for year in [self.from_year, self.to_year] {
            if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
                return Err(ConfigError::YearOutOfRange {
                    year,
                    first: FIRST_YEAR,
                    last: LAST_YEAR,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn matches(&self, obs: &GdpObservation) -> bool {
        obs.year >= self.from_year
            && obs.year <= self.to_year
            && self.countries.iter().any(|c| *c == obs.country_code)
    }
}

/// Observations for the selected countries within the selected years
#[must_use]
pub fn filter<'a>(observations: &'a [GdpObservation], query: &GdpQuery) -> Vec<&'a GdpObservation> {
    observations.iter().filter(|o| query.matches(o)).collect()
}

/// GDP at the end of the range and growth across it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryGrowth {
    pub country_code: String,
    /// GDP in `to_year`, in billions of US dollars
    pub last_gdp_billions: Option<f64>,
    /// `to_year` GDP as a multiple of `from_year` GDP
    pub growth: Option<f64>,
}

fn gdp_in(observations: &[GdpObservation], country: &str, year: i16) -> Option<f64> {
    observations
        .iter()
        .find(|o| o.year == year && o.country_code == country)
        .and_then(|o| o.gdp)
        .filter(|v| !v.is_nan())
}

/// Growth of one country between two years.
///
/// Growth is unavailable when either endpoint is missing or the start is zero.
#[must_use]
pub fn country_growth(
    observations: &[GdpObservation],
    country: &str,
    from_year: i16,
    to_year: i16,
) -> CountryGrowth {
    let first = gdp_in(observations, country, from_year).map(|v| v / BILLION);
    let last = gdp_in(observations, country, to_year).map(|v| v / BILLION);

    let growth = match (first, last) {
        (Some(first), Some(last)) if first != 0.0 => Some(last / first),
        _ => None,
    };

    CountryGrowth {
        country_code: country.to_string(),
        last_gdp_billions: last,
        growth,
    }
}

/// Data behind the GDP section: the filtered series and per-country growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpPanel {
    pub series: Vec<GdpObservation>,
    pub growth: Vec<CountryGrowth>,
}

/// Build the GDP panel for `query`.
///
/// # Errors
/// Returns [`ConfigError::InvertedYearRange`] if the year range is inverted
/// and [`ConfigError::YearOutOfRange`] if it leaves the dataset's years.
pub fn build_gdp_panel(rows: &[GdpRow], query: &GdpQuery) -> Result<GdpPanel, ConfigError> {
    query.validate()?;
    if query.countries.is_empty() {
        tracing::warn!("No countries selected for GDP panel");
    }

    let observations = melt(rows, FIRST_YEAR..=LAST_YEAR);
    let series: Vec<GdpObservation> = filter(&observations, query).into_iter().cloned().collect();
    let growth = query
        .countries
        .iter()
        .map(|c| country_growth(&observations, c, query.from_year, query.to_year))
        .collect();

    tracing::debug!(
        countries = query.countries.len(),
        observations = series.len(),
        "Built GDP panel"
    );

    Ok(GdpPanel { series, growth })
}
