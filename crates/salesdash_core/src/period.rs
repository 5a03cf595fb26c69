//! Calendar binning of sales into monthly, quarterly or yearly periods.
//!
//! Periods are labelled by their end date, the same anchoring a
//! month-end/quarter-end/year-end resample uses, and a series is contiguous:
//! periods without sales appear with a zero total.

use std::fmt;

use jiff::civil::{Date, date};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::SaleRecord;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Time bucket size for the sales evolution chart
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Granularity {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl Granularity {
    fn periods_per_year(self) -> i8 {
        match self {
            Granularity::Monthly => 12,
            Granularity::Quarterly => 4,
            Granularity::Yearly => 1,
        }
    }

    /// Chart title for a series at this granularity
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Granularity::Monthly => "Monthly sales evolution",
            Granularity::Quarterly => "Quarterly sales evolution",
            Granularity::Yearly => "Yearly sales evolution",
        }
    }
}

/// One calendar bucket: month 1-12, quarter 1-4, or the whole year (index 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i16,
    pub index: i8,
    pub granularity: Granularity,
}

impl Period {
    /// The period of `granularity` that contains `d`
    #[must_use]
    pub fn containing(d: Date, granularity: Granularity) -> Self {
        let index = match granularity {
            Granularity::Monthly => d.month(),
            Granularity::Quarterly => (d.month() - 1) / 3 + 1,
            Granularity::Yearly => 1,
        };
        Self {
            year: d.year(),
            index,
            granularity,
        }
    }

    fn first_month(&self) -> i8 {
        match self.granularity {
            Granularity::Monthly => self.index,
            Granularity::Quarterly => (self.index - 1) * 3 + 1,
            Granularity::Yearly => 1,
        }
    }

    fn last_month(&self) -> i8 {
        match self.granularity {
            Granularity::Monthly => self.index,
            Granularity::Quarterly => self.index * 3,
            Granularity::Yearly => 12,
        }
    }

    /// First day of the period
    #[must_use]
    pub fn start(&self) -> Date {
        date(self.year, self.first_month(), 1)
    }

    /// Last day of the period
    #[must_use]
    pub fn end(&self) -> Date {
        date(self.year, self.last_month(), 1).last_of_month()
    }

    /// The following period of the same granularity
    #[must_use]
    pub fn next(&self) -> Self {
        if self.index >= self.granularity.periods_per_year() {
            Self {
                year: self.year + 1,
                index: 1,
                granularity: self.granularity,
            }
        } else {
            Self {
                index: self.index + 1,
                ..*self
            }
        }
    }

    /// Short axis label ("Jan 2015", "Q1 2015", "2015")
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.granularity {
            Granularity::Monthly => {
                let month = usize::try_from(i16::from(self.index) - 1)
                    .ok()
                    .and_then(|i| MONTH_ABBREVIATIONS.get(i));
                match month {
                    Some(month) => write!(f, "{month} {}", self.year),
                    None => write!(f, "M{} {}", self.index, self.year),
                }
            }
            Granularity::Quarterly => write!(f, "Q{} {}", self.index, self.year),
            Granularity::Yearly => write!(f, "{}", self.year),
        }
    }
}

/// Sales total for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotal {
    pub period: Period,
    pub period_end: Date,
    pub amount: f64,
}

/// Sum sales per period over the contiguous span covering every record.
///
/// Returns an empty series when there are no records.
pub fn time_series<'a, I>(records: I, granularity: Granularity) -> Vec<PeriodTotal>
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    let mut totals: FxHashMap<Period, f64> = FxHashMap::default();
    let mut bounds: Option<(Period, Period)> = None;

    for record in records {
        let period = Period::containing(record.date, granularity);
        *totals.entry(period).or_insert(0.0) += record.amount;
        bounds = Some(match bounds {
            None => (period, period),
            Some((lo, hi)) => (lo.min(period), hi.max(period)),
        });
    }

    let Some((first, last)) = bounds else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut period = first;
    loop {
        series.push(PeriodTotal {
            period,
            period_end: period.end(),
            amount: totals.get(&period).copied().unwrap_or(0.0),
        });
        if period == last {
            break;
        }
        period = period.next();
    }
    series
}

/// Sales per calendar year
pub fn yearly_totals<'a, I>(records: I) -> Vec<PeriodTotal>
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    time_series(records, Granularity::Yearly)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(d: Date, amount: f64) -> SaleRecord {
        SaleRecord {
            date: d,
            city: "Cali".to_string(),
            subgroup: "Tools".to_string(),
            item: "hammer".to_string(),
            client: "c1".to_string(),
            amount,
            amount_usd: 0.0,
        }
    }

    #[test]
    fn test_period_containing() {
        let d = date(2015, 8, 17);
        assert_eq!(Period::containing(d, Granularity::Monthly).index, 8);
        assert_eq!(Period::containing(d, Granularity::Quarterly).index, 3);
        assert_eq!(Period::containing(d, Granularity::Yearly).index, 1);
    }

    #[test]
    fn test_period_bounds() {
        let feb = Period::containing(date(2016, 2, 10), Granularity::Monthly);
        assert_eq!(feb.start(), date(2016, 2, 1));
        assert_eq!(feb.end(), date(2016, 2, 29));

        let q4 = Period::containing(date(2015, 11, 3), Granularity::Quarterly);
        assert_eq!(q4.start(), date(2015, 10, 1));
        assert_eq!(q4.end(), date(2015, 12, 31));

        let year = Period::containing(date(2015, 11, 3), Granularity::Yearly);
        assert_eq!(year.start(), date(2015, 1, 1));
        assert_eq!(year.end(), date(2015, 12, 31));
    }

    #[test]
    fn test_period_next_rolls_over_year() {
        let dec = Period::containing(date(2015, 12, 5), Granularity::Monthly);
        let jan = dec.next();
        assert_eq!((jan.year, jan.index), (2016, 1));

        let q4 = Period::containing(date(2015, 12, 5), Granularity::Quarterly);
        assert_eq!((q4.next().year, q4.next().index), (2016, 1));
    }

    #[test]
    fn test_labels() {
        let d = date(2015, 3, 9);
        assert_eq!(Period::containing(d, Granularity::Monthly).label(), "Mar 2015");
        assert_eq!(Period::containing(d, Granularity::Quarterly).label(), "Q1 2015");
        assert_eq!(Period::containing(d, Granularity::Yearly).label(), "2015");
    }

    #[test]
    fn test_label_of_invalid_month_index() {
        for index in [0, 13, i8::MIN] {
            let period = Period {
                year: 2015,
                index,
                granularity: Granularity::Monthly,
            };
            assert_eq!(period.label(), format!("M{index} 2015"));
        }
    }

    #[test]
    fn test_time_series_fills_gaps() {
        let records = vec![
            sale(date(2015, 1, 15), 10.0),
            sale(date(2015, 1, 20), 5.0),
            sale(date(2015, 4, 2), 7.0),
        ];
        let series = time_series(&records, Granularity::Monthly);
        let amounts: Vec<f64> = series.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![15.0, 0.0, 0.0, 7.0]);
        assert_eq!(series[0].period_end, date(2015, 1, 31));
        assert_eq!(series[3].period_end, date(2015, 4, 30));
    }

    #[test]
    fn test_time_series_unsorted_input() {
        let records = vec![
            sale(date(2017, 6, 1), 1.0),
            sale(date(2015, 2, 1), 2.0),
            sale(date(2016, 9, 1), 3.0),
        ];
        let series = yearly_totals(&records);
        let pairs: Vec<(i16, f64)> = series.iter().map(|p| (p.period.year, p.amount)).collect();
        assert_eq!(pairs, vec![(2015, 2.0), (2016, 3.0), (2017, 1.0)]);
    }

    #[test]
    fn test_time_series_quarterly() {
        let records = vec![sale(date(2015, 2, 1), 1.0), sale(date(2015, 12, 1), 2.0)];
        let series = time_series(&records, Granularity::Quarterly);
        assert_eq!(series.len(), 4);
        assert_eq!(series[3].amount, 2.0);
    }

    #[test]
    fn test_time_series_empty() {
        let records: Vec<SaleRecord> = Vec::new();
        assert!(time_series(&records, Granularity::Monthly).is_empty());
    }
}
