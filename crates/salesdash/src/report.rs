//! Plain-text and JSON rendering of dashboard data

use std::fmt::{self, Write};

use salesdash_core::Dashboard;
use salesdash_core::dashboard::ParetoPanel;
use salesdash_core::gdp::GdpPanel;
use salesdash_core::model::Contribution;
use serde::Serialize;

use crate::util::format::{
    format_billions, format_currency_short, format_growth, format_millions, format_percentage,
};

/// One-sentence summary of a Pareto panel.
///
/// Empty and zero-total rankings get a "no data" sentence instead of a ratio.
pub fn pareto_narrative(panel: &ParetoPanel) -> String {
    let summary = &panel.summary;
    let noun = summary.dimension.plural();
    if summary.entity_count == 0 {
        return format!("No {noun} with sales in the selected range.");
    }
    if panel.result.is_degenerate() {
        return format!(
            "No sales recorded across the {} {noun} in the selected range.",
            summary.entity_count
        );
    }
    format!(
        "{} of {} {noun} ({:.1}%) generate ~{:.0}% of sales.",
        summary.head_count,
        summary.entity_count,
        summary.head_percent,
        summary.threshold * 100.0
    )
}

/// Write a table of every ranked row up to the cutoff
pub fn write_pareto_table(out: &mut impl Write, panel: &ParetoPanel) -> fmt::Result {
    writeln!(
        out,
        "{:>4}  {:<28} {:>16} {:>9} {:>11}",
        "#", "Name", "Sales", "Share", "Cumulative"
    )?;
    for (i, row) in panel.result.head().iter().enumerate() {
        writeln!(
            out,
            "{:>4}  {:<28} {:>16} {:>9} {:>11}",
            i + 1,
            row.entity,
            format_currency_short(row.value),
            format_percentage(row.share_of_total),
            format_percentage(row.cumulative_share)
        )?;
    }
    Ok(())
}

fn write_top_list(out: &mut impl Write, title: &str, rows: &[Contribution]) -> fmt::Result {
    writeln!(out, "{title}")?;
    for (i, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "{:>4}  {:<28} {:>16}",
            i + 1,
            row.entity,
            format_currency_short(row.value)
        )?;
    }
    Ok(())
}

/// Write the full text report
pub fn write_report(
    out: &mut impl Write,
    dashboard: &Dashboard,
    gdp: Option<&GdpPanel>,
) -> fmt::Result {
    let metrics = &dashboard.metrics;

    writeln!(out, "== Key metrics ==")?;
    writeln!(
        out,
        "Total sales (pesos):   {}",
        format_currency_short(metrics.total_amount)
    )?;
    writeln!(
        out,
        "Total sales (dollars): {}",
        format_currency_short(metrics.total_amount_usd)
    )?;
    writeln!(out, "Unique clients:        {}", metrics.unique_clients)?;
    writeln!(out, "Products sold:         {}", metrics.unique_items)?;

    writeln!(out, "\n== {} ==", dashboard.granularity.title())?;
    for point in &dashboard.series {
        writeln!(
            out,
            "{:<10} {:>16} {:>12}",
            point.period.label(),
            format_currency_short(point.amount),
            format_millions(point.amount)
        )?;
    }

    writeln!(out)?;
    write_top_list(out, "== Top products ==", &dashboard.top_items)?;
    writeln!(out)?;
    write_top_list(out, "== Top subgroups ==", &dashboard.top_subgroups)?;

    for (title, panel) in [
        ("Pareto by subgroup", &dashboard.subgroup_pareto),
        ("Pareto by product", &dashboard.item_pareto),
    ] {
        writeln!(out, "\n== {title} ==")?;
        writeln!(out, "{}", pareto_narrative(panel))?;
        if !panel.result.head().is_empty() && !panel.result.is_degenerate() {
            write_pareto_table(out, panel)?;
        }
    }

    if let Some(gdp) = gdp {
        writeln!(out, "\n== GDP ==")?;
        for growth in &gdp.growth {
            let value = growth
                .last_gdp_billions
                .map_or_else(|| "n/a".to_string(), format_billions);
            writeln!(
                out,
                "{:<6} {:>12} {:>8}",
                growth.country_code,
                value,
                format_growth(growth.growth)
            )?;
        }
    }

    Ok(())
}

/// Full text report for the terminal
pub fn render_text(dashboard: &Dashboard, gdp: Option<&GdpPanel>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, dashboard, gdp)?;
    Ok(out)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    dashboard: &'a Dashboard,
    #[serde(skip_serializing_if = "Option::is_none")]
    gdp: Option<&'a GdpPanel>,
}

/// Machine-readable report
pub fn render_json(
    dashboard: &Dashboard,
    gdp: Option<&GdpPanel>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport { dashboard, gdp })
}
