use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Context;
use salesdash::init_logging;
use salesdash::loader::{load_config, load_gdp, load_sales};
use salesdash::report::{render_json, render_text};
use salesdash_core::build_dashboard;
use salesdash_core::gdp::build_gdp_panel;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "salesdash")]
#[command(about = "Sales dashboard report with Pareto (80/20) analysis")]
struct Args {
    /// Path to the sales snapshot (YAML)
    #[arg(short, long)]
    sales: PathBuf,

    /// Path to the dashboard configuration (YAML); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the World Bank GDP snapshot (YAML)
    #[arg(short, long)]
    gdp: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let config = load_config(args.config.as_deref())?;
    let sales = load_sales(&args.sales)?;

    let dashboard =
        build_dashboard(&sales.records, &config).wrap_err("Failed to build dashboard")?;

    let gdp_panel = match &args.gdp {
        Some(path) => {
            let snapshot = load_gdp(path)?;
            let panel = build_gdp_panel(&snapshot.rows, &config.gdp)
                .wrap_err("Failed to build GDP panel")?;
            Some(panel)
        }
        None => None,
    };

    let output = match args.format {
        OutputFormat::Text => {
            render_text(&dashboard, gdp_panel.as_ref()).wrap_err("Failed to render report")?
        }
        OutputFormat::Json => {
            render_json(&dashboard, gdp_panel.as_ref()).wrap_err("Failed to serialize report")?
        }
    };
    println!("{output}");

    tracing::info!("Report written");
    Ok(())
}
