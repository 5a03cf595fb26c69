//! YAML snapshot and configuration loading

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use salesdash_core::{DashboardConfig, GdpRow, SaleRecord};
use serde::{Deserialize, Serialize};

/// Sales rows exported by the upstream data collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesSnapshot {
    #[serde(default)]
    pub records: Vec<SaleRecord>,
}

impl SalesSnapshot {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }
}

/// World Bank GDP rows in wide layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GdpSnapshot {
    #[serde(default)]
    pub rows: Vec<GdpRow>,
}

impl GdpSnapshot {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }
}

pub fn load_sales(path: &Path) -> Result<SalesSnapshot> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read sales snapshot {}", path.display()))?;
    let snapshot = SalesSnapshot::from_yaml(&content)
        .wrap_err_with(|| format!("Failed to parse sales snapshot {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        records = snapshot.records.len(),
        "Loaded sales snapshot"
    );
    Ok(snapshot)
}

pub fn load_gdp(path: &Path) -> Result<GdpSnapshot> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read GDP snapshot {}", path.display()))?;
    let snapshot = GdpSnapshot::from_yaml(&content)
        .wrap_err_with(|| format!("Failed to parse GDP snapshot {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = snapshot.rows.len(), "Loaded GDP snapshot");
    Ok(snapshot)
}

/// Load the dashboard configuration, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using defaults");
        return Ok(DashboardConfig::default());
    };
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
    let config: DashboardConfig = serde_saphyr::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse config {}", path.display()))?;
    config
        .validate()
        .wrap_err_with(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}
