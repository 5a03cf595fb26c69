//! Sales dashboard analytics library
//!
//! This crate computes the data behind a sales business-intelligence dashboard.
//! It supports:
//! - Filtering transactions by date range, city and product subgroup
//! - Headline metrics (totals in local currency and USD, unique clients/products)
//! - Monthly, quarterly and yearly sales series
//! - Top-N product and subgroup lists
//! - Pareto (80/20) ranking of subgroups and products
//! - GDP comparisons over World Bank country data
//!
//! Rendering and data ingestion live outside this crate: callers supply
//! records and consume the returned structures.
//!
//! ```ignore
//! use salesdash_core::{DashboardConfig, build_dashboard};
//!
//! let dashboard = build_dashboard(&records, &DashboardConfig::default())?;
//! let pareto = &dashboard.item_pareto.summary;
//! println!("{} of {} products generate ~80% of sales", pareto.head_count, pareto.entity_count);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod gdp;
pub mod pareto;
pub mod period;
pub mod top_n;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use dashboard::{Dashboard, DashboardConfig, ParetoSummary, build_dashboard};
pub use error::{ConfigError, DashboardError, InvalidInputError};
pub use model::{Contribution, GdpObservation, GdpRow, SaleRecord};
pub use pareto::{DEFAULT_THRESHOLD, ParetoResult, RankedContribution, rank};
