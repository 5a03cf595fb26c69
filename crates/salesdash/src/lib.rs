//! Command-line front end for the sales dashboard
//!
//! Loads YAML snapshots produced by an upstream exporter, builds the dashboard
//! through `salesdash_core`, and renders it as text or JSON.

pub mod loader;
pub mod logging;
pub mod report;
pub mod util;

pub use logging::init_logging;
