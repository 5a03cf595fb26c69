//! Integration tests for the dashboard analytics
//!
//! Tests are organized by topic:
//! - `pareto_properties` - Randomized invariants of the Pareto ranker
//! - `dashboard_flow` - Filter → aggregate → rank over a realistic snapshot

mod pareto_properties;
