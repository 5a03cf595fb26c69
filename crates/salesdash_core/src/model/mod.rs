mod gdp;
mod sales;

pub use gdp::{GdpObservation, GdpRow};
pub use sales::{Contribution, SaleRecord};
