//! Risk dashboard engine
//!
//! Coordination layer: selection, one live quote fetch, override, scoring

pub mod dashboard;
pub mod result;

pub use dashboard::RiskDashboard;
pub use result::{DashboardReport, DataFreshness};
