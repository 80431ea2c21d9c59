//! Presentation of dashboard reports
//!
//! Everything here is a pure function of a [`DashboardReport`](crate::engine::DashboardReport).

pub mod chart;
pub mod formatter;
pub mod gauge;
pub mod tables;

pub use chart::render_score_chart;
pub use formatter::{Formatter, FormatterFactory, JsonFormatter, OutputFormat, TableFormatter};
pub use gauge::{Gauge, GaugeBand, GaugeStyle, category_gauges};
