//! Stock risk scoring
//!
//! This crate scores a portfolio of stocks against fixed threshold bands
//! grouped into risk categories. It includes:
//!
//! - Reference and metrics table loading from CSV or spreadsheets
//! - A real-time price/volume override from Yahoo Finance
//! - The threshold classifier and the portfolio scorer
//! - Gauges, a score bar chart and tables for terminal output
//!
//! # Architecture
//!
//! [`RiskDashboard`] owns the static data and the immutable [`RiskRules`].
//! Each [`RiskDashboard::evaluate`] call copies the selected reference rows,
//! applies one batch of live quotes, then hands the records to [`score`].
//! Presentation in [`interface`] only reads the resulting report.
//!
//! # Example
//!
//! ```rust,ignore
//! use riskdash_stock::{RiskDashboard, YahooFinanceClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = riskdash_utils::Config::default().with_env()?;
//!     let dashboard = RiskDashboard::load(&config)?
//!         .with_quote_source(Arc::new(YahooFinanceClient::new()));
//!
//!     let report = dashboard.evaluate(&["RELIANCE.NS".to_string()]).await;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod classify;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod interface;
pub mod realtime;
pub mod record;
pub mod rules;
pub mod scorer;

// Re-export main types for convenience
pub use api::{LiveQuote, QuoteMap, QuoteSource, YahooFinanceClient};
pub use classify::{RiskColor, RiskLevel, classify};
pub use config::DashboardConfig;
pub use data::{MetricsTable, MetricsView, ReferenceTable};
pub use engine::{DashboardReport, DataFreshness, RiskDashboard};
pub use error::{Result, RiskError};
pub use realtime::apply_realtime_override;
pub use record::{FieldValue, StockRecord};
pub use rules::{ParameterRule, RiskCategory, RiskRules};
pub use scorer::{ClassificationResult, ScoreReport, score};
