//! Dashboard evaluation result

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::MetricsView;
use crate::scorer::ScoreReport;

/// Where the Price/Volume fields came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFreshness {
    /// No live fetch was attempted; reference values were scored
    Static,
    /// Every scored symbol received a live quote
    RealTime,
    /// Some or all scored symbols have no live quote
    Partial,
}

/// Output of one dashboard evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Symbols requested after defaulting and de-duplication
    pub selected: Vec<String>,
    /// Requested symbols without a reference row
    pub skipped: Vec<String>,
    /// Symbols that received a live quote
    pub live_quotes: usize,
    pub freshness: DataFreshness,
    pub score: ScoreReport,
    pub metrics: MetricsView,
    pub timestamp: DateTime<Utc>,
}

impl DashboardReport {
    /// One-line description for logs and headers
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} stock(s) scored, portfolio score {}",
            self.score.stock_scores.len(),
            self.score.portfolio_score
        );
        if !self.skipped.is_empty() {
            summary.push_str(&format!(", {} skipped", self.skipped.len()));
        }
        summary
    }
}
