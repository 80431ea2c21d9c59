//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required path was left empty
    #[error("{0} path must not be empty")]
    EmptyPath(&'static str),

    /// The symbol column name was left empty
    #[error("symbol column name must not be empty")]
    EmptySymbolColumn,

    /// An environment variable held a value that could not be parsed
    #[error("invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },

    /// Unknown gauge variant name
    #[error("unknown gauge variant '{0}' (expected 'five' or 'ten')")]
    UnknownGauge(String),
}

/// Axis range used for the category gauges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeVariant {
    /// Axis 0..5
    #[default]
    Five,
    /// Axis 0..10
    Ten,
}

impl FromStr for GaugeVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "five" | "5" => Ok(Self::Five),
            "ten" | "10" => Ok(Self::Ten),
            other => Err(ConfigError::UnknownGauge(other.to_string())),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fundamentals table every scored parameter is read from
    pub reference_path: PathBuf,
    /// Secondary metrics table, displayed verbatim
    pub metrics_path: PathBuf,
    /// Threshold table override; the built-in table is used when unset
    pub rules_path: Option<PathBuf>,
    /// Column holding the ticker symbol in both tables
    pub symbol_column: String,
    /// Gauge axis variant
    pub gauge: GaugeVariant,
    /// Upper bound on the real-time quote fetch, unbounded when unset
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from("merged_stock_data_with_categories_in_cells_nov2024.xlsx"),
            metrics_path: PathBuf::from("calculated_stock_metrics_full.xlsx"),
            rules_path: None,
            symbol_column: "Stock Symbol".to_string(),
            gauge: GaugeVariant::Five,
            fetch_timeout_secs: None,
        }
    }
}

impl Config {
    /// Overlay values from `RISKDASH_*` environment variables
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_vars(|key| std::env::var(key).ok())
    }

    fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(path) = lookup("RISKDASH_REFERENCE") {
            self.reference_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("RISKDASH_METRICS") {
            self.metrics_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("RISKDASH_RULES") {
            self.rules_path = Some(PathBuf::from(path));
        }
        if let Some(column) = lookup("RISKDASH_SYMBOL_COLUMN") {
            self.symbol_column = column;
        }
        if let Some(gauge) = lookup("RISKDASH_GAUGE") {
            self.gauge = gauge.parse()?;
        }
        if let Some(secs) = lookup("RISKDASH_FETCH_TIMEOUT_SECS") {
            let parsed = secs.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                var: "RISKDASH_FETCH_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            self.fetch_timeout_secs = Some(parsed);
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("reference"));
        }
        if self.metrics_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("metrics"));
        }
        if self
            .rules_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::EmptyPath("rules"));
        }
        if self.symbol_column.trim().is_empty() {
            return Err(ConfigError::EmptySymbolColumn);
        }
        Ok(())
    }
}
