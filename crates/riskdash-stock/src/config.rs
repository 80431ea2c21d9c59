//! Configuration for dashboard evaluations

use crate::error::{Result, RiskError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for dashboard evaluations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Column holding the ticker symbol
    pub symbol_column: String,

    /// Fetch live price/volume before scoring
    pub realtime: bool,

    /// Upper bound on the batch quote fetch; unbounded when `None`
    pub fetch_timeout: Option<Duration>,

    /// Score the first reference symbol when the selection is empty
    pub default_to_first_symbol: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            symbol_column: "Stock Symbol".to_string(),
            realtime: true,
            fetch_timeout: None,
            default_to_first_symbol: true,
        }
    }
}

impl DashboardConfig {
    /// Create a new configuration builder
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Derive evaluation settings from the application configuration
    pub fn from_app_config(config: &riskdash_utils::Config) -> Result<Self> {
        config.validate()?;
        let mut builder = Self::builder().symbol_column(config.symbol_column.clone());
        if let Some(secs) = config.fetch_timeout_secs {
            builder = builder.fetch_timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.symbol_column.trim().is_empty() {
            return Err(RiskError::Config("symbol_column must not be empty".to_string()));
        }

        if self.fetch_timeout.is_some_and(|t| t.is_zero()) {
            return Err(RiskError::Config(
                "fetch_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for DashboardConfig
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    symbol_column: Option<String>,
    realtime: Option<bool>,
    fetch_timeout: Option<Duration>,
    default_to_first_symbol: Option<bool>,
}

impl DashboardConfigBuilder {
    /// Set the symbol column name
    pub fn symbol_column(mut self, column: impl Into<String>) -> Self {
        self.symbol_column = Some(column.into());
        self
    }

    /// Enable or disable the live quote fetch
    pub fn realtime(mut self, enabled: bool) -> Self {
        self.realtime = Some(enabled);
        self
    }

    /// Set the quote fetch timeout
    pub fn fetch_timeout(mut self, duration: Duration) -> Self {
        self.fetch_timeout = Some(duration);
        self
    }

    pub fn default_to_first_symbol(mut self, enabled: bool) -> Self {
        self.default_to_first_symbol = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DashboardConfig> {
        let defaults = DashboardConfig::default();

        let config = DashboardConfig {
            symbol_column: self.symbol_column.unwrap_or(defaults.symbol_column),
            realtime: self.realtime.unwrap_or(defaults.realtime),
            fetch_timeout: self.fetch_timeout.or(defaults.fetch_timeout),
            default_to_first_symbol: self
                .default_to_first_symbol
                .unwrap_or(defaults.default_to_first_symbol),
        };

        config.validate()?;
        Ok(config)
    }
}
