//! Error types for risk scoring operations

use thiserror::Error;

/// Risk dashboard specific errors
///
/// Only conditions that must stop a run before any scoring happens are
/// represented here. Unknown symbols, missing values and failed quote lookups
/// are reported through the scoring output instead.
#[derive(Debug, Error)]
pub enum RiskError {
    /// File could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet (xlsx/ods) parsing error
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Spreadsheet contains no worksheet or no header row
    #[error("Table {path} is empty")]
    EmptyTable { path: String },

    /// File extension is not a supported table format
    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),

    /// The symbol column is missing from a table header
    #[error("Column '{column}' not found in {path}")]
    MissingColumn { column: String, path: String },

    /// Threshold rules failed validation
    #[error("Invalid risk rules: {0}")]
    InvalidRules(String),

    /// Threshold rules file could not be parsed
    #[error("Rules parse error: {0}")]
    RulesParse(#[from] toml::de::Error),

    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinance(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for risk dashboard operations
pub type Result<T> = std::result::Result<T, RiskError>;

impl From<calamine::Error> for RiskError {
    fn from(err: calamine::Error) -> Self {
        RiskError::Spreadsheet(err.to_string())
    }
}

impl From<riskdash_utils::ConfigError> for RiskError {
    fn from(err: riskdash_utils::ConfigError) -> Self {
        RiskError::Config(err.to_string())
    }
}
