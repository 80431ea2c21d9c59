//! Risk categories and their threshold bands
//!
//! The threshold table is built once (from the built-in defaults or a TOML
//! file) and handed to the scorer by reference. There are no mutators.
//!
//! # TOML layout
//!
//! ```toml
//! [[category]]
//! name = "Liquidity Risk"
//!
//! [[category.parameter]]
//! name = "Volume"
//! low = 1_000_000
//! high = inf
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, RiskError};

/// Threshold band for one named parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRule {
    pub name: String,
    pub low: f64,
    pub high: f64,
}

impl ParameterRule {
    pub fn new(name: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            name: name.into(),
            low,
            high,
        }
    }
}

/// A named group of parameter rules, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCategory {
    pub name: String,
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<ParameterRule>,
}

impl RiskCategory {
    pub fn new(name: impl Into<String>, parameters: Vec<ParameterRule>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RulesFile {
    #[serde(rename = "category", default)]
    categories: Vec<RiskCategory>,
}

/// Validated, ordered set of risk categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskRules {
    categories: Vec<RiskCategory>,
}

impl RiskRules {
    /// Validate and wrap a list of categories
    pub fn new(categories: Vec<RiskCategory>) -> Result<Self> {
        if categories.is_empty() {
            return Err(RiskError::InvalidRules("at least one category is required".to_string()));
        }

        let mut category_names = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(RiskError::InvalidRules("category name must not be empty".to_string()));
            }
            if !category_names.insert(category.name.as_str()) {
                return Err(RiskError::InvalidRules(format!(
                    "duplicate category '{}'",
                    category.name
                )));
            }

            let mut parameter_names = HashSet::new();
            for rule in &category.parameters {
                if rule.name.trim().is_empty() {
                    return Err(RiskError::InvalidRules(format!(
                        "empty parameter name in '{}'",
                        category.name
                    )));
                }
                if !parameter_names.insert(rule.name.as_str()) {
                    return Err(RiskError::InvalidRules(format!(
                        "duplicate parameter '{}' in '{}'",
                        rule.name, category.name
                    )));
                }
                if rule.low.is_nan() || rule.high.is_nan() {
                    return Err(RiskError::InvalidRules(format!(
                        "'{}' has a NaN bound",
                        rule.name
                    )));
                }
                if rule.low > rule.high {
                    return Err(RiskError::InvalidRules(format!(
                        "'{}' has low {} above high {}",
                        rule.name, rule.low, rule.high
                    )));
                }
            }
        }

        Ok(Self { categories })
    }

    /// Parse a rules table from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: RulesFile = toml::from_str(text)?;
        Self::new(file.categories)
    }

    /// Load a rules table from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let rules = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            categories = rules.categories.len(),
            parameters = rules.parameter_count(),
            "Loaded risk rules"
        );
        Ok(rules)
    }

    /// Rules from `path` when given, the built-in table otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    pub fn categories(&self) -> &[RiskCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&RiskCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total number of rules across all categories
    pub fn parameter_count(&self) -> usize {
        self.categories.iter().map(|c| c.parameters.len()).sum()
    }
}

impl Default for RiskRules {
    /// Thresholds used by the NSE fundamentals dashboard
    fn default() -> Self {
        Self {
            categories: vec![
                RiskCategory::new(
                    "Market Risk",
                    vec![
                        ParameterRule::new("Volatility", 0.1, 0.2),
                        ParameterRule::new("Beta", 0.5, 1.5),
                        ParameterRule::new("Correlation with ^NSEI", 0.7, 1.0),
                    ],
                ),
                RiskCategory::new(
                    "Financial Risk",
                    vec![
                        ParameterRule::new("debtToEquity", 0.5, 1.5),
                        ParameterRule::new("currentRatio", 1.5, 2.0),
                        ParameterRule::new("quickRatio", 1.0, 1.5),
                        ParameterRule::new("Profit Margins", 20.0, 30.0),
                        ParameterRule::new("returnOnAssets", 10.0, 20.0),
                        ParameterRule::new("returnOnEquity", 15.0, 25.0),
                    ],
                ),
                RiskCategory::new(
                    "Liquidity Risk",
                    vec![
                        ParameterRule::new("Volume", 1_000_000.0, f64::INFINITY),
                        ParameterRule::new("Average Volume", 500_000.0, 1_000_000.0),
                        ParameterRule::new("marketCap", 10_000_000_000.0, f64::INFINITY),
                    ],
                ),
            ],
        }
    }
}
