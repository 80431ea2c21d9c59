//! Stock records and their attribute values

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Text shown wherever a value could not be obtained
pub const UNAVAILABLE_TEXT: &str = "Data not available";

/// A single attribute value on a stock record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Numeric cell
    Number(f64),
    /// Non-numeric cell, kept verbatim
    Text(String),
    /// Explicit marker that the value could not be obtained
    Unavailable,
}

impl FieldValue {
    /// Build a value from raw cell text
    ///
    /// Returns `None` for blank cells so callers can leave the attribute absent.
    pub fn from_cell(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.parse::<f64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(trimmed.to_string()),
        })
    }

    /// Interpret the value as a real number
    ///
    /// Text is parsed after trimming. NaN is never a number.
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            Self::Number(n) => *n,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Unavailable => return None,
        };
        (!number.is_nan()).then_some(number)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
            Self::Unavailable => f.write_str(UNAVAILABLE_TEXT),
        }
    }
}

/// Attribute values for one ticker symbol
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockRecord {
    pub symbol: String,
    pub values: HashMap<String, FieldValue>,
}

impl StockRecord {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            values: HashMap::new(),
        }
    }

    /// Builder-style setter, mostly for assembling records by hand
    pub fn with_value(mut self, parameter: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.values.insert(parameter.into(), value.into());
        self
    }

    pub fn set(&mut self, parameter: impl Into<String>, value: FieldValue) {
        self.values.insert(parameter.into(), value);
    }

    /// Look up a parameter; `None` means the attribute is absent
    pub fn get(&self, parameter: &str) -> Option<&FieldValue> {
        self.values.get(parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cell() {
        assert_eq!(FieldValue::from_cell(" 1.25 "), Some(FieldValue::Number(1.25)));
        assert_eq!(FieldValue::from_cell("n/a"), Some(FieldValue::Text("n/a".to_string())));
        assert_eq!(FieldValue::from_cell("   "), None);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(FieldValue::Number(2.0).as_number(), Some(2.0));
        assert_eq!(FieldValue::Text(" 0.75".to_string()).as_number(), Some(0.75));
        assert_eq!(FieldValue::Text("high".to_string()).as_number(), None);
        assert_eq!(FieldValue::Number(f64::NAN).as_number(), None);
        assert_eq!(FieldValue::Unavailable.as_number(), None);
        assert_eq!(FieldValue::Number(f64::INFINITY).as_number(), Some(f64::INFINITY));
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Number(1_500_000.0).to_string(), "1500000");
        assert_eq!(FieldValue::Number(0.15).to_string(), "0.15");
        assert_eq!(FieldValue::Unavailable.to_string(), UNAVAILABLE_TEXT);
    }

    #[test]
    fn test_record_lookup() {
        let record = StockRecord::new("ABC").with_value("Beta", 1.0);
        assert_eq!(record.get("Beta"), Some(&FieldValue::Number(1.0)));
        assert!(record.get("Volatility").is_none());
    }
}
