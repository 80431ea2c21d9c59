//! Threshold classification of a single parameter value

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::{FieldValue, UNAVAILABLE_TEXT};

/// Outcome of comparing a value against a threshold band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Good,
    Neutral,
    Bad,
    Unavailable,
}

impl RiskLevel {
    /// Contribution to stock, category and portfolio scores
    pub fn score(self) -> i64 {
        match self {
            Self::Good => 1,
            Self::Bad => -1,
            Self::Neutral | Self::Unavailable => 0,
        }
    }

    pub fn color(self) -> RiskColor {
        match self {
            Self::Good => RiskColor::Green,
            Self::Neutral => RiskColor::Yellow,
            Self::Bad => RiskColor::Red,
            Self::Unavailable => RiskColor::Black,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Bad => "Bad",
            Self::Unavailable => UNAVAILABLE_TEXT,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display colour associated with a risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Green,
    Yellow,
    Red,
    Black,
}

impl RiskColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for RiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `value` against the band `[low, high]`
///
/// Below `low` is good, inside the band (both ends inclusive) is neutral,
/// above `high` is bad. Anything that is not a real number is unavailable.
pub fn classify(value: &FieldValue, low: f64, high: f64) -> RiskLevel {
    let Some(value) = value.as_number() else {
        return RiskLevel::Unavailable;
    };

    if value < low {
        RiskLevel::Good
    } else if value <= high {
        RiskLevel::Neutral
    } else {
        RiskLevel::Bad
    }
}
