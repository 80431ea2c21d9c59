//! Real-time quote providers

pub mod yahoo;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

pub use yahoo::YahooFinanceClient;

/// Latest trade data for one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveQuote {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub volume: u64,
}

/// Quotes keyed by symbol; a missing key means no quote was obtained
pub type QuoteMap = HashMap<String, LiveQuote>;

/// Source of latest price and volume for a batch of symbols
///
/// Implementations leave a symbol out of the returned map when its quote
/// cannot be obtained. An `Err` means the whole batch failed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the most recent session's close and volume for every symbol
    async fn latest_quotes(&self, symbols: &[String]) -> Result<QuoteMap>;
}
