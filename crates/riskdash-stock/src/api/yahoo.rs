//! Yahoo Finance API client

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use yahoo_finance_api as yahoo;

use super::{LiveQuote, QuoteMap, QuoteSource};
use crate::error::{Result, RiskError};

/// Yahoo Finance API client
#[derive(Debug, Clone, Copy, Default)]
pub struct YahooFinanceClient {}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }

    /// Get the latest quote of the most recent 1-day session
    pub async fn get_quote(&self, symbol: &str) -> Result<LiveQuote> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| RiskError::YahooFinance(e.to_string()))?;

        let response = provider
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| RiskError::YahooFinance(e.to_string()))?;

        let quote = response
            .last_quote()
            .map_err(|e| RiskError::YahooFinance(e.to_string()))?;

        Ok(LiveQuote {
            symbol: symbol.to_string(),
            timestamp: DateTime::from_timestamp(quote.timestamp as i64, 0)
                .unwrap_or_else(Utc::now),
            price: quote.close,
            volume: quote.volume,
        })
    }
}

#[async_trait]
impl QuoteSource for YahooFinanceClient {
    async fn latest_quotes(&self, symbols: &[String]) -> Result<QuoteMap> {
        let mut quotes = QuoteMap::with_capacity(symbols.len());

        for symbol in symbols {
            match self.get_quote(symbol).await {
                Ok(quote) => {
                    tracing::debug!(%symbol, price = quote.price, volume = quote.volume, "Fetched quote");
                    quotes.insert(symbol.clone(), quote);
                }
                Err(e) => {
                    tracing::warn!(%symbol, error = %e, "Quote not available");
                }
            }
        }

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_get_quote() {
        let client = YahooFinanceClient::new();
        let quote = client.get_quote("RELIANCE.NS").await.unwrap();
        assert_eq!(quote.symbol, "RELIANCE.NS");
        assert!(quote.price > 0.0);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_unknown_symbol_left_out() {
        let client = YahooFinanceClient::new();
        let symbols = vec!["RELIANCE.NS".to_string(), "INVALID_SYMBOL_12345".to_string()];
        let quotes = client.latest_quotes(&symbols).await.unwrap();
        assert!(quotes.contains_key("RELIANCE.NS"));
        assert!(!quotes.contains_key("INVALID_SYMBOL_12345"));
    }
}
