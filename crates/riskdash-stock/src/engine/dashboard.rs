//! Risk dashboard: one scoring pass per selection

use chrono::Utc;
use std::sync::Arc;

use super::result::{DashboardReport, DataFreshness};
use crate::api::{QuoteMap, QuoteSource};
use crate::config::DashboardConfig;
use crate::data::{MetricsTable, ReferenceTable};
use crate::error::Result;
use crate::realtime::apply_realtime_override;
use crate::rules::RiskRules;
use crate::scorer::score;

/// Static data, rules and the optional live quote source
///
/// Nothing here changes between evaluations; each call to
/// [`RiskDashboard::evaluate`] starts from fresh copies of the reference rows.
pub struct RiskDashboard {
    reference: ReferenceTable,
    metrics: MetricsTable,
    rules: Arc<RiskRules>,
    quote_source: Option<Arc<dyn QuoteSource>>,
    config: DashboardConfig,
}

impl RiskDashboard {
    pub fn new(
        reference: ReferenceTable,
        metrics: MetricsTable,
        rules: Arc<RiskRules>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            reference,
            metrics,
            rules,
            quote_source: None,
            config,
        }
    }

    /// Load both tables and the rules named by the application config
    ///
    /// Any load failure is returned before a dashboard exists.
    pub fn load(app: &riskdash_utils::Config) -> Result<Self> {
        let config = DashboardConfig::from_app_config(app)?;

        let rules = RiskRules::load(app.rules_path.as_deref())?;
        let reference = ReferenceTable::load(&app.reference_path, &config.symbol_column)?;
        let metrics = MetricsTable::load(&app.metrics_path, &config.symbol_column)?;

        Ok(Self::new(reference, metrics, Arc::new(rules), config))
    }

    /// Attach the live quote source used when `realtime` is enabled
    pub fn with_quote_source(mut self, source: Arc<dyn QuoteSource>) -> Self {
        self.quote_source = Some(source);
        self
    }

    pub fn rules(&self) -> &RiskRules {
        &self.rules
    }

    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Score the given symbols
    ///
    /// An empty selection falls back to the first reference symbol when
    /// `default_to_first_symbol` is set. Repeated symbols are scored once.
    pub async fn evaluate(&self, symbols: &[String]) -> DashboardReport {
        let selected = self.resolve_selection(symbols);
        let mut selection = self.reference.select(&selected);

        let quotes = match (&self.quote_source, self.config.realtime) {
            (Some(source), true) if !selection.records.is_empty() => {
                let scored: Vec<String> =
                    selection.records.iter().map(|r| r.symbol.clone()).collect();
                Some(self.fetch_quotes(source.as_ref(), &scored).await)
            }
            _ => None,
        };

        let live_quotes = apply_realtime_override(&mut selection.records, quotes.as_ref());
        let freshness = match quotes {
            None => DataFreshness::Static,
            Some(_) if live_quotes == selection.records.len() => DataFreshness::RealTime,
            Some(_) => DataFreshness::Partial,
        };

        let score = score(&selection.records, &self.rules);
        let metrics = self.metrics.filter(&selected);

        let report = DashboardReport {
            selected,
            skipped: selection.missing,
            live_quotes,
            freshness,
            score,
            metrics,
            timestamp: Utc::now(),
        };
        tracing::info!("{}", report.summary());
        report
    }

    fn resolve_selection(&self, symbols: &[String]) -> Vec<String> {
        let mut selected: Vec<String> = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let symbol = symbol.trim();
            if !symbol.is_empty() && !selected.iter().any(|s| s == symbol) {
                selected.push(symbol.to_string());
            }
        }

        if selected.is_empty() && self.config.default_to_first_symbol {
            if let Some(first) = self.reference.symbols().first() {
                tracing::info!(symbol = %first, "No symbols selected, using first reference symbol");
                selected.push(first.clone());
            }
        }
        selected
    }

    /// One batch fetch; any failure degrades to an empty map
    async fn fetch_quotes(&self, source: &dyn QuoteSource, symbols: &[String]) -> QuoteMap {
        tracing::info!(count = symbols.len(), "Fetching live quotes");
        let fetch = source.latest_quotes(symbols);

        let result = match self.config.fetch_timeout {
            Some(limit) => match tokio::time::timeout(limit, fetch).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(timeout = ?limit, "Quote fetch timed out, live fields unavailable");
                    return QuoteMap::new();
                }
            },
            None => fetch.await,
        };

        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Quote fetch failed, live fields unavailable");
            QuoteMap::new()
        })
    }
}
