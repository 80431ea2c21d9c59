//! Fundamentals reference table keyed by symbol

use std::collections::HashMap;
use std::path::Path;

use super::table::{RawTable, load_table};
use crate::error::{Result, RiskError};
use crate::record::StockRecord;

/// Records found for a requested batch of symbols
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// Known symbols, in request order
    pub records: Vec<StockRecord>,
    /// Requested symbols with no reference row
    pub missing: Vec<String>,
}

/// One row of attributes per symbol, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    symbols: Vec<String>,
    records: HashMap<String, StockRecord>,
}

impl ReferenceTable {
    /// Load from a CSV or spreadsheet file
    pub fn load(path: impl AsRef<Path>, symbol_column: &str) -> Result<Self> {
        let path = path.as_ref();
        let raw = load_table(path)?;
        let table = Self::from_raw(&raw, symbol_column).map_err(|err| match err {
            RiskError::MissingColumn { column, .. } => RiskError::MissingColumn {
                column,
                path: path.display().to_string(),
            },
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            symbols = table.symbols.len(),
            "Loaded reference data"
        );
        Ok(table)
    }

    /// Build from an in-memory table
    ///
    /// Symbols are taken as written (trimmed, never parsed as numbers).
    /// Rows without a symbol are ignored; the first row wins for a repeated
    /// symbol. Blank cells leave the attribute absent.
    pub fn from_raw(raw: &RawTable, symbol_column: &str) -> Result<Self> {
        let symbol_index =
            raw.column_index(symbol_column)
                .ok_or_else(|| RiskError::MissingColumn {
                    column: symbol_column.to_string(),
                    path: "<memory>".to_string(),
                })?;

        let mut table = Self::default();
        for row in 0..raw.rows.len() {
            let Some(symbol) = raw.text(row, symbol_index).map(str::to_string) else {
                continue;
            };
            if table.records.contains_key(&symbol) {
                tracing::debug!(%symbol, "Duplicate reference row ignored");
                continue;
            }

            let mut record = StockRecord::new(symbol.clone());
            for (column, header) in raw.headers.iter().enumerate() {
                if column == symbol_index || header.is_empty() {
                    continue;
                }
                if let Some(value) = raw.value(row, column) {
                    record.set(header.clone(), value);
                }
            }

            table.symbols.push(symbol.clone());
            table.records.insert(symbol, record);
        }

        Ok(table)
    }

    /// Distinct symbols in file order
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// A fresh copy of the record for `symbol`
    pub fn record(&self, symbol: &str) -> Option<StockRecord> {
        self.records.get(symbol).cloned()
    }

    /// Look up every requested symbol, keeping request order
    pub fn select(&self, symbols: &[String]) -> Selection {
        let mut selection = Selection::default();
        for symbol in symbols {
            match self.record(symbol) {
                Some(record) => selection.records.push(record),
                None => {
                    tracing::warn!(%symbol, "No data found for stock symbol");
                    selection.missing.push(symbol.clone());
                }
            }
        }
        selection
    }
}
