//! Secondary metrics table, shown without scoring

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::table::{RawTable, load_table};
use crate::error::{Result, RiskError};

/// Metrics rows for the selected symbols, as display strings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricsView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl MetricsView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetricsTable {
    headers: Vec<String>,
    symbol_index: usize,
    rows: Vec<Vec<String>>,
}

impl MetricsTable {
    pub fn load(path: impl AsRef<Path>, symbol_column: &str) -> Result<Self> {
        let path = path.as_ref();
        let raw = load_table(path)?;
        let table = Self::from_raw(raw, symbol_column).ok_or_else(|| RiskError::MissingColumn {
            column: symbol_column.to_string(),
            path: path.display().to_string(),
        })?;

        tracing::info!(
            path = %path.display(),
            rows = table.rows.len(),
            "Loaded metrics data"
        );
        Ok(table)
    }

    /// Cells are kept exactly as read; returns `None` when the symbol column
    /// is missing
    pub fn from_raw(raw: RawTable, symbol_column: &str) -> Option<Self> {
        let symbol_index = raw.column_index(symbol_column)?;
        let width = raw.headers.len();
        let rows = raw
            .rows
            .into_iter()
            .map(|mut cells| {
                cells.resize(width, String::new());
                cells
            })
            .collect();

        Some(Self {
            headers: raw.headers,
            symbol_index,
            rows,
        })
    }

    /// Rows whose symbol is in `symbols`, in file order
    pub fn filter(&self, symbols: &[String]) -> MetricsView {
        let rows = self
            .rows
            .iter()
            .filter(|row| symbols.iter().any(|s| *s == row[self.symbol_index]))
            .cloned()
            .collect();

        MetricsView {
            headers: self.headers.clone(),
            rows,
        }
    }
}
