//! Format-agnostic table reading

use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

use crate::error::{Result, RiskError};
use crate::record::FieldValue;

/// Supported on-disk table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Spreadsheet,
}

impl TableFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Spreadsheet),
            _ => Err(RiskError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Header row plus data rows, each cell as trimmed source text
///
/// A blank cell is an empty string. Parsing into [`FieldValue`] happens on
/// read through [`RawTable::value`], so the text stays available verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text at (row, column); blank cells and short rows read as `None`
    pub fn text(&self, row: usize, column: usize) -> Option<&str> {
        let text = self.rows.get(row)?.get(column)?.as_str();
        (!text.is_empty()).then_some(text)
    }

    /// Cell parsed as a field value
    pub fn value(&self, row: usize, column: usize) -> Option<FieldValue> {
        self.text(row, column).and_then(FieldValue::from_cell)
    }
}

/// Read a table from disk, choosing the reader by extension
pub fn load_table(path: impl AsRef<Path>) -> Result<RawTable> {
    let path = path.as_ref();
    let table = match TableFormat::from_path(path)? {
        TableFormat::Csv => read_csv(path)?,
        TableFormat::Spreadsheet => read_spreadsheet(path)?,
    };

    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "Read table"
    );
    Ok(table)
}

fn read_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

fn read_spreadsheet(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RiskError::EmptyTable {
            path: path.display().to_string(),
        })??;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .ok_or_else(|| RiskError::EmptyTable {
            path: path.display().to_string(),
        })?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let rows = rows
        .map(|row| row.iter().map(spreadsheet_cell).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

/// Error cells read as blank
fn spreadsheet_cell(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;
    use std::io::Write;

    #[test]
    fn test_format_detection() {
        assert_eq!(TableFormat::from_path(Path::new("a.CSV")).unwrap(), TableFormat::Csv);
        assert_eq!(
            TableFormat::from_path(Path::new("data/nov2024.xlsx")).unwrap(),
            TableFormat::Spreadsheet
        );
        assert!(matches!(
            TableFormat::from_path(Path::new("notes.txt")),
            Err(RiskError::UnsupportedFormat(_))
        ));
        assert!(TableFormat::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_read_csv_with_blank_and_short_rows() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Stock Symbol, Beta ,Sector").unwrap();
        writeln!(file, "ABC,1.2,Energy").unwrap();
        writeln!(file, "DEF,,Banks").unwrap();
        writeln!(file, "GHI").unwrap();
        file.flush().unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.headers, ["Stock Symbol", "Beta", "Sector"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.value(0, 1), Some(FieldValue::Number(1.2)));
        assert_eq!(table.value(0, 2), Some(FieldValue::Text("Energy".to_string())));
        assert_eq!(table.text(1, 1), None);
        assert_eq!(table.value(1, 1), None);
        assert_eq!(table.text(2, 2), None);
        assert_eq!(table.column_index("Beta"), Some(1));
    }

    #[test]
    fn test_csv_cells_kept_as_written() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Stock Symbol,Sharpe,Code,Scaled").unwrap();
        writeln!(file, " 0700 ,1.50,007,2.0e1").unwrap();
        file.flush().unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.rows[0], ["0700", "1.50", "007", "2.0e1"]);
        assert_eq!(table.value(0, 1), Some(FieldValue::Number(1.5)));
        assert_eq!(table.value(0, 3), Some(FieldValue::Number(20.0)));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_table("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, RiskError::Csv(_)));
    }

    #[test]
    fn test_spreadsheet_cells() {
        assert_eq!(spreadsheet_cell(&Data::Empty), "");
        assert_eq!(spreadsheet_cell(&Data::Error(CellErrorType::Div0)), "");
        assert_eq!(spreadsheet_cell(&Data::Int(5)), "5");
        assert_eq!(spreadsheet_cell(&Data::Float(0.4)), "0.4");
        assert_eq!(spreadsheet_cell(&Data::String(" 0700 ".to_string())), "0700");
    }
}
