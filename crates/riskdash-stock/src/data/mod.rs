//! Static reference data loaded from CSV or spreadsheet files
//!
//! Two tables feed the dashboard:
//! - the reference table, one row per symbol with every scored parameter
//! - the metrics table, extra descriptive columns shown as-is

pub mod metrics;
pub mod reference;
pub mod table;

pub use metrics::{MetricsTable, MetricsView};
pub use reference::{ReferenceTable, Selection};
pub use table::{RawTable, TableFormat, load_table};
