//! Tabular views built with comfy-table

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use crate::classify::RiskColor;
use crate::data::MetricsView;
use crate::rules::RiskRules;
use crate::scorer::{ClassificationResult, ScoreReport};

const RESULT_HEADERS: [&str; 6] = [
    "Stock Symbol",
    "Category",
    "Parameter",
    "Value",
    "Risk Level",
    "Color",
];

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn terminal_color(color: RiskColor) -> Color {
    match color {
        RiskColor::Green => Color::Green,
        RiskColor::Yellow => Color::Yellow,
        RiskColor::Red => Color::Red,
        // black text disappears on dark terminals
        RiskColor::Black => Color::DarkGrey,
    }
}

/// Classification rows, one per evaluated parameter
pub fn results_table<'a>(results: impl IntoIterator<Item = &'a ClassificationResult>) -> Table {
    let mut table = new_table();
    table.set_header(RESULT_HEADERS);
    for result in results {
        table.add_row(vec![
            Cell::new(&result.symbol),
            Cell::new(&result.category),
            Cell::new(&result.parameter),
            Cell::new(result.value.to_string()),
            Cell::new(result.level.label()).fg(terminal_color(result.color)),
            Cell::new(result.color.as_str()),
        ]);
    }
    table
}

pub fn portfolio_table(report: &ScoreReport) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Portfolio Score"]);
    table.add_row(vec![report.portfolio_score.to_string()]);
    table
}

/// Per-stock level counts per category
pub fn summary_table(report: &ScoreReport) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Stock Symbol",
        "Category",
        "Good",
        "Neutral",
        "Bad",
        "Data not available",
    ]);
    for summary in &report.summaries {
        table.add_row(vec![
            summary.symbol.clone(),
            summary.category.clone(),
            summary.counts.good.to_string(),
            summary.counts.neutral.to_string(),
            summary.counts.bad.to_string(),
            summary.counts.unavailable.to_string(),
        ]);
    }
    table
}

/// Secondary metrics, cells exactly as loaded
pub fn metrics_table(view: &MetricsView) -> Table {
    let mut table = new_table();
    table.set_header(view.headers.clone());
    for row in &view.rows {
        table.add_row(row.clone());
    }
    table
}

/// Active thresholds; an infinite bound prints as `inf`
pub fn rules_table(rules: &RiskRules) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Category", "Parameter", "Low", "High"]);
    for category in rules.categories() {
        for rule in &category.parameters {
            table.add_row(vec![
                category.name.clone(),
                rule.name.clone(),
                rule.low.to_string(),
                rule.high.to_string(),
            ]);
        }
    }
    table
}
