//! Report formatting for terminal and machine consumers

use serde_json::{Value, json};

use super::chart::render_score_chart;
use super::gauge::{GaugeStyle, category_gauges};
use super::tables::{metrics_table, portfolio_table, results_table, rules_table, summary_table};
use crate::engine::DashboardReport;
use crate::error::Result;
use crate::rules::RiskRules;

/// Output flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json { pretty: bool },
}

pub trait Formatter: Send + Sync {
    fn format_report(&self, report: &DashboardReport) -> Result<String>;
    fn format_symbols(&self, symbols: &[String]) -> Result<String>;
    fn format_rules(&self, rules: &RiskRules) -> Result<String>;
}

/// Dashboard sections as gauges, a bar chart and tables
pub struct TableFormatter {
    gauge: GaugeStyle,
    gauge_width: usize,
}

impl TableFormatter {
    pub fn new(gauge: GaugeStyle) -> Self {
        Self {
            gauge,
            gauge_width: 20,
        }
    }
}

impl Formatter for TableFormatter {
    fn format_report(&self, report: &DashboardReport) -> Result<String> {
        let score = &report.score;
        let mut output = String::from("Real-Time Risk Management Dashboard\n");

        output.push_str(&format!("Selected: {}\n", report.selected.join(", ")));
        output.push_str(&format!(
            "Live quotes: {} of {} ({:?})\n",
            report.live_quotes,
            score.stock_scores.len(),
            report.freshness
        ));
        if !report.skipped.is_empty() {
            output.push_str(&format!("No data found for: {}\n", report.skipped.join(", ")));
        }

        output.push_str("\nRisk Category Overview\n");
        for gauge in category_gauges(score, &self.gauge) {
            output.push_str(&gauge.render(&self.gauge, self.gauge_width));
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&render_score_chart(
            "Investment Scores for Selected Stocks",
            &score.stock_scores,
        ));
        output.push_str(&format!("\nTotal Portfolio Score\n{}\n", portfolio_table(score)));

        output.push_str("\nSummary\n");
        output.push_str(&format!("Total Portfolio Score: {}\n", score.portfolio_score));
        for category in &score.category_scores {
            output.push_str(&format!("{}: {}\n", category.category, category.score));
        }
        output.push_str(&format!("{}\n", summary_table(score)));

        for category in &score.category_scores {
            let rows: Vec<_> = score.results_for_category(&category.category).collect();
            if rows.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "\n{} Details\n{}\n",
                category.category,
                results_table(rows)
            ));
        }

        output.push_str("\nAdditional Stock Metrics\n");
        if report.metrics.is_empty() {
            output.push_str("(no metrics rows for the selection)\n");
        } else {
            output.push_str(&format!("{}\n", metrics_table(&report.metrics)));
        }

        Ok(output)
    }

    fn format_symbols(&self, symbols: &[String]) -> Result<String> {
        let mut output = String::new();
        for symbol in symbols {
            output.push_str(symbol);
            output.push('\n');
        }
        Ok(output)
    }

    fn format_rules(&self, rules: &RiskRules) -> Result<String> {
        Ok(rules_table(rules).to_string())
    }
}

/// Whole report as one JSON document
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn encode(&self, value: &Value) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

/// JSON has no infinity, so open bounds are written as the string "inf"
fn bound(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else if value > 0.0 {
        json!("inf")
    } else {
        json!("-inf")
    }
}

impl Formatter for JsonFormatter {
    fn format_report(&self, report: &DashboardReport) -> Result<String> {
        self.encode(&serde_json::to_value(report)?)
    }

    fn format_symbols(&self, symbols: &[String]) -> Result<String> {
        self.encode(&json!({ "symbols": symbols }))
    }

    fn format_rules(&self, rules: &RiskRules) -> Result<String> {
        let categories: Vec<Value> = rules
            .categories()
            .iter()
            .map(|category| {
                let parameters: Vec<Value> = category
                    .parameters
                    .iter()
                    .map(|rule| {
                        json!({
                            "name": rule.name,
                            "low": bound(rule.low),
                            "high": bound(rule.high),
                        })
                    })
                    .collect();
                json!({ "name": category.name, "parameters": parameters })
            })
            .collect();
        self.encode(&json!({ "categories": categories }))
    }
}

pub struct FormatterFactory;

impl FormatterFactory {
    pub fn create(format: OutputFormat, gauge: GaugeStyle) -> Box<dyn Formatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::new(gauge)),
            OutputFormat::Json { pretty } => Box::new(JsonFormatter::new(pretty)),
        }
    }
}
