//! Portfolio risk scoring
//!
//! Every stock is evaluated against every parameter rule of every category,
//! in declaration order. Each evaluation yields exactly one
//! [`ClassificationResult`]; scores are derived from those results alone.

use serde::{Deserialize, Serialize};

use crate::classify::{RiskColor, RiskLevel, classify};
use crate::record::{FieldValue, StockRecord};
use crate::rules::RiskRules;

/// One evaluated (stock, category, parameter) triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub symbol: String,
    pub category: String,
    pub parameter: String,
    /// Raw value as found on the record; `Unavailable` when absent
    pub value: FieldValue,
    pub level: RiskLevel,
    pub color: RiskColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockScore {
    pub symbol: String,
    pub score: i64,
}

/// Per-level tally for one stock within one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub good: usize,
    pub neutral: usize,
    pub bad: usize,
    pub unavailable: usize,
}

impl LevelCounts {
    fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Good => self.good += 1,
            RiskLevel::Neutral => self.neutral += 1,
            RiskLevel::Bad => self.bad += 1,
            RiskLevel::Unavailable => self.unavailable += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.good + self.neutral + self.bad + self.unavailable
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub symbol: String,
    pub category: String,
    pub counts: LevelCounts,
}

/// Everything one scoring pass produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub results: Vec<ClassificationResult>,
    /// In category declaration order; every category is listed
    pub category_scores: Vec<CategoryScore>,
    /// In stock input order
    pub stock_scores: Vec<StockScore>,
    pub portfolio_score: i64,
    pub summaries: Vec<CategorySummary>,
}

impl ScoreReport {
    pub fn category_score(&self, category: &str) -> Option<i64> {
        self.category_scores
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.score)
    }

    pub fn stock_score(&self, symbol: &str) -> Option<i64> {
        self.stock_scores
            .iter()
            .find(|s| s.symbol == symbol)
            .map(|s| s.score)
    }

    pub fn results_for_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ClassificationResult> + 'a {
        self.results.iter().filter(move |r| r.category == category)
    }

    pub fn results_for_stock<'a>(
        &'a self,
        symbol: &'a str,
    ) -> impl Iterator<Item = &'a ClassificationResult> + 'a {
        self.results.iter().filter(move |r| r.symbol == symbol)
    }

    pub fn has_unavailable(&self) -> bool {
        self.results.iter().any(|r| r.level == RiskLevel::Unavailable)
    }
}

/// Score a batch of stock records against the rules
pub fn score(stocks: &[StockRecord], rules: &RiskRules) -> ScoreReport {
    let categories = rules.categories();

    let mut results = Vec::with_capacity(stocks.len() * rules.parameter_count());
    let mut category_totals = vec![0_i64; categories.len()];
    let mut stock_scores = Vec::with_capacity(stocks.len());
    let mut summaries = Vec::with_capacity(stocks.len() * categories.len());
    let mut portfolio_score = 0_i64;

    for stock in stocks {
        let mut stock_total = 0_i64;

        for (index, category) in categories.iter().enumerate() {
            let mut counts = LevelCounts::default();

            for rule in &category.parameters {
                let (value, level) = match stock.get(&rule.name) {
                    Some(value) => (value.clone(), classify(value, rule.low, rule.high)),
                    None => (FieldValue::Unavailable, RiskLevel::Unavailable),
                };

                let delta = level.score();
                stock_total += delta;
                category_totals[index] += delta;
                portfolio_score += delta;
                counts.record(level);

                results.push(ClassificationResult {
                    symbol: stock.symbol.clone(),
                    category: category.name.clone(),
                    parameter: rule.name.clone(),
                    value,
                    level,
                    color: level.color(),
                });
            }

            summaries.push(CategorySummary {
                symbol: stock.symbol.clone(),
                category: category.name.clone(),
                counts,
            });
        }

        tracing::debug!(symbol = %stock.symbol, score = stock_total, "Scored stock");
        stock_scores.push(StockScore {
            symbol: stock.symbol.clone(),
            score: stock_total,
        });
    }

    let category_scores = categories
        .iter()
        .zip(category_totals)
        .map(|(category, score)| CategoryScore {
            category: category.name.clone(),
            score,
        })
        .collect();

    ScoreReport {
        results,
        category_scores,
        stock_scores,
        portfolio_score,
        summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ParameterRule, RiskCategory};

    fn market_rules() -> RiskRules {
        RiskRules::new(vec![RiskCategory::new(
            "Market Risk",
            vec![
                ParameterRule::new("Beta", 0.5, 1.5),
                ParameterRule::new("Volatility", 0.1, 0.2),
            ],
        )])
        .unwrap()
    }

    fn complete_record(symbol: &str, seed: f64) -> StockRecord {
        let mut record = StockRecord::new(symbol);
        for category in RiskRules::default().categories() {
            for rule in &category.parameters {
                let value = if rule.high.is_finite() {
                    rule.low + (rule.high - rule.low) * seed
                } else {
                    rule.low * (1.0 + seed)
                };
                record.set(rule.name.clone(), FieldValue::Number(value));
            }
        }
        record
    }

    #[test]
    fn test_neutral_and_good_scenario() {
        let stock = StockRecord::new("ABC")
            .with_value("Beta", 1.0)
            .with_value("Volatility", 0.05);

        let report = score(&[stock], &market_rules());

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].parameter, "Beta");
        assert_eq!(report.results[0].level, RiskLevel::Neutral);
        assert_eq!(report.results[0].color, RiskColor::Yellow);
        assert_eq!(report.results[1].parameter, "Volatility");
        assert_eq!(report.results[1].level, RiskLevel::Good);
        assert_eq!(report.results[1].color, RiskColor::Green);

        assert_eq!(report.category_score("Market Risk"), Some(1));
        assert_eq!(report.stock_score("ABC"), Some(1));
        assert_eq!(report.portfolio_score, 1);
    }

    #[test]
    fn test_missing_value_is_unavailable_and_unscored() {
        let stock = StockRecord::new("DEF").with_value("Volume", 2_000_000.0);
        let report = score(&[stock], &RiskRules::default());

        let market_cap = report
            .results
            .iter()
            .find(|r| r.parameter == "marketCap")
            .unwrap();
        assert_eq!(market_cap.level, RiskLevel::Unavailable);
        assert_eq!(market_cap.color, RiskColor::Black);
        assert_eq!(market_cap.value, FieldValue::Unavailable);

        // Volume is the only value present and sits inside its band
        assert_eq!(report.portfolio_score, 0);
        assert_eq!(report.stock_score("DEF"), Some(0));
        assert!(report.has_unavailable());
    }

    #[test]
    fn test_one_result_per_rule_per_stock() {
        let rules = RiskRules::default();
        let stocks = vec![
            StockRecord::new("EMPTY"),
            complete_record("FULL", 0.5),
            StockRecord::new("TEXT").with_value("Beta", "n/a"),
        ];

        let report = score(&stocks, &rules);
        assert_eq!(report.results.len(), stocks.len() * rules.parameter_count());
        assert_eq!(report.summaries.len(), stocks.len() * rules.categories().len());
        for summary in &report.summaries {
            let category = rules.category(&summary.category).unwrap();
            assert_eq!(summary.counts.total(), category.parameters.len());
        }
    }

    #[test]
    fn test_result_ordering() {
        let rules = RiskRules::default();
        let stocks = vec![StockRecord::new("B"), StockRecord::new("A")];
        let report = score(&stocks, &rules);

        let expected: Vec<(String, String, String)> = ["B", "A"]
            .iter()
            .flat_map(|symbol| {
                rules.categories().iter().flat_map(move |category| {
                    category.parameters.iter().map(move |rule| {
                        ((*symbol).to_string(), category.name.clone(), rule.name.clone())
                    })
                })
            })
            .collect();

        let actual: Vec<(String, String, String)> = report
            .results
            .iter()
            .map(|r| (r.symbol.clone(), r.category.clone(), r.parameter.clone()))
            .collect();
        assert_eq!(actual, expected);

        let order: Vec<_> = report.stock_scores.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(order, ["B", "A"]);
    }

    #[test]
    fn test_sum_law_with_complete_data() {
        let rules = RiskRules::default();
        let stocks = vec![
            complete_record("LOW", -1.0),
            complete_record("MID", 0.5),
            complete_record("HIGH", 3.0),
        ];
        let report = score(&stocks, &rules);

        assert!(!report.has_unavailable());
        let by_category: i64 = report.category_scores.iter().map(|c| c.score).sum();
        let by_stock: i64 = report.stock_scores.iter().map(|s| s.score).sum();
        assert_eq!(report.portfolio_score, by_category);
        assert_eq!(report.portfolio_score, by_stock);
        assert!(report.stock_score("LOW").unwrap() > 0);
        assert_eq!(report.stock_score("MID"), Some(0));
        assert!(report.stock_score("HIGH").unwrap() < 0);
    }

    #[test]
    fn test_idempotent() {
        let rules = RiskRules::default();
        let stocks = vec![complete_record("X", 0.2), StockRecord::new("Y").with_value("Beta", 3.0)];
        assert_eq!(score(&stocks, &rules), score(&stocks, &rules));
    }

    #[test]
    fn test_every_category_listed_even_without_stocks() {
        let report = score(&[], &RiskRules::default());
        assert!(report.results.is_empty());
        assert_eq!(report.category_scores.len(), 3);
        assert!(report.category_scores.iter().all(|c| c.score == 0));
        assert_eq!(report.portfolio_score, 0);
    }
}
