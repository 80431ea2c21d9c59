//! End-to-end dashboard runs over on-disk CSV fixtures

use std::fs;
use std::path::Path;
use std::sync::Arc;

use riskdash_stock::{
    DataFreshness, FieldValue, LiveQuote, QuoteMap, QuoteSource, RiskColor, RiskDashboard,
    RiskError, RiskLevel,
};
use tempfile::TempDir;

const REFERENCE_CSV: &str = "\
Stock Symbol,Volatility,Beta,Correlation with ^NSEI,debtToEquity,Volume,Average Volume,marketCap
ABC,0.05,1.0,,,,,
DEF,0.15,0.4,0.9,2.0,1500000,800000,
GHI,0.3,2.0,1.2,0.1,200,100,50000000000
";

const METRICS_CSV: &str = "\
Stock Symbol,Sharpe Ratio,Sector
GHI,0.4,Energy
ABC,1.3,Banking
JKL,0.9,IT
";

struct Fixture {
    _dir: TempDir,
    config: riskdash_utils::Config,
}

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let config = riskdash_utils::Config {
        reference_path: write(dir.path(), "reference.csv", REFERENCE_CSV),
        metrics_path: write(dir.path(), "metrics.csv", METRICS_CSV),
        ..Default::default()
    };
    Fixture { _dir: dir, config }
}

fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
async fn scores_selected_stocks_from_files() {
    let fixture = fixture();
    let dashboard = RiskDashboard::load(&fixture.config).unwrap();
    assert_eq!(dashboard.reference().symbols(), ["ABC", "DEF", "GHI"]);

    let report = dashboard.evaluate(&symbols(&["ABC", "XYZ", "DEF"])).await;

    // unknown symbol is reported and produces nothing
    assert_eq!(report.skipped, ["XYZ"]);
    assert!(report.score.results_for_stock("XYZ").next().is_none());
    assert!(report.score.stock_score("XYZ").is_none());

    // every rule evaluated for each known stock
    let rules = dashboard.rules().parameter_count();
    assert_eq!(report.score.results.len(), 2 * rules);

    // ABC: Volatility good, Beta neutral, nothing else present
    assert_eq!(report.score.stock_score("ABC"), Some(1));

    // DEF: marketCap blank -> unavailable and black
    let market_cap = report
        .score
        .results_for_stock("DEF")
        .find(|r| r.parameter == "marketCap")
        .unwrap();
    assert_eq!(market_cap.level, RiskLevel::Unavailable);
    assert_eq!(market_cap.color, RiskColor::Black);
    assert_eq!(market_cap.value, FieldValue::Unavailable);

    // metrics rows are filtered but keep file order
    assert_eq!(report.metrics.rows.len(), 1);
    assert_eq!(report.metrics.rows[0][0], "ABC");
    assert_eq!(report.freshness, DataFreshness::Static);
}

#[tokio::test]
async fn sum_law_holds_for_complete_rows() {
    let dir = tempfile::tempdir().unwrap();
    let rules_path = write(
        dir.path(),
        "rules.toml",
        r#"
        [[category]]
        name = "Market Risk"
        [[category.parameter]]
        name = "Beta"
        low = 0.5
        high = 1.5

        [[category]]
        name = "Liquidity Risk"
        [[category.parameter]]
        name = "marketCap"
        low = 10_000_000_000
        high = inf
        "#,
    );
    let config = riskdash_utils::Config {
        reference_path: write(
            dir.path(),
            "reference.csv",
            "Stock Symbol,Beta,marketCap\nA,0.1,1\nB,3.0,20000000000\nC,1.0,5\n",
        ),
        metrics_path: write(dir.path(), "metrics.csv", "Stock Symbol\nA\n"),
        rules_path: Some(rules_path),
        ..Default::default()
    };

    let dashboard = RiskDashboard::load(&config).unwrap();
    let report = dashboard.evaluate(&symbols(&["A", "B", "C"])).await;
    let score = &report.score;

    assert!(!score.has_unavailable());
    let by_category: i64 = score.category_scores.iter().map(|c| c.score).sum();
    let by_stock: i64 = score.stock_scores.iter().map(|s| s.score).sum();
    assert_eq!(score.portfolio_score, by_category);
    assert_eq!(score.portfolio_score, by_stock);

    assert_eq!(score.stock_score("A"), Some(2));
    assert_eq!(score.stock_score("B"), Some(-1));
    assert_eq!(score.stock_score("C"), Some(1));
    assert_eq!(score.category_score("Market Risk"), Some(0));
    assert_eq!(score.category_score("Liquidity Risk"), Some(2));
}

struct FixedQuotes(QuoteMap);

#[async_trait::async_trait]
impl QuoteSource for FixedQuotes {
    async fn latest_quotes(&self, _symbols: &[String]) -> riskdash_stock::Result<QuoteMap> {
        Ok(self.0.clone())
    }
}

#[test]
fn live_quotes_replace_static_volume() {
    let fixture = fixture();
    let mut quotes = QuoteMap::new();
    quotes.insert(
        "GHI".to_string(),
        LiveQuote {
            symbol: "GHI".to_string(),
            timestamp: chrono::Utc::now(),
            price: 2875.5,
            volume: 4_000_000,
        },
    );

    let dashboard = RiskDashboard::load(&fixture.config)
        .unwrap()
        .with_quote_source(Arc::new(FixedQuotes(quotes)));
    let report = tokio_test::block_on(dashboard.evaluate(&symbols(&["GHI", "DEF"])));

    let volume = |symbol: &str| {
        report
            .score
            .results_for_stock(symbol)
            .find(|r| r.parameter == "Volume")
            .cloned()
            .unwrap()
    };
    assert_eq!(volume("GHI").value, FieldValue::Number(4_000_000.0));
    assert_eq!(volume("GHI").level, RiskLevel::Neutral);
    assert_eq!(volume("DEF").level, RiskLevel::Unavailable);
    assert_eq!(report.live_quotes, 1);
}

#[test]
fn load_failures_are_fatal() {
    let fixture = fixture();

    let missing_file = riskdash_utils::Config {
        reference_path: "/no/such/reference.csv".into(),
        ..fixture.config.clone()
    };
    assert!(RiskDashboard::load(&missing_file).is_err());

    let dir = tempfile::tempdir().unwrap();
    let wrong_column = riskdash_utils::Config {
        reference_path: write(dir.path(), "ref.csv", "Ticker,Beta\nABC,1.0\n"),
        ..fixture.config.clone()
    };
    match RiskDashboard::load(&wrong_column) {
        Err(RiskError::MissingColumn { column, .. }) => assert_eq!(column, "Stock Symbol"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("load should fail without the symbol column"),
    }

    let unsupported = riskdash_utils::Config {
        metrics_path: write(dir.path(), "metrics.json", "{}"),
        ..fixture.config.clone()
    };
    assert!(matches!(
        RiskDashboard::load(&unsupported),
        Err(RiskError::UnsupportedFormat(_))
    ));
}
