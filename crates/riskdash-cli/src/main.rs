//! Command-line risk dashboard

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use riskdash_stock::interface::{FormatterFactory, GaugeStyle};
use riskdash_stock::{ReferenceTable, RiskDashboard, RiskRules, YahooFinanceClient};
use tracing::info;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    riskdash_utils::init_tracing();

    let output = run(Cli::parse()).await?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Execute one command and return its rendered output
///
/// Each command loads only the data it prints.
async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = cli.app_config().context("invalid configuration")?;

    match cli.command {
        Command::Score(args) => {
            info!(
                reference = %config.reference_path.display(),
                metrics = %config.metrics_path.display(),
                "Starting riskdash"
            );

            // Both tables must load before anything is scored
            let dashboard =
                RiskDashboard::load(&config).context("failed to load reference data")?;
            let dashboard = if args.offline {
                info!("Offline mode, scoring reference values");
                dashboard
            } else {
                dashboard.with_quote_source(Arc::new(YahooFinanceClient::new()))
            };

            let symbols = if args.all {
                dashboard.reference().symbols().to_vec()
            } else {
                args.symbols.clone()
            };

            let report = dashboard.evaluate(&symbols).await;
            let formatter =
                FormatterFactory::create(args.output.output_format(), args.gauge_style(&config));
            Ok(formatter.format_report(&report)?)
        }
        Command::Symbols(args) => {
            let reference = ReferenceTable::load(&config.reference_path, &config.symbol_column)
                .context("failed to load reference data")?;
            let formatter = FormatterFactory::create(args.output_format(), GaugeStyle::default());
            Ok(formatter.format_symbols(reference.symbols())?)
        }
        Command::Rules(args) => {
            let rules = RiskRules::load(config.rules_path.as_deref())
                .context("failed to load risk rules")?;
            let formatter = FormatterFactory::create(args.output_format(), GaugeStyle::default());
            Ok(formatter.format_rules(&rules)?)
        }
    }
}
