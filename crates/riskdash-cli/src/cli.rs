//! CLI argument definitions for riskdash.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `score` | Score selected stocks and render the dashboard |
//! | `symbols` | List symbols available in the reference table |
//! | `rules` | Print the active threshold table |
//!
//! # Examples
//!
//! ```bash
//! riskdash --reference fundamentals.xlsx --metrics metrics.xlsx score TCS.NS INFY.NS
//! riskdash score --all --offline --format json --pretty
//! riskdash rules --rules thresholds.toml
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use riskdash_stock::interface::{GaugeStyle, OutputFormat};
use riskdash_utils::{Config, GaugeVariant};

#[derive(Debug, Parser)]
#[command(
    name = "riskdash",
    version,
    about = "Threshold-based risk dashboard for stock portfolios"
)]
pub struct Cli {
    /// Fundamentals table (.csv, .xlsx, .xls, .ods)
    #[arg(long, global = true)]
    pub reference: Option<PathBuf>,

    /// Additional metrics table shown below the scores
    #[arg(long, global = true)]
    pub metrics: Option<PathBuf>,

    /// TOML threshold table replacing the built-in rules
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Column holding the ticker symbol
    #[arg(long, global = true)]
    pub symbol_column: Option<String>,

    /// Give up on the live quote fetch after this many seconds
    #[arg(long, global = true)]
    pub fetch_timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score stocks and render gauges, charts and tables
    Score(ScoreArgs),
    /// List selectable symbols
    Symbols(FormatArgs),
    /// Print the active threshold table
    Rules(FormatArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GaugeArg {
    Five,
    Ten,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl FormatArgs {
    pub fn output_format(&self) -> OutputFormat {
        match self.format {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json {
                pretty: self.pretty,
            },
        }
    }
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Symbols to score; the first reference symbol when omitted
    pub symbols: Vec<String>,

    /// Score every symbol in the reference table
    #[arg(long, conflicts_with = "symbols")]
    pub all: bool,

    /// Skip the live price/volume fetch and score reference values
    #[arg(long)]
    pub offline: bool,

    /// Gauge axis range
    #[arg(long, value_enum)]
    pub gauge: Option<GaugeArg>,

    /// Show each gauge's difference from this value
    #[arg(long, allow_negative_numbers = true)]
    pub delta_reference: Option<i64>,

    #[command(flatten)]
    pub output: FormatArgs,
}

impl ScoreArgs {
    pub fn gauge_style(&self, config: &Config) -> GaugeStyle {
        let variant = match self.gauge {
            Some(GaugeArg::Five) => GaugeVariant::Five,
            Some(GaugeArg::Ten) => GaugeVariant::Ten,
            None => config.gauge,
        };
        let style = GaugeStyle::from_variant(variant);
        match self.delta_reference {
            Some(reference) => style.with_delta_reference(reference),
            None => style,
        }
    }
}

impl Cli {
    /// Defaults, then environment, then flags
    pub fn app_config(&self) -> Result<Config, riskdash_utils::ConfigError> {
        let mut config = Config::default().with_env()?;
        if let Some(path) = &self.reference {
            config.reference_path.clone_from(path);
        }
        if let Some(path) = &self.metrics {
            config.metrics_path.clone_from(path);
        }
        if let Some(path) = &self.rules {
            config.rules_path = Some(path.clone());
        }
        if let Some(column) = &self.symbol_column {
            config.symbol_column.clone_from(column);
        }
        if let Some(secs) = self.fetch_timeout_secs {
            config.fetch_timeout_secs = Some(secs);
        }
        config.validate()?;
        Ok(config)
    }
}
