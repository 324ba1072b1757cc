#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types
pub use analysis::{LevelInputs, LevelReport, analyze_all, build_summary};
pub use data::{fetch_bar_series, fetch_many, write_snapshot_async};
pub use domain::{IndicatorObservation, PriceBar, format_ticker};
pub use error::EngineError;
pub use models::{IndicatorSummary, OhlcvTimeSeries, VolumeProfile};

// CLI argument parsing
use clap::{Args, Parser, Subcommand};

use crate::config::{ANALYSIS, PERSISTENCE};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON instead of text tables
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Price levels, EMAs and volume profile for one ticker
    Levels {
        ticker: String,
        #[command(flatten)]
        bars: BarArgs,
        /// Strike level as a percentage of the last close (0 = not set)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        strike: f64,
        /// Airbag level as a percentage of the last close (0 = not set)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        airbag: f64,
        /// Knock-out level as a percentage of the last close (0 = not set)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        knockout: f64,
        /// Read the JSON bars file before any snapshot
        #[arg(long, default_value_t = false)]
        prefer_json: bool,
        /// Save the loaded bars as a snapshot for the next run
        #[arg(long, default_value_t = false)]
        write_snapshot: bool,
    },
    /// One-line level digest for several tickers, loaded and analysed in parallel
    Scan {
        #[arg(required = true)]
        tickers: Vec<String>,
        #[command(flatten)]
        bars: BarArgs,
    },
    /// Actual-vs-forecast summary of scraped indicator releases
    Summary {
        /// JSON array of observations
        observations: PathBuf,
        /// JSON indicator table replacing the built-in US macro table
        #[arg(long)]
        indicators: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BarArgs {
    /// Directory holding `<TICKER>.json` bar files and the snapshot directory
    #[arg(long, default_value = PERSISTENCE.bars_directory)]
    pub data_dir: PathBuf,
    /// Number of volume-profile bins
    #[arg(long, default_value_t = ANALYSIS.profile.bin_count)]
    pub bins: usize,
    /// Only use bars from the last N days (0 = all bars)
    #[arg(long, default_value_t = ANALYSIS.lookback.default_days)]
    pub days: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_levels_arguments() {
        let cli = Cli::try_parse_from([
            "level-scope",
            "levels",
            "700",
            "--strike",
            "95",
            "--knockout",
            "-10",
            "--bins",
            "20",
        ])
        .unwrap();
        match cli.command {
            Command::Levels {
                ticker,
                bars,
                strike,
                airbag,
                knockout,
                prefer_json,
                write_snapshot,
            } => {
                assert_eq!(ticker, "700");
                assert_eq!(strike, 95.0);
                assert_eq!(airbag, 0.0);
                assert_eq!(knockout, -10.0);
                assert_eq!(bars.bins, 20);
                assert_eq!(bars.days, ANALYSIS.lookback.default_days);
                assert_eq!(bars.data_dir, PathBuf::from(PERSISTENCE.bars_directory));
                assert!(!prefer_json && !write_snapshot);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_scan_requires_tickers() {
        assert!(Cli::try_parse_from(["level-scope", "scan"]).is_err());
        let cli = Cli::try_parse_from(["level-scope", "--json", "scan", "AAPL", "MSFT"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Scan { ref tickers, .. } if tickers.len() == 2));
    }
}
