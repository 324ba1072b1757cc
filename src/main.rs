use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tokio::runtime::Runtime;

use level_scope::analysis::{LevelInputs, LevelReport, analyze_all, build_summary};
use level_scope::config::IndicatorTable;
use level_scope::data::{
    JsonObservationFile, ObservationSource, fetch_bar_series, fetch_many, write_snapshot_async,
};
use level_scope::models::{MostRecentIntervals, OhlcvTimeSeries};
use level_scope::{Cli, Command, format_ticker, ui};

#[derive(Serialize)]
struct ScanEntry {
    ticker: String,
    report: Option<LevelReport>,
    error: Option<String>,
}

/// Trims the series to its last `days` days; 0 or less keeps every bar.
fn apply_lookback(series: OhlcvTimeSeries, days: i64) -> OhlcvTimeSeries {
    if days <= 0 {
        return series;
    }
    series.most_recent(MostRecentIntervals::Duration(chrono::Duration::days(days)))
}

fn main() -> Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    let rt = Runtime::new().context("Failed to create Tokio runtime")?;

    match args.command {
        Command::Levels {
            ticker,
            bars,
            strike,
            airbag,
            knockout,
            prefer_json,
            write_snapshot,
        } => {
            let ticker = format_ticker(&ticker);
            let (series, signature) =
                rt.block_on(fetch_bar_series(&bars.data_dir, &ticker, prefer_json))?;
            log::info!("{}: {} bars loaded from {}", ticker, series.len(), signature);

            let window = apply_lookback(series.clone(), bars.days);
            let inputs = LevelInputs {
                strike_pct: strike,
                airbag_pct: airbag,
                knockout_pct: knockout,
            };
            let report = LevelReport::build(&window, &inputs, bars.bins)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", ui::render_level_report(&report));
            }

            if write_snapshot {
                if let Err(e) =
                    rt.block_on(write_snapshot_async(bars.data_dir.clone(), signature, series))
                {
                    log::error!("Failed to write snapshot: {:#}", e);
                }
            }
        }
        Command::Scan { tickers, bars } => {
            let tickers: Vec<String> = tickers.iter().map(|t| format_ticker(t)).collect();
            let loaded = rt.block_on(fetch_many(bars.data_dir.clone(), &tickers, false));

            let mut entries = Vec::new();
            let mut series = Vec::new();
            for (ticker, result) in loaded {
                match result {
                    Ok((s, _)) => series.push(apply_lookback(s, bars.days)),
                    Err(e) => {
                        log::warn!("{:#}", e);
                        entries.push(ScanEntry {
                            ticker,
                            report: None,
                            error: Some(format!("{:#}", e)),
                        });
                    }
                }
            }

            let results = analyze_all(&series, &LevelInputs::default(), bars.bins);
            if !args.json {
                for entry in &entries {
                    println!("{:<10} error: {}", entry.ticker, entry.error.as_deref().unwrap_or_default());
                }
                for (ticker, result) in &results {
                    println!("{}", ui::render_scan_line(ticker, result));
                }
            } else {
                entries.extend(results.into_iter().map(|(ticker, result)| match result {
                    Ok(report) => ScanEntry {
                        ticker,
                        report: Some(report),
                        error: None,
                    },
                    Err(e) => ScanEntry {
                        ticker,
                        report: None,
                        error: Some(e.to_string()),
                    },
                }));
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
        }
        Command::Summary {
            observations,
            indicators,
        } => {
            let table = match indicators {
                Some(path) => IndicatorTable::load_from_path(&path)?,
                None => IndicatorTable::us_macro(),
            };
            let source = JsonObservationFile { path: observations };
            let observations = rt.block_on(source.load_observations())?;
            let summary = build_summary(&observations, &table);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", ui::render_summary(&summary));
            }
        }
    }

    Ok(())
}
