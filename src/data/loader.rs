// Bar loading for the CLI: picks the provider order per ticker, then loads

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::future::join_all;

use crate::config::{DEBUG_FLAGS, PERSISTENCE};
use crate::data::bars::json_version::JsonVersion;
use crate::data::bars::snapshot_version::{SnapshotVersion, check_snapshot_validity};
use crate::data::bars::{CreateBarSeries, get_bar_series_async};
use crate::models::OhlcvTimeSeries;

/// Provider order for one ticker. A usable snapshot makes both sources available and
/// `prefer_json` decides which goes first; otherwise only the JSON file is tried.
///
/// The snapshot is checked (and read) on the blocking pool, once; the snapshot
/// provider reuses what the check loaded.
pub async fn bar_providers(
    data_dir: &Path,
    ticker: &str,
    snapshot_max_age_secs: i64,
    prefer_json: bool,
) -> Vec<Box<dyn CreateBarSeries>> {
    let checked = {
        let data_dir = data_dir.to_path_buf();
        let ticker = ticker.to_string();
        tokio::task::spawn_blocking(move || {
            check_snapshot_validity(
                &data_dir,
                &ticker,
                snapshot_max_age_secs,
                PERSISTENCE.snapshot.version,
            )
        })
        .await
        .context("Snapshot check task panicked")
        .and_then(|result| result)
    };

    let json: Box<dyn CreateBarSeries> = Box::new(JsonVersion {
        data_dir: data_dir.to_path_buf(),
    });

    match (prefer_json, checked) {
        (prefer_json, Ok(snapshot)) => {
            let snapshot: Box<dyn CreateBarSeries> = Box::new(SnapshotVersion {
                data_dir: data_dir.to_path_buf(),
                preloaded: Some(snapshot.series),
            });
            if prefer_json {
                vec![json, snapshot] // JSON first
            } else {
                vec![snapshot, json] // snapshot first
            }
        }
        (_, Err(e)) => {
            log::info!("{}: no usable snapshot ({:#}), reading JSON", ticker, e);
            vec![json] // JSON only
        }
    }
}

pub async fn fetch_bar_series(
    data_dir: &Path,
    ticker: &str,
    prefer_json: bool,
) -> Result<(OhlcvTimeSeries, &'static str)> {
    let providers = bar_providers(
        data_dir,
        ticker,
        PERSISTENCE.snapshot.max_age_secs,
        prefer_json,
    )
    .await;
    let (series, signature) = get_bar_series_async(&providers, ticker).await?;

    if DEBUG_FLAGS.print_serde {
        log::info!(
            "{}: {} bars retrieved using: {}",
            ticker,
            series.len(),
            signature
        );
    }
    Ok((series, signature))
}

pub type FetchResult = (String, Result<(OhlcvTimeSeries, &'static str)>);

/// Loads several tickers concurrently. Results come back in `tickers` order.
pub async fn fetch_many(data_dir: PathBuf, tickers: &[String], prefer_json: bool) -> Vec<FetchResult> {
    let loads = tickers.iter().map(|ticker| {
        let data_dir = data_dir.clone();
        async move {
            let result = fetch_bar_series(&data_dir, ticker, prefer_json).await;
            (ticker.clone(), result)
        }
    });
    join_all(loads).await
}
