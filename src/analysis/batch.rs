use rayon::prelude::*;

use crate::analysis::levels::{LevelInputs, LevelReport};
use crate::config::DEBUG_FLAGS;
use crate::error::EngineError;
use crate::models::OhlcvTimeSeries;

pub type TickerResult = (String, Result<LevelReport, EngineError>);

/// Builds a level report per series in parallel. Each ticker keeps its own result so
/// one bad series doesn't sink the batch. Output order matches input order.
pub fn analyze_all(
    series: &[OhlcvTimeSeries],
    inputs: &LevelInputs,
    bin_count: usize,
) -> Vec<TickerResult> {
    let start_time = DEBUG_FLAGS
        .print_batch_timings
        .then(std::time::Instant::now);

    let results: Vec<TickerResult> = series
        .par_iter()
        .map(|s| (s.ticker.clone(), LevelReport::build(s, inputs, bin_count)))
        .collect();

    for (ticker, result) in &results {
        if let Err(e) = result {
            log::error!("{}: level analysis failed: {}", ticker, e);
        }
    }

    if let Some(start) = start_time {
        log::info!(
            "Analysed {} series in {:.3}s",
            results.len(),
            start.elapsed().as_secs_f64()
        );
    }

    results
}
