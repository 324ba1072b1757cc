//! Reference levels drawn on the stock chart: percentage-of-price markers, EMAs,
//! and the bundle that goes with one ticker's chart.

use serde::{Deserialize, Serialize};

use crate::analysis::volume_profile::compute_volume_profile;
use crate::config::ANALYSIS;
use crate::domain::{LevelKind, PriceLevel, PriceLevels};
use crate::error::EngineError;
use crate::models::{OhlcvTimeSeries, VolumeProfile};

/// Strike/airbag/knock-out prices as `pct` percent of `current_price`. A zero
/// percentage means "not set" and yields an absent level.
pub fn compute_price_levels(
    current_price: f64,
    strike_pct: f64,
    airbag_pct: f64,
    knockout_pct: f64,
) -> PriceLevels {
    PriceLevels {
        strike: PriceLevel::from_pct(LevelKind::Strike, current_price, strike_pct),
        airbag: PriceLevel::from_pct(LevelKind::Airbag, current_price, airbag_pct),
        knockout: PriceLevel::from_pct(LevelKind::Knockout, current_price, knockout_pct),
    }
}

/// Exponential moving average with `alpha = 2 / (period + 1)`, seeded with the
/// first value (no simple-average warm-up), same length as `series`.
pub fn compute_ema(series: &[f64], period: usize) -> Result<Vec<f64>, EngineError> {
    if period == 0 {
        return Err(EngineError::invalid_input("EMA period must be at least 1"));
    }
    let Some(&first) = series.first() else {
        return Ok(Vec::new());
    };

    let alpha = 2.0 / (period as f64 + 1.0);
    Ok(series
        .iter()
        .enumerate()
        .scan(first, move |prev_ema, (i, &value)| {
            let next = if i == 0 {
                first
            } else {
                value * alpha + *prev_ema * (1.0 - alpha)
            };
            *prev_ema = next;
            Some(next)
        })
        .collect())
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmaLevel {
    pub period: usize,
    /// EMA value at the last bar
    pub value: f64,
}

/// User inputs for the percentage markers; 0 leaves a marker unset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelInputs {
    pub strike_pct: f64,
    pub airbag_pct: f64,
    pub knockout_pct: f64,
}

/// Everything the chart annotates for one ticker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelReport {
    pub ticker: String,
    pub current_price: f64,
    pub last_timestamp_ms: i64,
    pub bar_count: usize,
    pub levels: PriceLevels,
    pub emas: Vec<EmaLevel>,
    pub profile: VolumeProfile,
}

impl LevelReport {
    /// Current price is the last close. EMA periods come from `ANALYSIS.ema`.
    pub fn build(
        series: &OhlcvTimeSeries,
        inputs: &LevelInputs,
        bin_count: usize,
    ) -> Result<Self, EngineError> {
        series
            .validate()
            .map_err(|e| EngineError::invalid_input(format!("{:#}", e)))?;
        let (Some(current_price), Some(last_timestamp_ms)) =
            (series.last_close(), series.last_timestamp_ms())
        else {
            return Err(EngineError::invalid_input(format!(
                "{}: no bars to analyse",
                series.ticker
            )));
        };

        let profile = compute_volume_profile(&series.bars(), bin_count)?;

        let emas = ANALYSIS
            .ema
            .periods
            .iter()
            .map(|&period| {
                let ema = compute_ema(&series.close_prices, period)?;
                Ok(EmaLevel {
                    period,
                    value: ema.last().copied().unwrap_or(current_price),
                })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        let levels = compute_price_levels(
            current_price,
            inputs.strike_pct,
            inputs.airbag_pct,
            inputs.knockout_pct,
        );

        Ok(LevelReport {
            ticker: series.ticker.clone(),
            current_price,
            last_timestamp_ms,
            bar_count: series.len(),
            levels,
            emas,
            profile,
        })
    }

    pub fn ema(&self, period: usize) -> Option<f64> {
        self.emas
            .iter()
            .find(|ema| ema.period == period)
            .map(|ema| ema.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceBar;

    #[test]
    fn test_price_levels_from_pct() {
        let levels = compute_price_levels(200.0, 95.0, 80.0, 0.0);
        assert_eq!(levels.strike.price, Some(190.0));
        assert_eq!(levels.airbag.price, Some(160.0));
        assert_eq!(levels.knockout.price, None);
    }

    #[test]
    fn test_price_levels_accept_any_real_pct() {
        let levels = compute_price_levels(50.0, 150.0, -50.0, 25.0);
        assert_eq!(levels.strike.price, Some(75.0));
        assert_eq!(levels.airbag.price, Some(-25.0));
        assert_eq!(levels.knockout.price, Some(12.5));
    }

    #[test]
    fn test_ema_seeded_with_first_value() {
        let series = [10.0, 11.0, 12.0, 13.0];
        let ema = compute_ema(&series, 3).unwrap();
        assert_eq!(ema.len(), series.len());
        assert_eq!(ema[0], 10.0);
        // alpha = 0.5
        assert_eq!(ema[1], 10.5);
        assert_eq!(ema[2], 11.25);
        assert_eq!(ema[3], 12.125);
    }

    #[test]
    fn test_ema_period_one_tracks_series() {
        let series = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(compute_ema(&series, 1).unwrap(), series.to_vec());
    }

    #[test]
    fn test_ema_edge_cases() {
        assert!(compute_ema(&[], 20).unwrap().is_empty());
        assert_eq!(compute_ema(&[7.0], 200).unwrap(), vec![7.0]);
        assert!(compute_ema(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn test_ema_first_value_invariant() {
        for period in [1, 2, 20, 50, 200] {
            let series: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64).sin()).collect();
            assert_eq!(compute_ema(&series, period).unwrap()[0], series[0]);
        }
    }

    #[test]
    fn test_level_report_build() {
        let bars: Vec<PriceBar> = (0..60)
            .map(|i| {
                let close = 100.0 + i as f64;
                PriceBar::new(i * 86_400_000, close, close + 1.0, close - 1.0, close, 1000.0)
            })
            .collect();
        let series = OhlcvTimeSeries::from_bars("AAPL", &bars);
        let inputs = LevelInputs {
            strike_pct: 95.0,
            airbag_pct: 0.0,
            knockout_pct: 70.0,
        };

        let report = LevelReport::build(&series, &inputs, 40).unwrap();
        assert_eq!(report.ticker, "AAPL");
        assert_eq!(report.current_price, 159.0);
        assert_eq!(report.bar_count, 60);
        assert_eq!(report.last_timestamp_ms, 59 * 86_400_000);
        assert_eq!(report.levels.airbag.price, None);
        assert!(report.levels.knockout.price.is_some());
        assert_eq!(report.emas.len(), ANALYSIS.ema.periods.len());
        // Rising series: shorter EMAs sit closer to the last close
        let (e20, e50, e200) = (
            report.ema(20).unwrap(),
            report.ema(50).unwrap(),
            report.ema(200).unwrap(),
        );
        assert!(e20 > e50 && e50 > e200 && e20 < 159.0);
        assert_eq!(report.profile.total_volume, 60_000.0);
    }

    #[test]
    fn test_level_report_on_ragged_columns_is_invalid_input() {
        let bars: Vec<PriceBar> = (0..5)
            .map(|i| PriceBar::new(i * 60_000, 10.0, 11.0, 9.0, 10.0 + i as f64, 500.0))
            .collect();
        let mut series = OhlcvTimeSeries::from_bars("AAPL", &bars);
        series.volumes.pop();
        let err = LevelReport::build(&series, &LevelInputs::default(), 40).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));

        let mut series = OhlcvTimeSeries::from_bars("AAPL", &bars);
        series.timestamps_ms.swap(0, 4);
        assert!(LevelReport::build(&series, &LevelInputs::default(), 40).is_err());
    }

    #[test]
    fn test_level_report_on_empty_series_is_invalid_input() {
        let series = OhlcvTimeSeries::default();
        let err = LevelReport::build(&series, &LevelInputs::default(), 40).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }
}
