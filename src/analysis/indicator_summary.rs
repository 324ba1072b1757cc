//! Reduces a batch of scraped indicator releases to one headline row per tracked
//! indicator, plus the dated series behind each row.
//!
//! Bad rows never abort the batch: untracked indicators are dropped silently, rows
//! whose date can't be read are dropped with a warning, and indicators left with no
//! usable rows are simply not reported.

use chrono::NaiveDate;
use itertools::{Either, Itertools};

use crate::analysis::magnitude::{compare_values, parse_optional};
use crate::config::{ANALYSIS, DEBUG_FLAGS, IndicatorSpec, IndicatorTable};
use crate::domain::IndicatorObservation;
use crate::models::{
    IndicatorSeries, IndicatorSummary, IndicatorSummaryRow, SeriesPoint, SkipReason,
    SkippedObservation,
};
use crate::utils::time_utils::{format_report_date, parse_report_date, split_period_label};

pub fn build_summary(
    observations: &[IndicatorObservation],
    table: &IndicatorTable,
) -> IndicatorSummary {
    build_summary_with_depth(observations, table, ANALYSIS.summary.history_depth)
}

pub fn build_summary_with_depth(
    observations: &[IndicatorObservation],
    table: &IndicatorTable,
    history_depth: usize,
) -> IndicatorSummary {
    let (skipped, dated): (Vec<SkippedObservation>, Vec<(&str, (NaiveDate, &IndicatorObservation))>) =
        observations.iter().partition_map(|obs| {
            if !table.is_tracked(&obs.indicator) {
                if DEBUG_FLAGS.print_summary_skips {
                    log::debug!("Ignoring untracked indicator '{}'", obs.indicator);
                }
                return Either::Left(skipped_observation(obs, SkipReason::UnknownIndicator));
            }
            match parse_report_date(&obs.report_date) {
                Some(date) => Either::Right((obs.indicator.as_str(), (date, obs))),
                None => {
                    log::warn!(
                        "{}: dropping observation with unreadable date '{}'",
                        obs.indicator,
                        obs.report_date
                    );
                    Either::Left(skipped_observation(obs, SkipReason::UnparsableDate))
                }
            }
        });

    let mut grouped = dated.into_iter().into_group_map();

    let mut rows = Vec::new();
    let mut series = Vec::new();
    for spec in table.iter_tracked() {
        let Some(mut group) = grouped.remove(spec.name.as_str()) else {
            if skipped.iter().any(|s| s.indicator == spec.name) {
                log::info!("{}: no valid observations left, omitted from summary", spec.name);
            } else {
                log::debug!("{}: no observations in batch", spec.name);
            }
            continue;
        };

        // Stable: same-day releases keep their scraped order
        group.sort_by(|a, b| b.0.cmp(&a.0));

        let points: Vec<SeriesPoint> = group
            .iter()
            .map(|(date, obs)| series_point(*date, obs))
            .collect();
        let (latest_date, latest_obs) = group[0];
        rows.push(summary_row(spec, latest_date, latest_obs, &points, history_depth));
        series.push(IndicatorSeries {
            indicator: spec.name.clone(),
            category: spec.category,
            points,
        });
    }

    if DEBUG_FLAGS.print_summary_skips {
        log::info!(
            "Summary built: {} rows from {} observations ({} skipped)",
            rows.len(),
            observations.len(),
            skipped.len()
        );
    }

    IndicatorSummary {
        rows,
        series,
        skipped,
    }
}

fn skipped_observation(obs: &IndicatorObservation, reason: SkipReason) -> SkippedObservation {
    SkippedObservation {
        indicator: obs.indicator.clone(),
        report_date: obs.report_date.clone(),
        reason,
    }
}

/// Explicit label wins over a "(Feb)" tag embedded in the date.
fn period_label(obs: &IndicatorObservation) -> Option<String> {
    obs.period_label
        .clone()
        .or_else(|| split_period_label(&obs.report_date).1.map(str::to_string))
}

fn series_point(report_date: NaiveDate, obs: &IndicatorObservation) -> SeriesPoint {
    SeriesPoint {
        report_date,
        period_label: period_label(obs),
        actual: parse_optional(obs.actual.as_deref()),
        forecast: parse_optional(obs.forecast.as_deref()),
        previous: parse_optional(obs.previous.as_deref()),
    }
}

fn summary_row(
    spec: &IndicatorSpec,
    latest_date: NaiveDate,
    latest_obs: &IndicatorObservation,
    points: &[SeriesPoint],
    history_depth: usize,
) -> IndicatorSummaryRow {
    let latest = &points[0];
    let history = points
        .iter()
        .map(|point| point.actual)
        .pad_using(history_depth, |_| None)
        .take(history_depth)
        .collect();

    IndicatorSummaryRow {
        indicator: spec.name.clone(),
        category: spec.category,
        report_date: latest_date,
        report_date_label: format_report_date(latest_date),
        period_label: latest.period_label.clone(),
        verdict: compare_values(latest.actual, latest.forecast, spec.lower_is_better),
        latest_actual: latest.actual,
        latest_forecast: latest.forecast,
        latest_previous: latest.previous,
        forecast_raw: latest_obs.forecast.clone(),
        history,
    }
}
