//! Text rendering of a ticker's level report: the markers, EMAs and a sideways
//! volume-profile histogram (highest price on top).

use std::fmt::Write as _;

use crate::analysis::levels::LevelReport;
use crate::analysis::magnitude::format_magnitude;
use crate::error::EngineError;
use crate::models::VolumeProfile;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::{format_price, section_heading};
use crate::utils::maths_utils::normalize_max;
use crate::utils::time_utils::epoch_ms_to_utc;

pub fn render_level_report(report: &LevelReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  last close {} on {} ({} bars)\n",
        report.ticker,
        format_price(report.current_price),
        epoch_ms_to_utc(report.last_timestamp_ms),
        report.bar_count
    );

    out.push_str(&section_heading("Levels"));
    for level in report.levels.iter() {
        let price = match level.price {
            Some(price) => format_price(price),
            None => "not set".to_string(),
        };
        let _ = writeln!(out, "{:<16} {:>7.2}%  {}", level.kind.to_string(), level.pct, price);
    }
    out.push('\n');

    out.push_str(&section_heading("Moving averages"));
    for ema in &report.emas {
        let _ = writeln!(out, "EMA {:<4} {}", ema.period, format_price(ema.value));
    }
    out.push('\n');

    out.push_str(&section_heading("Volume profile"));
    let profile = &report.profile;
    let _ = writeln!(
        out,
        "POC {}  VAL {}  VAH {}  ({:.1}% of volume in value area, bins {} wide)",
        format_price(profile.poc_price()),
        format_price(profile.value_area_low()),
        format_price(profile.value_area_high()),
        profile.value_area_share() * 100.0,
        format_price(profile.bin_width())
    );
    out.push_str(&render_histogram(profile));
    out
}

/// One line per bin, highest price first. `>` marks value-area bins.
pub fn render_histogram(profile: &VolumeProfile) -> String {
    let normalized = normalize_max(&profile.bin_volumes);
    let centers = profile.centers();
    let (va_low, va_high) = profile.value_area;

    let mut out = String::new();
    for (index, (share, center)) in normalized.iter().zip(&centers).enumerate().rev() {
        let bar_len = (share * UI_CONFIG.histogram_width as f64).round() as usize;
        let bar: String = std::iter::repeat_n(UI_CONFIG.histogram_fill, bar_len).collect();
        let in_value_area = (va_low..=va_high).contains(&index);
        let _ = write!(
            out,
            "{} {:>12} | {:<width$} {:>10}",
            if in_value_area { '>' } else { ' ' },
            format_price(*center),
            bar,
            format_magnitude(profile.bin_volumes[index]),
            width = UI_CONFIG.histogram_width
        );
        if index == profile.poc_index {
            out.push_str("  POC");
        }
        out.push('\n');
    }
    out
}

/// Single-line digest used by the multi-ticker scan.
pub fn render_scan_line(ticker: &str, result: &Result<LevelReport, EngineError>) -> String {
    match result {
        Ok(report) => {
            let emas: Vec<String> = report
                .emas
                .iter()
                .map(|ema| format!("EMA{} {}", ema.period, format_price(ema.value)))
                .collect();
            format!(
                "{:<10} {:>12}  POC {}  VA {} - {}  {}",
                ticker,
                format_price(report.current_price),
                format_price(report.profile.poc_price()),
                format_price(report.profile.value_area_low()),
                format_price(report.profile.value_area_high()),
                emas.join("  ")
            )
        }
        Err(e) => format!("{:<10} error: {}", ticker, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::levels::LevelInputs;
    use crate::domain::PriceBar;
    use crate::models::OhlcvTimeSeries;

    fn report() -> LevelReport {
        let closes = [10.0, 11.0, 11.0, 11.0, 12.0, 13.0];
        let bars: Vec<PriceBar> = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar::new(i as i64 * 86_400_000, c, c, c, c, 100.0))
            .collect();
        let series = OhlcvTimeSeries::from_bars("AAPL", &bars);
        let inputs = LevelInputs {
            strike_pct: 50.0,
            airbag_pct: 0.0,
            knockout_pct: 25.0,
        };
        LevelReport::build(&series, &inputs, 3).unwrap()
    }

    #[test]
    fn test_histogram_has_one_line_per_bin_highest_first() {
        let report = report();
        let histogram = render_histogram(&report.profile);
        let lines: Vec<&str> = histogram.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("$12.50"));
        assert!(lines[2].contains("$10.50"));
    }

    #[test]
    fn test_poc_line_has_full_bar() {
        let report = report();
        let histogram = render_histogram(&report.profile);
        let poc_line = histogram
            .lines()
            .find(|line| line.ends_with("POC"))
            .unwrap();
        let full_bar: String = std::iter::repeat_n(UI_CONFIG.histogram_fill, UI_CONFIG.histogram_width).collect();
        assert!(poc_line.contains(&full_bar));
        assert!(poc_line.starts_with('>'));
        assert_eq!(histogram.matches("POC").count(), 1);
    }

    #[test]
    fn test_report_shows_unset_levels() {
        let text = render_level_report(&report());
        assert!(text.starts_with("AAPL  last close $13.00 on 1970-01-06 (6 bars)"));
        assert!(text.contains("Strike Price"));
        assert!(text.contains("$6.50"));
        assert!(text.contains("not set"));
        assert!(text.contains("$3.25"));
        assert!(text.contains("EMA 200"));
    }

    #[test]
    fn test_scan_line_for_error() {
        let err: Result<LevelReport, EngineError> = Err(EngineError::invalid_input("no bars"));
        let line = render_scan_line("MSFT", &err);
        assert!(line.starts_with("MSFT"));
        assert!(line.contains("no bars"));
    }
}
