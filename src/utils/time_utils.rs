use chrono::{DateTime, Local, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Display format for report dates, matching the economic calendar ("Mar 01, 2024").
    pub const REPORT_DATE_FORMAT: &str = "%b %d, %Y";

    /// Patterns tried, in order, when reading a scraped report date.
    pub const REPORT_DATE_PATTERNS: &[&str] = &[
        "%b %d, %Y", // Mar 01, 2024
        "%B %d, %Y", // March 1, 2024
        "%Y-%m-%d",  // 2024-03-01
        "%m/%d/%Y",  // 03/01/2024
        "%d.%m.%Y",  // 01.03.2024
        "%d %b %Y",  // 01 Mar 2024
    ];
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    epoch_sec_to_utc(epoch_ms / 1000)
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

pub fn local_now_as_timestamp_ms() -> i64 {
    let now_local = Local::now();
    now_local.timestamp_millis()
}

pub fn how_many_seconds_ago(past_timestamp_ms: i64) -> i64 {
    // How many seconds ago was the event described by `past_timestamp_ms` ?
    let now_timestamp_ms = local_now_as_timestamp_ms();
    (now_timestamp_ms - past_timestamp_ms) / 1000
}

/// Splits a trailing parenthesized period tag off a scraped date label.
/// `"Mar 01, 2024 (Feb)"` becomes `("Mar 01, 2024", Some("Feb"))`.
pub fn split_period_label(raw: &str) -> (&str, Option<&str>) {
    let trimmed = raw.trim();
    if let Some(without_close) = trimmed.strip_suffix(')')
        && let Some(open_idx) = without_close.rfind('(')
    {
        let label = without_close[open_idx + 1..].trim();
        let date_part = without_close[..open_idx].trim();
        let label = (!label.is_empty()).then_some(label);
        return (date_part, label);
    }
    (trimmed, None)
}

/// Parses the date part of a scraped report date (period tag allowed) against
/// `TimeUtils::REPORT_DATE_PATTERNS`.
pub fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let (date_part, _) = split_period_label(raw);
    if date_part.is_empty() {
        return None;
    }
    TimeUtils::REPORT_DATE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(date_part, pattern).ok())
}

pub fn format_report_date(date: NaiveDate) -> String {
    date.format(TimeUtils::REPORT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_split_period_label() {
        assert_eq!(
            split_period_label("Mar 01, 2024 (Feb)"),
            ("Mar 01, 2024", Some("Feb"))
        );
        assert_eq!(split_period_label(" Mar 01, 2024 "), ("Mar 01, 2024", None));
        assert_eq!(split_period_label("Mar 01, 2024 ()"), ("Mar 01, 2024", None));
    }

    #[test]
    fn test_parse_report_date_patterns() {
        assert_eq!(parse_report_date("Mar 01, 2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_report_date("Oct 04, 2024 (Sep)"), Some(ymd(2024, 10, 4)));
        assert_eq!(parse_report_date("March 1, 2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_report_date("2024-03-01"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_report_date("03/01/2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_report_date("01.03.2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_report_date("01 Mar 2024"), Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_parse_report_date_rejects_garbage() {
        assert_eq!(parse_report_date(""), None);
        assert_eq!(parse_report_date("(Feb)"), None);
        assert_eq!(parse_report_date("next Tuesday"), None);
        assert_eq!(parse_report_date("2024-02-30"), None);
    }

    #[test]
    fn test_format_report_date() {
        assert_eq!(format_report_date(ymd(2024, 3, 1)), "Mar 01, 2024");
    }

    #[test]
    fn test_epoch_formatting() {
        assert_eq!(epoch_ms_to_utc(0), "1970-01-01");
        assert_eq!(epoch_sec_to_utc(86_400), "1970-01-02");
    }
}
