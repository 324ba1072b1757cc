//! Scraped number tokens: parsing ("254K", "-2.1%", "7.443M") and comparison
//! of an actual figure against its forecast.

use serde::{Deserialize, Serialize};

use crate::models::Verdict;

/// Unit suffix carried by a scraped token
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Unit {
    Plain,
    Percent,
    Thousands,
    Millions,
    Billions,
    Trillions,
}

impl Unit {
    fn from_suffix(c: char) -> Option<Unit> {
        match c.to_ascii_uppercase() {
            '%' => Some(Unit::Percent),
            'K' => Some(Unit::Thousands),
            'M' => Some(Unit::Millions),
            'B' => Some(Unit::Billions),
            'T' => Some(Unit::Trillions),
            _ => None,
        }
    }

    /// Percent stays a literal magnitude: "3.1%" compares as 3.1 against another percent.
    pub fn multiplier(self) -> f64 {
        match self {
            Unit::Plain | Unit::Percent => 1.0,
            Unit::Thousands => 1e3,
            Unit::Millions => 1e6,
            Unit::Billions => 1e9,
            Unit::Trillions => 1e12,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Magnitude {
    /// In base units (suffix multiplier applied)
    pub value: f64,
    pub unit: Unit,
}

/// Parses a token keeping track of its unit. `None` for empty, placeholder ("-",
/// "N/A") or otherwise non-numeric input, and for non-finite results.
pub fn parse_reading(raw: &str) -> Option<Magnitude> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    let last = cleaned.chars().last()?;

    let (number, unit) = match Unit::from_suffix(last) {
        Some(unit) => (&cleaned[..cleaned.len() - last.len_utf8()], unit),
        None => (cleaned.as_str(), Unit::Plain),
    };

    let value: f64 = number.parse().ok()?;
    let value = value * unit.multiplier();
    value.is_finite().then_some(Magnitude { value, unit })
}

pub fn parse_magnitude(raw: &str) -> Option<f64> {
    parse_reading(raw).map(|m| m.value)
}

pub fn parse_optional(raw: Option<&str>) -> Option<f64> {
    raw.and_then(parse_magnitude)
}

pub fn compare_values(actual: Option<f64>, forecast: Option<f64>, lower_is_better: bool) -> Verdict {
    let (Some(actual), Some(forecast)) = (actual, forecast) else {
        return Verdict::Unknown;
    };
    if actual == forecast {
        Verdict::Same
    } else if (actual < forecast) == lower_is_better {
        Verdict::Better
    } else {
        Verdict::Worse
    }
}

/// Verdict for one release. `lower_is_better` must come from the indicator table.
pub fn compare_to_forecast(actual: &str, forecast: &str, lower_is_better: bool) -> Verdict {
    compare_values(
        parse_magnitude(actual),
        parse_magnitude(forecast),
        lower_is_better,
    )
}

/// Large figures with a T/B/M suffix, everything else with two decimals.
pub fn format_magnitude(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-6)
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(parse_magnitude("3.5K"), Some(3500.0));
        assert_eq!(parse_magnitude("-2.1%"), Some(-2.1));
        assert!(approx(parse_magnitude("7.443M"), 7_443_000.0));
        assert!(approx(parse_magnitude("1.2B"), 1_200_000_000.0));
        assert!(approx(parse_magnitude("2.5T"), 2.5e12));
        assert_eq!(parse_magnitude("52.8"), Some(52.8));
        assert_eq!(parse_magnitude("+0.3%"), Some(0.3));
    }

    #[test]
    fn test_parse_is_lenient_about_formatting() {
        assert_eq!(parse_magnitude(" 254K "), Some(254_000.0));
        assert_eq!(parse_magnitude("1,250K"), Some(1_250_000.0));
        assert_eq!(parse_magnitude("3.5 k"), Some(3500.0));
    }

    #[test]
    fn test_parse_rejects_placeholders() {
        assert_eq!(parse_magnitude("-"), None);
        assert_eq!(parse_magnitude(""), None);
        assert_eq!(parse_magnitude("   "), None);
        assert_eq!(parse_magnitude("N/A"), None);
        assert_eq!(parse_magnitude("%"), None);
        assert_eq!(parse_magnitude("K"), None);
        assert_eq!(parse_magnitude("NaN"), None);
        assert_eq!(parse_magnitude("inf%"), None);
        assert_eq!(parse_optional(None), None);
    }

    #[test]
    fn test_parse_reading_keeps_unit() {
        let reading = parse_reading("3.1%").unwrap();
        assert_eq!(reading.unit, Unit::Percent);
        assert_eq!(reading.value, 3.1);
        assert_eq!(parse_reading("12").map(|m| m.unit), Some(Unit::Plain));
    }

    #[test]
    fn test_compare_to_forecast_direction() {
        assert_eq!(compare_to_forecast("3.0%", "3.5%", true), Verdict::Better);
        assert_eq!(compare_to_forecast("3.0%", "3.5%", false), Verdict::Worse);
        assert_eq!(compare_to_forecast("4.0%", "3.5%", true), Verdict::Worse);
        assert_eq!(compare_to_forecast("275K", "200K", false), Verdict::Better);
    }

    #[test]
    fn test_compare_to_forecast_same_and_unknown() {
        assert_eq!(compare_to_forecast("3.5%", "3.5%", true), Verdict::Same);
        assert_eq!(compare_to_forecast("3.5%", "3.5%", false), Verdict::Same);
        assert_eq!(compare_to_forecast("N/A", "3.5%", true), Verdict::Unknown);
        assert_eq!(compare_to_forecast("3.5%", "", false), Verdict::Unknown);
    }

    #[test]
    fn test_units_scale_before_comparing() {
        // 1.1M is more than 950K
        assert_eq!(compare_to_forecast("1.1M", "950K", false), Verdict::Better);
    }

    #[test]
    fn test_format_magnitude() {
        assert_eq!(format_magnitude(3.2e12), "3.20T");
        assert_eq!(format_magnitude(-4.5e9), "-4.50B");
        assert_eq!(format_magnitude(12_345_678.0), "12.35M");
        assert_eq!(format_magnitude(999.5), "999.50");
    }
}
