use serde::{Deserialize, Serialize};

// One trading period of OHLCV data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    // A constructor for convenience
    pub fn new(timestamp_ms: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        PriceBar {
            timestamp_ms,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Why this bar cannot feed the volume profile, if it can't.
    pub fn profile_defect(&self) -> Option<&'static str> {
        if !self.close.is_finite() {
            Some("close is not finite")
        } else if self.close < 0.0 {
            Some("close is negative")
        } else if !self.volume.is_finite() {
            Some("volume is not finite")
        } else if self.volume < 0.0 {
            Some("volume is negative")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defect() {
        let bar = PriceBar::new(0, 10.0, 11.0, 9.0, 10.5, 100.0);
        assert_eq!(bar.profile_defect(), None);

        let bar = PriceBar::new(0, 10.0, 11.0, 9.0, f64::NAN, 100.0);
        assert_eq!(bar.profile_defect(), Some("close is not finite"));

        let bar = PriceBar::new(0, 10.0, 11.0, 9.0, -1.0, 100.0);
        assert_eq!(bar.profile_defect(), Some("close is negative"));

        let bar = PriceBar::new(0, 10.0, 11.0, 9.0, 10.0, -5.0);
        assert_eq!(bar.profile_defect(), Some("volume is negative"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let bar: PriceBar = serde_json::from_str(
            r#"{"timestamp_ms": 1704067200000, "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 42.0}"#,
        )
        .unwrap();
        assert_eq!(bar, PriceBar::new(1_704_067_200_000, 1.0, 2.0, 0.5, 1.5, 42.0));
    }
}
