use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// The user-set percentage-of-price markers drawn on the stock chart
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum LevelKind {
    Strike,
    Airbag,
    Knockout,
}

impl fmt::Display for LevelKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LevelKind::Strike => write!(f, "Strike Price"),
            LevelKind::Airbag => write!(f, "Airbag Price"),
            LevelKind::Knockout => write!(f, "Knock-out Price"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PriceLevel {
    pub kind: LevelKind,
    pub pct: f64,
    /// `None` when `pct` is 0 ("not set"), which is not the same as a level at 0.0
    pub price: Option<f64>,
}

impl PriceLevel {
    pub fn from_pct(kind: LevelKind, current_price: f64, pct: f64) -> Self {
        let price = (pct != 0.0).then(|| current_price * (pct / 100.0));
        Self { kind, pct, price }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PriceLevels {
    pub strike: PriceLevel,
    pub airbag: PriceLevel,
    pub knockout: PriceLevel,
}

impl PriceLevels {
    pub fn get(&self, kind: LevelKind) -> &PriceLevel {
        match kind {
            LevelKind::Strike => &self.strike,
            LevelKind::Airbag => &self.airbag,
            LevelKind::Knockout => &self.knockout,
        }
    }

    /// Strike, airbag, knock-out: declaration order of `LevelKind`.
    pub fn iter(&self) -> impl Iterator<Item = &PriceLevel> {
        LevelKind::iter().map(move |kind| self.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pct_is_absent_not_zero() {
        let level = PriceLevel::from_pct(LevelKind::Airbag, 150.0, 0.0);
        assert_eq!(level.price, None);
    }

    #[test]
    fn test_zero_price_with_pct_is_present() {
        let level = PriceLevel::from_pct(LevelKind::Strike, 0.0, 95.0);
        assert_eq!(level.price, Some(0.0));
    }

    #[test]
    fn test_get_matches_kind() {
        let levels = PriceLevels {
            strike: PriceLevel::from_pct(LevelKind::Strike, 100.0, 95.0),
            airbag: PriceLevel::from_pct(LevelKind::Airbag, 100.0, 80.0),
            knockout: PriceLevel::from_pct(LevelKind::Knockout, 100.0, 0.0),
        };
        for kind in LevelKind::iter() {
            assert_eq!(levels.get(kind).kind, kind);
        }
        assert_eq!(levels.iter().filter(|l| l.price.is_some()).count(), 2);
        let kinds: Vec<_> = levels.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LevelKind::Strike, LevelKind::Airbag, LevelKind::Knockout]);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(LevelKind::Knockout.to_string(), "Knock-out Price");
    }
}
