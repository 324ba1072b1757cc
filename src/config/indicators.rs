//! Tracked economic indicators.
//!
//! One immutable table keyed by indicator display name. The summary builder only
//! reports indicators listed (and tracked) here, in the order they are declared, and
//! takes the comparison direction from `lower_is_better` instead of guessing it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Grouping used downstream for table sections and coloring
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum Category {
    Employment,
    Inflation,
    Consumption,
    Housing,
    Sentiment,
    Output,
}

fn default_tracked() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    pub name: String,
    pub category: Category,
    /// True where a smaller actual than forecast is favorable (inflation, unemployment)
    #[serde(default)]
    pub lower_is_better: bool,
    #[serde(default = "default_tracked")]
    pub tracked: bool,
}

impl IndicatorSpec {
    pub fn new(name: &str, category: Category, lower_is_better: bool) -> Self {
        Self {
            name: name.to_string(),
            category,
            lower_is_better,
            tracked: true,
        }
    }
}

// (name, category, lower_is_better)
const US_MACRO_INDICATORS: &[(&str, Category, bool)] = &[
    ("Unemployment Rate", Category::Employment, true),
    ("Nonfarm Payrolls", Category::Employment, false),
    ("Average Hourly Earnings (MoM)", Category::Employment, false),
    ("Average Hourly Earnings (YoY)", Category::Employment, false),
    ("ADP Nonfarm Employment Change", Category::Employment, false),
    ("JOLTs Job Openings", Category::Employment, false),
    ("Core PCE Price Index (YoY)", Category::Inflation, true),
    ("Core PCE Price Index (MoM)", Category::Inflation, true),
    ("PCE Price Index (YoY)", Category::Inflation, true),
    ("Core CPI (MoM)", Category::Inflation, true),
    ("Core CPI (YoY)", Category::Inflation, true),
    ("CPI (YoY)", Category::Inflation, true),
    ("Core PPI (MoM)", Category::Inflation, true),
    ("PPI (MoM)", Category::Inflation, true),
    ("GDP Price Index (QoQ)", Category::Inflation, true),
    ("Core Retail Sales (MoM)", Category::Consumption, false),
    ("Retail Sales (MoM)", Category::Consumption, false),
    ("Personal Income (MoM)", Category::Consumption, false),
    ("Building Permits", Category::Housing, false),
    ("Housing Starts", Category::Housing, false),
    ("Existing Home Sales", Category::Housing, false),
    ("New Home Sales", Category::Housing, false),
    ("CB Consumer Confidence", Category::Sentiment, false),
    ("Michigan Consumer Sentiment", Category::Sentiment, false),
    ("GDP (QoQ)", Category::Output, false),
    ("Durable Goods Orders (MoM)", Category::Output, false),
    ("Core Durable Goods Orders (MoM)", Category::Output, false),
    ("Industrial Production (MoM)", Category::Output, false),
    ("ISM Manufacturing PMI", Category::Output, false),
    ("ISM Non-Manufacturing PMI", Category::Output, false),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorTable {
    indicators: Vec<IndicatorSpec>,
}

impl IndicatorTable {
    /// Builds a table, keeping the first entry when a name is declared twice.
    pub fn new(indicators: Vec<IndicatorSpec>) -> Self {
        let mut seen = HashSet::new();
        let indicators = indicators
            .into_iter()
            .filter(|spec| {
                let first = seen.insert(spec.name.clone());
                if !first {
                    log::warn!("Duplicate indicator '{}' in table, ignoring", spec.name);
                }
                first
            })
            .collect();
        Self { indicators }
    }

    /// The built-in US macro calendar table.
    pub fn us_macro() -> Self {
        Self::new(
            US_MACRO_INDICATORS
                .iter()
                .map(|(name, category, lower_is_better)| {
                    IndicatorSpec::new(name, *category, *lower_is_better)
                })
                .collect(),
        )
    }

    /// Loads a table from a JSON array of `IndicatorSpec`.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read indicator table {}", path.display()))?;
        let indicators: Vec<IndicatorSpec> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse indicator table {}", path.display()))?;
        if indicators.is_empty() {
            bail!("Indicator table {} is empty", path.display());
        }
        Ok(Self::new(indicators))
    }

    pub fn get(&self, name: &str) -> Option<&IndicatorSpec> {
        self.indicators.iter().find(|spec| spec.name == name)
    }

    /// Tracked entry for `name`, if any.
    pub fn tracked(&self, name: &str) -> Option<&IndicatorSpec> {
        self.get(name).filter(|spec| spec.tracked)
    }

    pub fn is_tracked(&self, name: &str) -> bool {
        self.tracked(name).is_some()
    }

    pub fn lower_is_better(&self, name: &str) -> Option<bool> {
        self.get(name).map(|spec| spec.lower_is_better)
    }

    /// Tracked entries in declaration order.
    pub fn iter_tracked(&self) -> impl Iterator<Item = &IndicatorSpec> {
        self.indicators.iter().filter(|spec| spec.tracked)
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use strum::IntoEnumIterator;

    #[test]
    fn test_us_macro_table_flags() {
        let table = IndicatorTable::us_macro();
        assert_eq!(table.len(), US_MACRO_INDICATORS.len());
        assert_eq!(table.lower_is_better("Unemployment Rate"), Some(true));
        assert_eq!(table.lower_is_better("CPI (YoY)"), Some(true));
        assert_eq!(table.lower_is_better("Nonfarm Payrolls"), Some(false));
        assert_eq!(table.lower_is_better("Bitcoin Price"), None);
    }

    #[test]
    fn test_every_category_is_used() {
        let table = IndicatorTable::us_macro();
        for category in Category::iter() {
            assert!(
                table.iter_tracked().any(|spec| spec.category == category),
                "no indicator in category {category}"
            );
        }
    }

    #[test]
    fn test_duplicates_keep_first_declaration() {
        let table = IndicatorTable::new(vec![
            IndicatorSpec::new("Retail Sales (MoM)", Category::Consumption, false),
            IndicatorSpec::new("CPI (YoY)", Category::Inflation, true),
            IndicatorSpec::new("Retail Sales (MoM)", Category::Output, true),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("Retail Sales (MoM)").map(|s| s.category),
            Some(Category::Consumption)
        );
    }

    #[test]
    fn test_untracked_entries_are_not_tracked() {
        let mut hidden = IndicatorSpec::new("Housing Starts", Category::Housing, false);
        hidden.tracked = false;
        let table = IndicatorTable::new(vec![hidden]);
        assert!(table.get("Housing Starts").is_some());
        assert!(!table.is_tracked("Housing Starts"));
        assert_eq!(table.iter_tracked().count(), 0);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "CPI (YoY)", "category": "Inflation", "lower_is_better": true}},
                {{"name": "New Home Sales", "category": "Housing"}}
            ]"#
        )
        .unwrap();

        let table = IndicatorTable::load_from_path(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.is_tracked("New Home Sales"));
        assert_eq!(table.lower_is_better("New Home Sales"), Some(false));
    }

    #[test]
    fn test_load_from_path_rejects_empty_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(IndicatorTable::load_from_path(file.path()).is_err());
    }
}
