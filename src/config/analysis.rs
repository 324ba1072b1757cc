//! Analysis and computation configuration

/// Settings for the volume profile
pub struct ProfileSettings {
    // Number of equal-width close-price bins
    pub bin_count: usize,
    // Share of total volume the value area must hold (0.70 = 70%)
    pub value_area_share: f64,
}

/// Settings for the moving averages drawn as reference levels
pub struct EmaSettings {
    pub periods: &'static [usize],
}

/// Settings for the indicator summary table
pub struct SummarySettings {
    // Number of trailing actuals per row (latest included)
    pub history_depth: usize,
}

/// Default window of bars fed to the level engine
pub struct LookbackSettings {
    pub default_days: i64,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub profile: ProfileSettings,
    pub ema: EmaSettings,
    pub summary: SummarySettings,
    pub lookback: LookbackSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    profile: ProfileSettings {
        bin_count: 40,
        value_area_share: 0.70,
    },

    ema: EmaSettings {
        periods: &[20, 50, 200],
    },

    summary: SummarySettings { history_depth: 5 },

    // One year of daily bars
    lookback: LookbackSettings { default_days: 365 },
};
