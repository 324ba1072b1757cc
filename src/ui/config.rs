/// Text layout settings shared by every report
#[derive(Clone, Copy)]
pub struct UiConfig {
    /// Width (in characters) of the longest histogram bar
    pub histogram_width: usize,
    pub histogram_fill: char,
    /// Width of the indicator-name column in the summary table
    pub indicator_column_width: usize,
    /// Width of each numeric column in the summary table
    pub value_column_width: usize,
}

/// Global UI configuration instance
pub const UI_CONFIG: UiConfig = UiConfig {
    histogram_width: 40,
    histogram_fill: '#',
    indicator_column_width: 34,
    value_column_width: 10,
};
