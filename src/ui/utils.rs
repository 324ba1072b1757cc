use crate::analysis::magnitude::format_magnitude;

/// Uppercase section heading followed by a rule of the same width
pub fn section_heading(text: &str) -> String {
    let heading = text.to_uppercase() + ":";
    let rule = "-".repeat(heading.chars().count());
    format!("{}\n{}\n", heading, rule)
}

/// Formats a price for stock charts.
/// - 1 and above: 2 decimals ($189.84)
/// - Below 1: 4 decimals ($0.4821)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }
    if price.abs() >= 1.0 {
        format!("${:.2}", price)
    } else {
        format!("${:.4}", price)
    }
}

/// Empty string for an absent value, so missing data shows as a blank cell.
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_magnitude).unwrap_or_default()
}
