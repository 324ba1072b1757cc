/// Normalizes user-entered tickers: all-digit codes are Hong Kong listings and get
/// zero-padded to four digits with the `.HK` suffix ("700" -> "0700.HK").
pub fn format_ticker(ticker: &str) -> String {
    let trimmed = ticker.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let code = trimmed.trim_start_matches('0');
        let code = if code.is_empty() { "0" } else { code };
        return format!("{:0>4}.HK", code);
    }
    trimmed.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hk_codes_are_padded() {
        assert_eq!(format_ticker("700"), "0700.HK");
        assert_eq!(format_ticker("5"), "0005.HK");
        assert_eq!(format_ticker("0005"), "0005.HK");
        assert_eq!(format_ticker("09988"), "9988.HK");
        assert_eq!(format_ticker("12345"), "12345.HK");
    }

    #[test]
    fn test_symbols_pass_through() {
        assert_eq!(format_ticker("AAPL"), "AAPL");
        assert_eq!(format_ticker(" msft "), "MSFT");
        assert_eq!(format_ticker("BRK.B"), "BRK.B");
        assert_eq!(format_ticker(""), "");
    }
}
