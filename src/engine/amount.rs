use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?[0-9]+\.?[0-9]*").expect("amount pattern is valid"));

/// Pulls the most plausible monetary value out of raw OCR text.
///
/// Every substring shaped like an amount (optional `$`, digits, optional
/// decimal part) is a candidate; the largest one wins. Receipts print several
/// figures (line items, subtotal, tax, total) and the total is almost always
/// the largest, so the maximum is a cheap proxy for the total line. Text with
/// no parsable candidate yields `0.0`, never an error.
pub fn extract_amount(text: &str) -> f64 {
    AMOUNT_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().trim_start_matches('$').parse::<f64>().ok())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_largest_figure() {
        assert_eq!(extract_amount("Total $42.50 Tax $3.10"), 42.50);
    }

    #[test]
    fn empty_text_yields_zero() {
        assert_eq!(extract_amount(""), 0.0);
    }

    #[test]
    fn text_without_numbers_yields_zero() {
        assert_eq!(extract_amount("thank you, come again"), 0.0);
    }

    #[test]
    fn currency_symbol_is_optional() {
        assert_eq!(extract_amount("amount due 17.80"), 17.80);
    }

    #[test]
    fn trailing_decimal_point_still_parses() {
        assert_eq!(extract_amount("round total 12."), 12.0);
    }

    #[test]
    fn lone_symbols_are_not_candidates() {
        assert_eq!(extract_amount("$ . $$"), 0.0);
    }

    #[test]
    fn never_negative() {
        for text in ["-5.00 refund", "", "owed: $0"] {
            assert!(extract_amount(text) >= 0.0);
        }
    }
}
