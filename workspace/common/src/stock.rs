//! Stock-count parsing and the presentational low-stock check.

use serde::{Deserialize, Serialize};

/// Stock counts strictly below this value are flagged.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Tooltip text attached to flagged stock elements.
pub const LOW_STOCK_MESSAGE: &str = "Low stock! Please refill soon.";

/// Parses the integer prefix of `text` the way `parseInt(text, 10)` does.
///
/// Leading whitespace is skipped, an optional sign is accepted, and digits
/// are read until the first non-digit. Returns `None` when no digit follows,
/// which is the not-a-number case. Values beyond `i64` saturate.
pub fn parse_stock_count(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        let digit = i64::from(digit - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -digit } else { digit });
    }

    seen.then_some(value)
}

/// Classification of a stock element's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Parsed and below the threshold
    Low(i64),
    /// Parsed and at or above the threshold
    Sufficient(i64),
    /// Not a number; never flagged
    Unparsed,
}

impl StockLevel {
    /// Classifies `text` against `threshold`.
    pub fn classify(text: &str, threshold: i64) -> Self {
        match parse_stock_count(text) {
            Some(count) if count < threshold => StockLevel::Low(count),
            Some(count) => StockLevel::Sufficient(count),
            None => StockLevel::Unparsed,
        }
    }

    pub fn is_low(&self) -> bool {
        matches!(self, StockLevel::Low(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_stock_count("0"), Some(0));
        assert_eq!(parse_stock_count("4"), Some(4));
        assert_eq!(parse_stock_count("120"), Some(120));
    }

    #[test]
    fn test_parse_follows_parse_int_prefix_rules() {
        assert_eq!(parse_stock_count("  7\n"), Some(7));
        assert_eq!(parse_stock_count("12 units"), Some(12));
        assert_eq!(parse_stock_count("3.9"), Some(3));
        assert_eq!(parse_stock_count("-2"), Some(-2));
        assert_eq!(parse_stock_count("+8"), Some(8));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(parse_stock_count("abc"), None);
        assert_eq!(parse_stock_count(""), None);
        assert_eq!(parse_stock_count("   "), None);
        assert_eq!(parse_stock_count("-"), None);
        assert_eq!(parse_stock_count("x5"), None);
    }

    #[test]
    fn test_parse_is_strictly_base_ten() {
        // hex prefixes are not honored; "0x10" reads as 0 and is flagged
        assert_eq!(parse_stock_count("0x10"), Some(0));
        assert_eq!(parse_stock_count("010"), Some(10));
        assert_eq!(StockLevel::classify("0x10", LOW_STOCK_THRESHOLD), StockLevel::Low(0));
    }

    #[test]
    fn test_parse_saturates_on_overflow() {
        assert_eq!(parse_stock_count("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_stock_count("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_classify_against_threshold() {
        assert_eq!(StockLevel::classify("4", LOW_STOCK_THRESHOLD), StockLevel::Low(4));
        assert_eq!(StockLevel::classify("0", LOW_STOCK_THRESHOLD), StockLevel::Low(0));
        assert_eq!(
            StockLevel::classify("5", LOW_STOCK_THRESHOLD),
            StockLevel::Sufficient(5)
        );
        assert_eq!(
            StockLevel::classify("abc", LOW_STOCK_THRESHOLD),
            StockLevel::Unparsed
        );
        assert!(!StockLevel::Unparsed.is_low());
    }
}
