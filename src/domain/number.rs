//! Numeric text parsing
//!
//! Shared by the strict entry parser (`MonetaryAmount`) and the tolerant
//! transport parser (`ProfitFigures`). Accepts the notations a browser
//! number field can submit: optional sign, decimal point and scientific
//! notation. Grouping separators are not accepted.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest exponent accepted in scientific notation (`Decimal` holds 28 digits).
const MAX_EXPONENT: u32 = 28;

/// Parse raw text into an exact decimal.
///
/// Surrounding whitespace is ignored and blank text reads as zero.
/// Returns `None` for anything that is not a finite decimal number,
/// including `NaN`, `Infinity`, hex literals and grouped digits.
pub fn parse_number(raw: &str) -> Option<Decimal> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(Decimal::ZERO);
    }

    // rust_decimal silently skips underscores
    if text.contains('_') {
        return None;
    }

    let text = match text.strip_prefix('+') {
        Some(rest) if rest.starts_with(|c: char| c == '+' || c == '-') => return None,
        Some(rest) => rest,
        None => text,
    };

    match text.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => {
            let exponent = text[idx + 1..].trim_start_matches(|c: char| c == '+' || c == '-');
            if exponent.is_empty() || !exponent.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let magnitude: u32 = exponent.parse().ok()?;
            if magnitude > MAX_EXPONENT {
                return None;
            }
            Decimal::from_scientific(text).ok()
        }
        None => Decimal::from_str(text).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_number("500000"), Some(dec!(500000)));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(parse_number("  42\n"), Some(dec!(42)));
    }

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(parse_number(""), Some(Decimal::ZERO));
        assert_eq!(parse_number("   "), Some(Decimal::ZERO));
    }

    #[test]
    fn test_signs_and_fractions() {
        assert_eq!(parse_number("-250"), Some(dec!(-250)));
        assert_eq!(parse_number("+7"), Some(dec!(7)));
        assert_eq!(parse_number("1.5"), Some(dec!(1.5)));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_number("1e3"), Some(dec!(1000)));
        assert_eq!(parse_number("2.5E2"), Some(dec!(250)));
        assert_eq!(parse_number("1e-2"), Some(dec!(0.01)));
    }

    #[test]
    fn test_huge_exponent_rejected() {
        assert_eq!(parse_number("1e400"), None);
    }

    #[test]
    fn test_non_numeric_rejected() {
        for raw in ["abc", "NaN", "Infinity", "0x10", "1,000", "1_000", "12abc", "e5", "1e"] {
            assert_eq!(parse_number(raw), None, "expected {raw:?} to be rejected");
        }
    }
}
