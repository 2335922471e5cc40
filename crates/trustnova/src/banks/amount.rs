//! Parsing of the free-text loan amount column, e.g. `"3-5L"` or `"2,50,000"`.

use thiserror::Error;

/// Rupees in one lakh.
pub const LAKH: u64 = 100_000;

const LAKH_SUFFIXES: [&str; 3] = ["LAKHS", "LAKH", "L"];

/// Failure to interpret an amount or amount range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("amount text is empty")]
    Empty,
    #[error("'{token}' is not a valid amount")]
    InvalidNumber { token: String },
    #[error("amount range '{text}' starts above where it ends")]
    InvertedRange { text: String },
}

/// Inclusive bounds parsed from an amount range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountRange {
    pub min: u64,
    pub max: u64,
}

impl AmountRange {
    pub fn contains(&self, amount: u64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Parses `"A-B"` into two bounds or a single amount into `min == max`.
///
/// Whitespace is removed, the text is uppercased and a lakh suffix on a token
/// multiplies that token only, so `"3-5L"` yields `(3, 500000)`.
pub fn parse_amount_range(text: &str) -> Result<AmountRange, ParseError> {
    let compact = compact(text);
    if compact.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = compact.split('-').collect();
    let (min, max) = if parts.len() == 2 {
        (parse_token(parts[0])?, parse_token(parts[1])?)
    } else {
        let value = parse_token(&compact)?;
        (value, value)
    };

    if min > max {
        return Err(ParseError::InvertedRange {
            text: text.trim().to_string(),
        });
    }

    Ok(AmountRange { min, max })
}

/// Parses a single amount token such as `"2.5L"` or `"250,000"`.
pub fn parse_amount(text: &str) -> Result<u64, ParseError> {
    let compact = compact(text);
    if compact.is_empty() {
        return Err(ParseError::Empty);
    }
    parse_token(&compact)
}

fn compact(text: &str) -> String {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

fn parse_token(token: &str) -> Result<u64, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        token: token.to_string(),
    };
    let digits = token.replace(',', "");

    for suffix in LAKH_SUFFIXES {
        if let Some(number) = digits.strip_suffix(suffix) {
            if !is_decimal(number) {
                return Err(invalid());
            }
            let lakhs: f64 = number.parse().map_err(|_| invalid())?;
            let rupees = lakhs * LAKH as f64;
            if rupees >= u64::MAX as f64 {
                return Err(invalid());
            }
            // 2.3 * 100000 is 229999.99999999997 in f64
            return Ok(rupees.round() as u64);
        }
    }

    if !is_decimal(&digits) || digits.contains('.') {
        return Err(invalid());
    }
    digits.parse::<u64>().map_err(|_| invalid())
}

/// Digits with at most one decimal point; no sign or exponent.
fn is_decimal(number: &str) -> bool {
    number.chars().any(|ch| ch.is_ascii_digit())
        && number.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
        && number.matches('.').count() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lakh_suffix_on_both_tokens() {
        let range = parse_amount_range("1L-5L").expect("range parses");
        assert_eq!(range, AmountRange { min: 100_000, max: 500_000 });
    }

    #[test]
    fn lakh_suffix_applies_only_to_its_own_token() {
        let range = parse_amount_range("3-5L").expect("range parses");
        assert_eq!(range, AmountRange { min: 3, max: 500_000 });
    }

    #[test]
    fn strips_whitespace_case_and_thousands_separators() {
        let range = parse_amount_range(" 50,000 - 2.5 lakh ").expect("range parses");
        assert_eq!(range, AmountRange { min: 50_000, max: 250_000 });
        assert_eq!(parse_amount("2.3l").expect("amount parses"), 230_000);
        assert_eq!(parse_amount("10 Lakhs").expect("amount parses"), 1_000_000);
    }

    #[test]
    fn lakh_and_plain_tokens_share_one_number_grammar() {
        for text in ["1E3L", "1e3", "+5L", "+500", "-", "INFL", "NANL", ".L", "1.2.3L"] {
            assert!(
                matches!(parse_amount(text), Err(ParseError::InvalidNumber { .. })),
                "{text} should be rejected"
            );
        }
        assert_eq!(parse_amount(".5L").expect("amount parses"), 50_000);
        assert_eq!(parse_amount("12.L").expect("amount parses"), 1_200_000);
    }

    #[test]
    fn oversized_lakh_amounts_are_rejected() {
        assert!(matches!(
            parse_amount("100000000000000000000L"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_amount_range("1L-184467440737096L"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert_eq!(
            parse_amount("1000000L").expect("amount parses"),
            100_000_000_000
        );
    }

    #[test]
    fn single_amount_sets_both_bounds() {
        let range = parse_amount_range("250000").expect("amount parses");
        assert_eq!(range.min, 250_000);
        assert_eq!(range.max, 250_000);
        assert!(range.contains(250_000));
        assert!(!range.contains(250_001));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(parse_amount_range("   "), Err(ParseError::Empty));
        assert!(matches!(
            parse_amount_range("abc-5L"),
            Err(ParseError::InvalidNumber { token }) if token == "ABC"
        ));
        assert!(matches!(
            parse_amount_range("1-2-3"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_amount_range("1L-"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_amount("2.5"),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn rejects_inverted_ranges() {
        assert_eq!(
            parse_amount_range("10L-5L"),
            Err(ParseError::InvertedRange {
                text: "10L-5L".to_string()
            })
        );
    }

    #[test]
    fn valid_ranges_never_invert() {
        for text in ["1-3L", "1L-3L", "0.5L-20L", "100000-100000", "7L", "3-5L"] {
            let range = parse_amount_range(text).expect("range parses");
            assert!(range.min <= range.max, "{text} produced {range:?}");
        }
    }
}
