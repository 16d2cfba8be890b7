//! Number and text formatting shared by the financial tables and the
//! flowed content.

use crate::types::{QuoteError, Result};

/// Format a monetary value with thousands grouping.
///
/// The integer part is grouped into threes from the right with `,`; a
/// fractional part, when present, is reattached verbatim. The sign stays
/// outside the grouping.
pub fn format_price(value: f64) -> String {
    let rendered = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    };

    let negative = rendered.starts_with('-');
    let unsigned = rendered.trim_start_matches('-');
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Strict numeric parse for user- or scraper-supplied figures. Grouping
/// separators and a leading Euro sign are tolerated; anything else fails
/// with a format error rather than being coerced.
pub fn parse_decimal(text: &str) -> Result<f64> {
    let cleaned = text.trim().trim_start_matches('€').replace(',', "");
    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|_| QuoteError::Format(format!("not a number: {text:?}")))
}

/// `percent/100 * base`, rounded to 5 decimal places.
pub fn calculate_percentage(percent: f64, base: f64) -> f64 {
    (percent / 100.0 * base * 100_000.0).round() / 100_000.0
}

/// Minimal rendering of a number: no trailing `.0`, no grouping. Used for
/// the fee-percentage label.
pub fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Collapse runs of whitespace to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace characters outside the printable 7-bit range with spaces, then
/// collapse and trim. Scraped text goes through this before it reaches the
/// builtin WinAnsi font.
pub fn strip_unprintable(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|ch| if (' '..='~').contains(&ch) { ch } else { ' ' })
        .collect();
    collapse_whitespace(&replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_small_values_unchanged() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(42.0), "42");
        assert_eq!(format_price(100.0), "100");
    }

    #[test]
    fn test_format_price_one_separator() {
        assert_eq!(format_price(1234.0), "1,234");
        assert_eq!(format_price(23650.0), "23,650");
        assert_eq!(format_price(999999.0), "999,999");
    }

    #[test]
    fn test_format_price_two_separators() {
        assert_eq!(format_price(1234567.0), "1,234,567");
        assert_eq!(format_price(25305678.0), "25,305,678");
    }

    #[test]
    fn test_format_price_fraction_reattached() {
        assert_eq!(format_price(1234.5), "1,234.5");
        assert_eq!(format_price(1655.5), "1,655.5");
        assert_eq!(format_price(25305.5), "25,305.5");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-1234.5), "-1,234.5");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("23650").unwrap(), 23650.0);
        assert_eq!(parse_decimal(" €23,650 ").unwrap(), 23650.0);
        assert_eq!(parse_decimal("1234.5").unwrap(), 1234.5);
        assert!(matches!(
            parse_decimal("on request"),
            Err(QuoteError::Format(_))
        ));
        assert!(parse_decimal("").is_err());
    }

    #[test]
    fn test_calculate_percentage() {
        assert_eq!(calculate_percentage(7.0, 1000.0), 70.0);
        assert_eq!(calculate_percentage(0.0, 1000.0), 0.0);
        assert_eq!(calculate_percentage(7.0, 23650.0), 1655.5);
    }

    #[test]
    fn test_calculate_percentage_rounds_to_five_places() {
        // 1/3 of 1 is an infinite expansion; the result carries 5 decimals.
        let value = calculate_percentage(100.0 / 3.0, 1.0);
        assert_eq!(value, 0.33333);
    }

    #[test]
    fn test_trim_number() {
        assert_eq!(trim_number(7.0), "7");
        assert_eq!(trim_number(7.5), "7.5");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn test_strip_unprintable() {
        assert_eq!(strip_unprintable("LED\u{00a0}headlights"), "LED headlights");
        assert_eq!(strip_unprintable("\u{1f697} fast"), "fast");
        assert_eq!(strip_unprintable("plain"), "plain");
    }
}
