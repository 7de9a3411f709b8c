use std::sync::LazyLock;

use regex::Regex;

use crate::{
    api::models::CalculationRequest,
    page::{Page, ids},
};

/// Longest leading decimal literal, the way browsers' `parseFloat` sees it.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("the numeric prefix pattern must compile")
});

/// Parse the leading number of a form value, falling back to zero.
///
/// Empty and non-numeric values, negative zero, and infinities are all zero.
#[must_use]
pub fn parse_or_zero(raw: &str) -> f64 {
    let raw = raw.trim_start_matches(is_js_whitespace);
    NUMERIC_PREFIX
        .find(raw)
        .and_then(|prefix| prefix.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(0.0)
}

/// ECMAScript white space and line terminators: Unicode `White_Space` without NEL, plus BOM.
const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

impl CalculationRequest {
    /// Read the calculator form.
    pub fn from_page(page: &impl Page) -> Self {
        let field = |id| parse_or_zero(page.input_value(id).as_deref().unwrap_or_default());
        Self {
            power: field(ids::POWER).into(),
            electricity: field(ids::ELECTRICITY).into(),
            deviation1: field(ids::DEVIATION_BEFORE).into(),
            deviation2: field(ids::DEVIATION_AFTER).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(parse_or_zero("5"), 5.0);
        assert_eq!(parse_or_zero("0.25"), 0.25);
        assert_eq!(parse_or_zero("-7.5"), -7.5);
        assert_eq!(parse_or_zero("+3"), 3.0);
        assert_eq!(parse_or_zero(".5"), 0.5);
        assert_eq!(parse_or_zero("1."), 1.0);
        assert_eq!(parse_or_zero("1e3"), 1000.0);
        assert_eq!(parse_or_zero("2.5E-1"), 0.25);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(parse_or_zero("  12.5 МВт"), 12.5);
        assert_eq!(parse_or_zero("7грн"), 7.0);
        assert_eq!(parse_or_zero("1.2.3"), 1.2);
        assert_eq!(parse_or_zero("3e"), 3.0);
        assert_eq!(parse_or_zero("3e+"), 3.0);
    }

    #[test]
    fn test_fallback_to_zero() {
        for raw in ["", "   ", "abc", "МВт5", ".", "-", "e5", "NaN", "Infinity", "-Infinity", "1e400"] {
            assert_eq!(parse_or_zero(raw), 0.0, "{raw:?}");
        }
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(parse_or_zero("-0").is_sign_positive());
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_or_zero("\t\n 5"), 5.0);
        assert_eq!(parse_or_zero("\u{a0}5"), 5.0);
        assert_eq!(parse_or_zero("\u{feff}5"), 5.0);
        assert_eq!(parse_or_zero("\u{3000}5"), 5.0);
        assert_eq!(parse_or_zero("\u{85}5"), 0.0);
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        assert_eq!(parse_or_zero("٥"), 0.0);
    }
}
