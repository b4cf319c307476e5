//! Normalization of text read from markup.

use crate::error::{ExtractError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Separator between a page title and its site suffix
pub const TITLE_SEPARATOR: char = '—';

// Optional whitespace, optional sign, then the digit run
static LEADING_INT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid regex"));

/// Returns the trimmed text before the first em-dash.
///
/// Text without a separator is kept whole.
pub fn head_segment(text: &str) -> String {
    text.split(TITLE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Splits a comma separated list, trimming each entry
pub fn split_keywords(content: &str) -> Vec<String> {
    content.split(',').map(|k| k.trim().to_string()).collect()
}

/// Reads the integer at the start of `text`.
///
/// Anything after the leading digit run is ignored, so `"42 $60"` reads as 42.
/// Returns `None` when there are no leading digits.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let captures = LEADING_INT_REGEX.captures(text)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Parses a price by dropping its currency glyph
pub fn parse_price(raw: &str, field: &str) -> Result<i64> {
    let mut chars = raw.trim().chars();
    chars.next();
    parse_leading_int(chars.as_str()).ok_or_else(|| ExtractError::invalid_integer(field, raw))
}

/// Formats `discount / old_price` as a percentage with two decimals.
///
/// Ties at the third decimal round away from zero (`0.125` gives `"0.13%"`).
/// A zero result is rendered as `"0%"`. A zero old price has no meaningful
/// percentage and is rendered the same way.
pub fn format_discount_percent(discount: i64, old_price: i64) -> String {
    if old_price == 0 {
        return "0%".to_string();
    }
    let percent = discount as f64 / old_price as f64 * 100.0;
    if percent == 0.0 {
        "0%".to_string()
    } else {
        let rounded = (percent * 100.0).round() / 100.0;
        format!("{:.2}%", rounded)
    }
}

/// Rewrites a `DD/MM/YYYY` date as `DD.MM.YYYY`.
///
/// Parts are not validated as a calendar date; only the first three
/// slash separated parts are kept.
pub fn reformat_date(raw: &str) -> Result<String> {
    let parts: Vec<&str> = raw.split('/').collect();
    match parts.as_slice() {
        [day, month, year, ..] => Ok(format!("{}.{}.{}", day, month, year)),
        _ => Err(ExtractError::MalformedDate {
            text: raw.to_string(),
        }),
    }
}
