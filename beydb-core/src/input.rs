//! Parsing of raw terminal input into typed values.

use chrono::{NaiveDate, NaiveDateTime};

use crate::ParseError;

/// Storage format for battle dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Answers that count as "yes" for boolean prompts (compared lowercase).
const TRUTHY: &[&str] = &["true", "1", "t", "y", "yes"];

/// Interpret a yes/no answer. Anything not recognized as truthy is `false`.
pub fn parse_flag(input: &str) -> bool {
    let lower = input.trim().to_lowercase();
    TRUTHY.contains(&lower.as_str())
}

/// Parse a weight in grams. Must be finite and non-negative.
pub fn parse_weight(input: &str) -> Result<f64, ParseError> {
    match input.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(ParseError::InvalidWeight(input.trim().to_string())),
    }
}

/// Parse an integer identifier. `field` names it in the error message.
pub fn parse_id(field: &str, input: &str) -> Result<i64, ParseError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::invalid_id(field, input.trim()))
}

/// Like [`parse_id`], but blank input means "no id".
pub fn parse_optional_id(field: &str, input: &str) -> Result<Option<i64>, ParseError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_id(field, input).map(Some)
}

/// Parse a battle date, either `YYYY-MM-DD HH:MM:SS` or a bare `YYYY-MM-DD`
/// (midnight). Returns it normalized to [`DATE_FORMAT`].
pub fn parse_battle_date(input: &str) -> Result<String, ParseError> {
    let trimmed = input.trim();
    let parsed = NaiveDateTime::parse_from_str(trimmed, DATE_FORMAT).or_else(|_| {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map(|d| d.and_time(Default::default()))
    });
    parsed
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .map_err(|_| ParseError::InvalidDate(trimmed.to_string()))
}

/// Trim a free-text field that must not be blank.
pub fn require(field: &str, input: &str) -> Result<String, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ParseError::MissingField(field.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
