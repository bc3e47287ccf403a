//! Shared traits, the canonical date key, and lenient amount parsing.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities held by the household.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Canonical `YYYY-MM-DD` key used for equality lookups and grouping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Builds the key from a concrete date, zero padded.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the key back into a date when it is well formed.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey::from_date(date)
    }
}

impl PartialEq<str> for DateKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DateKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses the leading decimal number of `raw`, returning `None` when there is none.
///
/// Mirrors how a form field is read: surrounding whitespace is ignored and
/// trailing garbage after a valid prefix is dropped (`"12abc"` reads as 12,
/// `"1e3x"` as 1000). The sign is kept; see [`amount_or_zero`] for magnitudes.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return value.is_finite().then_some(value);
    }

    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits = bytes[exp_end..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        // A bare `e` or `e+` is trailing garbage, not an exponent.
        if digits > 0 {
            end = exp_end + digits;
        }
    }
    trimmed[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Non-negative magnitude used during aggregation.
///
/// Unparseable and negative amounts both count as zero, so totals built from
/// it are never negative.
pub fn amount_or_zero(raw: &str) -> f64 {
    parse_amount(raw).filter(|value| *value >= 0.0).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(987, 3, 4).unwrap();
        assert_eq!(DateKey::from_date(date).as_str(), "0987-03-04");
        assert_eq!(DateKey::from(date).to_date(), Some(date));
    }

    #[test]
    fn parse_amount_reads_leading_number() {
        assert_eq!(parse_amount("100"), Some(100.0));
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_amount("12abc"), Some(12.0));
        assert_eq!(parse_amount("7.abc"), Some(7.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn parse_amount_keeps_exponent_prefix() {
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("1e3x"), Some(1000.0));
        assert_eq!(parse_amount("2.5E-1kg"), Some(0.25));
        assert_eq!(parse_amount("2e"), Some(2.0));
        assert_eq!(parse_amount("2e+x"), Some(2.0));
        assert_eq!(parse_amount("-4"), Some(-4.0));
    }

    #[test]
    fn unparseable_amount_counts_as_zero() {
        assert_eq!(amount_or_zero(""), 0.0);
        assert_eq!(amount_or_zero("n/a"), 0.0);
        assert_eq!(amount_or_zero("42"), 42.0);
        assert_eq!(amount_or_zero("-5"), 0.0);
        assert_eq!(amount_or_zero("-1e3x"), 0.0);
    }
}
