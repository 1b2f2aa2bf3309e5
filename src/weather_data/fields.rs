//! Coercion of raw column text into typed, nullable values.
//!
//! None of these functions fail: anything that is missing, marked with the
//! sentinel, or not parseable as the column's type becomes `None`.

use chrono::{DateTime, NaiveDateTime, Utc};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];

/// Trims `raw` and returns it unless it is empty or equal to `missing`.
pub fn present<'a>(raw: &'a str, missing: &str) -> Option<&'a str> {
    let value = raw.trim();
    if value.is_empty() || value == missing {
        None
    } else {
        Some(value)
    }
}

pub fn parse_optional_f64(raw: &str, missing: &str) -> Option<f64> {
    present(raw, missing)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

pub fn parse_optional_text(raw: &str, missing: &str) -> Option<String> {
    present(raw, missing).map(str::to_string)
}

/// Parses an upstream `valid` column (`YYYY-MM-DD HH:MM`, UTC).
pub fn parse_optional_timestamp(raw: &str, missing: &str) -> Option<DateTime<Utc>> {
    let value = present(raw, missing)?;
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}
