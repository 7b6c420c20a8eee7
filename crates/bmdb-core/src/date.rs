//! Strict ISO-8601 calendar dates.
//!
//! Only the fixed-width `YYYY-MM-DD` form with a year in `0000..=9999` is
//! accepted. chrono's own parser also takes signed and five-digit years,
//! which would break the lexicographic ordering stores rely on.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

const FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
  #[error("expected a YYYY-MM-DD date, got {0:?}")]
  Format(String),

  #[error("date {0} is outside years 0000-9999")]
  OutOfRange(NaiveDate),
}

/// Whether `d` has a four-digit, unsigned year.
pub fn in_range(d: NaiveDate) -> bool { (0..=9999).contains(&d.year()) }

/// Parse exactly `YYYY-MM-DD`.
pub fn parse(s: &str) -> Result<NaiveDate, DateError> {
  let b = s.as_bytes();
  let shaped = b.len() == 10
    && b[4] == b'-'
    && b[7] == b'-'
    && b
      .iter()
      .enumerate()
      .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
  if !shaped {
    return Err(DateError::Format(s.to_owned()));
  }
  NaiveDate::parse_from_str(s, FORMAT).map_err(|_| DateError::Format(s.to_owned()))
}

/// Format as `YYYY-MM-DD`, refusing dates [`parse`] could not read back.
pub fn format(d: NaiveDate) -> Result<String, DateError> {
  if !in_range(d) {
    return Err(DateError::OutOfRange(d));
  }
  Ok(d.format(FORMAT).to_string())
}

// ─── serde `with` helpers ────────────────────────────────────────────────────

pub fn serialize<S: Serializer>(d: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
  let s = format(*d).map_err(serde::ser::Error::custom)?;
  serializer.serialize_str(&s)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
  let s = String::deserialize(deserializer)?;
  parse(&s).map_err(serde::de::Error::custom)
}
