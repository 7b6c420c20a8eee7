//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Birth dates are stored as fixed-width `YYYY-MM-DD` strings so that SQL
//! string comparison orders them chronologically. Dates outside years
//! `0000..=9999` have no such form and are refused.

use bmdb_core::{Actor, date};
use chrono::NaiveDate;

use crate::{Error, Result};

/// Column list shared by every `SELECT` that materialises an [`Actor`].
pub const ACTOR_COLUMNS: &str = "id, first_name, last_name, gender, birth_date";

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> Result<String> { Ok(date::format(d)?) }

pub fn decode_date(s: &str) -> Result<NaiveDate> { Ok(date::parse(s)?) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from an `actors` row.
pub struct RawActor {
  pub id:         i32,
  pub first_name: String,
  pub last_name:  String,
  pub gender:     String,
  pub birth_date: String,
}

impl RawActor {
  /// Read a row selected with [`ACTOR_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawActor {
      id:         row.get(0)?,
      first_name: row.get(1)?,
      last_name:  row.get(2)?,
      gender:     row.get(3)?,
      birth_date: row.get(4)?,
    })
  }

  pub fn into_actor(self) -> Result<Actor> {
    Ok(Actor {
      id:         self.id,
      first_name: self.first_name,
      last_name:  self.last_name,
      gender:     self.gender,
      birth_date: decode_date(&self.birth_date)?,
    })
  }
}
