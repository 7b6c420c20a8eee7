//! Actor — the single entity exposed by the catalogue.
//!
//! Identity is owned by the store: a freshly submitted actor carries id `0`
//! (or no id at all on the wire) and receives its real id when saved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage-assigned actor identifier.
pub type ActorId = i32;

/// A performer in the movie database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
  /// `0` until the store has persisted the record.
  #[serde(default)]
  pub id:         ActorId,
  pub first_name: String,
  pub last_name:  String,
  /// Free-form; matched exactly by [`find_by_gender`](crate::ActorStore::find_by_gender).
  pub gender:     String,
  /// Calendar date, strictly `YYYY-MM-DD` on the wire.
  #[serde(with = "crate::date")]
  pub birth_date: NaiveDate,
}

impl Actor {
  /// Build an actor that has not been persisted yet.
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    gender: impl Into<String>,
    birth_date: NaiveDate,
  ) -> Self {
    Self {
      id: 0,
      first_name: first_name.into(),
      last_name: last_name.into(),
      gender: gender.into(),
      birth_date,
    }
  }

  /// Whether this record carries an id a store could have assigned.
  pub fn is_persisted(&self) -> bool { self.id > 0 }
}
