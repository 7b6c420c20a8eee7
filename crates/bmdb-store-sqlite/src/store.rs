//! [`SqliteStore`] — the SQLite implementation of [`ActorStore`].

use std::path::Path;

use bmdb_core::{Actor, ActorId, ActorStore};
use chrono::{Datelike as _, NaiveDate};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{encode_date, RawActor, ACTOR_COLUMNS},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An actor store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened sqlite store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a `SELECT` over `actors` with a trailing `WHERE` clause (or none)
  /// and decode every row.
  async fn select_actors<P>(&self, filter: &'static str, params: P) -> Result<Vec<Actor>>
  where
    P: rusqlite::Params + Send + 'static,
  {
    let raws: Vec<RawActor> = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {ACTOR_COLUMNS} FROM actors {filter} ORDER BY id");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(params, RawActor::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawActor::into_actor).collect()
  }

  #[cfg(test)]
  pub(crate) fn connection(&self) -> &tokio_rusqlite::Connection { &self.conn }
}

// ─── ActorStore impl ─────────────────────────────────────────────────────────

impl ActorStore for SqliteStore {
  type Error = Error;

  async fn list_actors(&self) -> Result<Vec<Actor>> {
    self
      .select_actors("", rusqlite::params_from_iter(std::iter::empty::<String>()))
      .await
  }

  async fn get_actor(&self, id: ActorId) -> Result<Option<Actor>> {
    let raw: Option<RawActor> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {ACTOR_COLUMNS} FROM actors WHERE id = ?1"),
            rusqlite::params![id],
            RawActor::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawActor::into_actor).transpose()
  }

  async fn save_actor(&self, actor: Actor) -> Result<Actor> {
    let mut saved = actor.clone();
    let persisted = actor.is_persisted();
    let Actor { id, first_name, last_name, gender, birth_date } = actor;
    let birth_date_str = encode_date(birth_date)?;

    saved.id = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let exists = persisted
          && tx
            .query_row("SELECT 1 FROM actors WHERE id = ?1", rusqlite::params![id], |_| {
              Ok(())
            })
            .optional()?
            .is_some();

        let saved_id = if exists {
          tx.execute(
            "UPDATE actors
             SET first_name = ?2, last_name = ?3, gender = ?4, birth_date = ?5
             WHERE id = ?1",
            rusqlite::params![id, first_name, last_name, gender, birth_date_str],
          )?;
          id
        } else {
          tx.execute(
            "INSERT INTO actors (first_name, last_name, gender, birth_date)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![first_name, last_name, gender, birth_date_str],
          )?;
          let rowid = tx.last_insert_rowid();
          ActorId::try_from(rowid)
            .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, rowid))?
        };

        tx.commit()?;
        Ok(saved_id)
      })
      .await
      .map_err(Error::classify)?;

    Ok(saved)
  }

  async fn delete_actor(&self, id: ActorId) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        let n = conn.execute("DELETE FROM actors WHERE id = ?1", rusqlite::params![id])?;
        Ok(n > 0)
      })
      .await
      .map_err(Error::classify)?;
    Ok(deleted)
  }

  async fn find_by_gender(&self, gender: String) -> Result<Vec<Actor>> {
    self
      .select_actors("WHERE gender = ?1", rusqlite::params_from_iter([gender]))
      .await
  }

  async fn find_by_last_name_prefix(&self, prefix: String) -> Result<Vec<Actor>> {
    // substr comparison keeps the match case-sensitive and treats `%`/`_`
    // literally, unlike LIKE.
    self
      .select_actors(
        "WHERE substr(last_name, 1, length(?1)) = ?1",
        rusqlite::params_from_iter([prefix]),
      )
      .await
  }

  async fn find_by_birth_date_between(
    &self,
    from: NaiveDate,
    to:   NaiveDate,
  ) -> Result<Vec<Actor>> {
    // Stored dates all lie within years 0000-9999, so bounds beyond that
    // clamp to its edges without changing the result.
    if from > to || to.year() < 0 || from.year() > 9999 {
      return Ok(Vec::new());
    }
    let from = if from.year() < 0 { "0000-01-01".to_owned() } else { encode_date(from)? };
    let to   = if to.year() > 9999 { "9999-12-31".to_owned() } else { encode_date(to)? };

    self
      .select_actors(
        "WHERE birth_date BETWEEN ?1 AND ?2",
        rusqlite::params_from_iter([from, to]),
      )
      .await
  }
}
