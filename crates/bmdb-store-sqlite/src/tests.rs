//! Integration tests for `SqliteStore` against an in-memory database.

use bmdb_core::{Actor, ActorId, ActorStore, StoreError};
use chrono::NaiveDate;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn streep() -> Actor { Actor::new("Meryl", "Streep", "F", date(1949, 6, 22)) }

/// Seed a handful of actors and return them as persisted.
async fn seeded(s: &SqliteStore) -> Vec<Actor> {
  let mut out = Vec::new();
  for actor in [
    streep(),
    Actor::new("Denzel", "Washington", "M", date(1954, 12, 28)),
    Actor::new("Viola", "Davis", "F", date(1965, 8, 11)),
    Actor::new("Daniel", "Day-Lewis", "M", date(1957, 4, 29)),
    Actor::new("Sigourney", "Weaver", "F", date(1949, 10, 8)),
  ] {
    out.push(s.save_actor(actor).await.unwrap());
  }
  out
}

/// Credit `actor_id` in a fresh movie so the actor row is referenced.
async fn credit(s: &SqliteStore, actor_id: ActorId) {
  s.connection()
    .call(move |conn| {
      conn.execute(
        "INSERT INTO movies (title, rating, year, director) VALUES ('Doubt', 'PG-13', 2008, 'John Patrick Shanley')",
        [],
      )?;
      let movie_id = conn.last_insert_rowid();
      conn.execute(
        "INSERT INTO credits (actor_id, movie_id, role) VALUES (?1, ?2, 'Sister Aloysius')",
        rusqlite::params![actor_id, movie_id],
      )?;
      Ok(())
    })
    .await
    .unwrap();
}

async fn uncredit(s: &SqliteStore, actor_id: ActorId) {
  s.connection()
    .call(move |conn| {
      conn.execute("DELETE FROM credits WHERE actor_id = ?1", rusqlite::params![actor_id])?;
      Ok(())
    })
    .await
    .unwrap();
}

// ─── Save / get ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_assigns_id_and_get_roundtrips() {
  let s = store().await;

  let saved = s.save_actor(streep()).await.unwrap();
  assert!(saved.id > 0);
  assert_eq!(Actor { id: 0, ..saved.clone() }, streep());

  let fetched = s.get_actor(saved.id).await.unwrap();
  assert_eq!(fetched, Some(saved));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get_actor(42).await.unwrap().is_none());
}

#[tokio::test]
async fn save_with_existing_id_updates_in_place() {
  let s = store().await;
  let saved = s.save_actor(streep()).await.unwrap();

  let mut edited = saved.clone();
  edited.first_name = "Mary Louise".into();
  let updated = s.save_actor(edited.clone()).await.unwrap();

  assert_eq!(updated, edited);
  assert_eq!(s.list_actors().await.unwrap(), vec![edited]);
}

#[tokio::test]
async fn save_with_unknown_id_inserts_with_assigned_id() {
  let s = store().await;
  let first = s.save_actor(streep()).await.unwrap();

  let mut stray = Actor::new("Viola", "Davis", "F", date(1965, 8, 11));
  stray.id = 9_999;
  let saved = s.save_actor(stray).await.unwrap();

  assert_ne!(saved.id, 9_999);
  assert!(saved.id > first.id);
  assert!(s.get_actor(9_999).await.unwrap().is_none());
  assert_eq!(s.list_actors().await.unwrap().len(), 2);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store_is_empty() {
  let s = store().await;
  assert!(s.list_actors().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_ordered_by_id() {
  let s = store().await;
  let seeded = seeded(&s).await;
  assert_eq!(s.list_actors().await.unwrap(), seeded);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record() {
  let s = store().await;
  let saved = s.save_actor(streep()).await.unwrap();

  assert!(s.delete_actor(saved.id).await.unwrap());
  assert!(s.get_actor(saved.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_returns_false() {
  let s = store().await;
  let seeded = seeded(&s).await;

  assert!(!s.delete_actor(7).await.unwrap());
  assert_eq!(s.list_actors().await.unwrap(), seeded);
}

#[tokio::test]
async fn delete_referenced_actor_is_integrity_violation() {
  let s = store().await;
  let saved = s.save_actor(streep()).await.unwrap();
  credit(&s, saved.id).await;

  for _ in 0..2 {
    let err = s.delete_actor(saved.id).await.unwrap_err();
    assert!(
      matches!(err, crate::Error::IntegrityViolation { .. }),
      "unexpected error: {err:?}"
    );
    let detail = err.integrity_violation().expect("integrity detail");
    assert!(detail.contains("FOREIGN KEY"), "detail: {detail}");
    assert_eq!(s.get_actor(saved.id).await.unwrap(), Some(saved.clone()));
  }

  uncredit(&s, saved.id).await;
  assert!(s.delete_actor(saved.id).await.unwrap());
}

// ─── Derived queries ─────────────────────────────────────────────────────────

#[tokio::test]
async fn find_by_gender_is_exact() {
  let s = store().await;
  seeded(&s).await;
  s.save_actor(Actor::new("Tilda", "Swinton", "Female", date(1960, 11, 5)))
    .await
    .unwrap();

  let women = s.find_by_gender("F".into()).await.unwrap();
  let names: Vec<_> = women.iter().map(|a| a.last_name.as_str()).collect();
  assert_eq!(names, ["Streep", "Davis", "Weaver"]);

  assert!(s.find_by_gender("f".into()).await.unwrap().is_empty());
  assert!(s.find_by_gender("X".into()).await.unwrap().is_empty());
}

#[tokio::test]
async fn find_by_last_name_prefix() {
  let s = store().await;
  seeded(&s).await;

  let w = s.find_by_last_name_prefix("W".into()).await.unwrap();
  let names: Vec<_> = w.iter().map(|a| a.last_name.as_str()).collect();
  assert_eq!(names, ["Washington", "Weaver"]);

  let day = s.find_by_last_name_prefix("Day-".into()).await.unwrap();
  assert_eq!(day.len(), 1);
  assert_eq!(day[0].first_name, "Daniel");

  assert!(s.find_by_last_name_prefix("w".into()).await.unwrap().is_empty());
  assert_eq!(s.find_by_last_name_prefix(String::new()).await.unwrap().len(), 5);
}

#[tokio::test]
async fn find_by_last_name_prefix_treats_wildcards_literally() {
  let s = store().await;
  seeded(&s).await;
  s.save_actor(Actor::new("Percy", "%Sign", "M", date(1980, 1, 1)))
    .await
    .unwrap();

  assert!(s.find_by_last_name_prefix("_".into()).await.unwrap().is_empty());
  let pct = s.find_by_last_name_prefix("%".into()).await.unwrap();
  assert_eq!(pct.len(), 1);
  assert_eq!(pct[0].last_name, "%Sign");
}

#[tokio::test]
async fn find_by_birth_date_between_is_inclusive() {
  let s = store().await;
  seeded(&s).await;

  let found = s
    .find_by_birth_date_between(date(1949, 6, 22), date(1954, 12, 28))
    .await
    .unwrap();
  let names: Vec<_> = found.iter().map(|a| a.last_name.as_str()).collect();
  assert_eq!(names, ["Streep", "Washington", "Weaver"]);

  let one_day = s
    .find_by_birth_date_between(date(1965, 8, 11), date(1965, 8, 11))
    .await
    .unwrap();
  assert_eq!(one_day.len(), 1);
  assert_eq!(one_day[0].last_name, "Davis");
}

#[tokio::test]
async fn find_by_birth_date_between_reversed_bounds_is_empty() {
  let s = store().await;
  seeded(&s).await;

  let found = s
    .find_by_birth_date_between(date(1960, 1, 1), date(1950, 1, 1))
    .await
    .unwrap();
  assert!(found.is_empty());
}

#[tokio::test]
async fn find_by_birth_date_between_clamps_unencodable_bounds() {
  let s = store().await;
  seeded(&s).await;
  let ancient = s
    .save_actor(Actor::new("Thespis", "Icaria", "M", date(0, 3, 1)))
    .await
    .unwrap();
  let distant = s
    .save_actor(Actor::new("Ada", "Future", "F", date(9999, 12, 31)))
    .await
    .unwrap();

  let early = s
    .find_by_birth_date_between(date(-200, 1, 1), date(1000, 1, 1))
    .await
    .unwrap();
  assert_eq!(early, vec![ancient]);

  let late = s
    .find_by_birth_date_between(date(2000, 1, 1), date(20_000, 1, 1))
    .await
    .unwrap();
  assert_eq!(late, vec![distant]);

  assert!(s
    .find_by_birth_date_between(date(-500, 1, 1), date(-1, 12, 31))
    .await
    .unwrap()
    .is_empty());
  assert!(s
    .find_by_birth_date_between(date(10_000, 1, 1), date(20_000, 1, 1))
    .await
    .unwrap()
    .is_empty());
}

#[tokio::test]
async fn save_rejects_dates_outside_four_digit_years() {
  let s = store().await;

  for birth_date in [date(-100, 1, 1), date(10_000, 1, 1)] {
    let err = s
      .save_actor(Actor::new("Out", "Ofrange", "X", birth_date))
      .await
      .unwrap_err();
    assert!(matches!(err, crate::Error::Date(_)), "unexpected error: {err:?}");
  }
  assert!(s.list_actors().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_refuses_ids_beyond_actor_id_range() {
  let s = store().await;
  s.connection()
    .call(|conn| {
      conn.execute(
        "INSERT INTO actors (id, first_name, last_name, gender, birth_date)
         VALUES (?1, 'Last', 'Slot', 'F', '1970-01-01')",
        rusqlite::params![ActorId::MAX],
      )?;
      Ok(())
    })
    .await
    .unwrap();

  let err = s.save_actor(streep()).await.unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)), "unexpected error: {err:?}");
  assert_eq!(s.list_actors().await.unwrap().len(), 1);
}
