//! The `ActorStore` trait and its error classification.
//!
//! The trait is implemented by storage backends (e.g. `bmdb-store-sqlite`).
//! The HTTP layer (`bmdb-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use chrono::NaiveDate;

use crate::actor::{Actor, ActorId};

// ─── Error classification ────────────────────────────────────────────────────

/// Lets the HTTP layer tell a referential-integrity rejection apart from any
/// other storage failure without knowing the backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// The storage engine's own message if this error is a rejected write
  /// because another record references the target; `None` otherwise.
  fn integrity_violation(&self) -> Option<&str>;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an actor store backend.
///
/// The store owns persistence and identity assignment. Every method is a
/// single self-contained call; callers hold no state between them.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ActorStore: Send + Sync {
  type Error: StoreError;

  /// All actors, ordered by id.
  fn list_actors(
    &self,
  ) -> impl Future<Output = Result<Vec<Actor>, Self::Error>> + Send + '_;

  /// Retrieve an actor by id. Returns `None` if not found.
  fn get_actor(
    &self,
    id: ActorId,
  ) -> impl Future<Output = Result<Option<Actor>, Self::Error>> + Send + '_;

  /// Insert or update.
  ///
  /// An id matching an existing record updates it in place. Anything else
  /// inserts a new record and the store assigns the id, which is reflected
  /// in the returned actor.
  fn save_actor(
    &self,
    actor: Actor,
  ) -> impl Future<Output = Result<Actor, Self::Error>> + Send + '_;

  /// Delete by id. Returns `false` if no record had that id.
  fn delete_actor(
    &self,
    id: ActorId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Actors whose gender equals `gender` exactly.
  fn find_by_gender(
    &self,
    gender: String,
  ) -> impl Future<Output = Result<Vec<Actor>, Self::Error>> + Send + '_;

  /// Actors whose last name starts with `prefix`.
  fn find_by_last_name_prefix(
    &self,
    prefix: String,
  ) -> impl Future<Output = Result<Vec<Actor>, Self::Error>> + Send + '_;

  /// Actors born within `[from, to]`, both ends inclusive. Empty when
  /// `from > to`.
  fn find_by_birth_date_between(
    &self,
    from: NaiveDate,
    to: NaiveDate,
  ) -> impl Future<Output = Result<Vec<Actor>, Self::Error>> + Send + '_;
}
