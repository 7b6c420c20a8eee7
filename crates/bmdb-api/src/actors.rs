//! Handlers for `/api/actors` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/api/actors` | All actors |
//! | `GET`    | `/api/actors/{id}` | 404 if not found |
//! | `POST`   | `/api/actors/` | Body: [`Actor`]; returns 201 + saved actor |
//! | `PUT`    | `/api/actors/` | Body: [`Actor`]; same upsert as `POST` |
//! | `DELETE` | `/api/actors/{id}` | Returns the deleted actor; 404 / 500 on failure |
//! | `GET`    | `/api/actors/find-by-gender` | `?gender=F` |
//! | `GET`    | `/api/actors/find-lastname-starts-with` | `?letter=S` |
//! | `GET`    | `/api/actors/find-by-birthdate-between` | `?ld1=YYYY-MM-DD&ld2=YYYY-MM-DD` |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use bmdb_core::{Actor, ActorId, ActorStore, StoreError as _};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{ApiJson, ApiPath, ApiQuery},
};

fn not_found(id: ActorId) -> ApiError {
  ApiError::NotFound(format!("actor {id} not found"))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/actors`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Actor>>, ApiError>
where
  S: ActorStore,
{
  let actors = store.list_actors().await.map_err(ApiError::store)?;
  Ok(Json(actors))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /api/actors/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<ActorId>,
) -> Result<Json<Actor>, ApiError>
where
  S: ActorStore,
{
  let actor = store
    .get_actor(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(actor))
}

// ─── Create / update ──────────────────────────────────────────────────────────

/// `POST /api/actors/` — returns 201 + the saved [`Actor`] with its id.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(actor): ApiJson<Actor>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ActorStore,
{
  let saved = store.save_actor(actor).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(saved)))
}

/// `PUT /api/actors/` — the same upsert as [`create`], answered with 200.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  ApiJson(actor): ApiJson<Actor>,
) -> Result<Json<Actor>, ApiError>
where
  S: ActorStore,
{
  let saved = store.save_actor(actor).await.map_err(ApiError::store)?;
  Ok(Json(saved))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /api/actors/{id}` — returns the actor as it was before deletion.
///
/// A referenced actor is left untouched and answered with 500; the storage
/// engine's explanation only goes to the log.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<ActorId>,
) -> Result<Json<Actor>, ApiError>
where
  S: ActorStore,
{
  let actor = store
    .get_actor(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;

  match store.delete_actor(id).await {
    Ok(true) => Ok(Json(actor)),
    // Removed by a concurrent request between the lookup and the delete.
    Ok(false) => Err(not_found(id)),
    Err(e) => match e.integrity_violation() {
      Some(detail) => {
        tracing::error!(actor_id = id, detail, "actor delete blocked by a reference");
        Err(ApiError::IntegrityConflict { id })
      }
      None => {
        tracing::error!(actor_id = id, error = ?e, "actor delete failed");
        Err(ApiError::Internal("exception caught during actor delete".to_owned()))
      }
    },
  }
}

// ─── Derived queries ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenderParams {
  pub gender: String,
}

/// `GET /api/actors/find-by-gender?gender=<gender>`
pub async fn find_by_gender<S>(
  State(store): State<Arc<S>>,
  ApiQuery(params): ApiQuery<GenderParams>,
) -> Result<Json<Vec<Actor>>, ApiError>
where
  S: ActorStore,
{
  let actors = store
    .find_by_gender(params.gender)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(actors))
}

#[derive(Debug, Deserialize)]
pub struct LetterParams {
  /// Usually a single letter, but any prefix is accepted.
  pub letter: String,
}

/// `GET /api/actors/find-lastname-starts-with?letter=<prefix>`
pub async fn find_last_name_starts_with<S>(
  State(store): State<Arc<S>>,
  ApiQuery(params): ApiQuery<LetterParams>,
) -> Result<Json<Vec<Actor>>, ApiError>
where
  S: ActorStore,
{
  let actors = store
    .find_by_last_name_prefix(params.letter)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(actors))
}

/// Inclusive birth-date bounds, both strict `YYYY-MM-DD` dates.
#[derive(Debug, Deserialize)]
pub struct BirthDateParams {
  #[serde(deserialize_with = "bmdb_core::date::deserialize")]
  pub ld1: NaiveDate,
  #[serde(deserialize_with = "bmdb_core::date::deserialize")]
  pub ld2: NaiveDate,
}

/// `GET /api/actors/find-by-birthdate-between?ld1=<date>&ld2=<date>`
pub async fn find_by_birth_date_between<S>(
  State(store): State<Arc<S>>,
  ApiQuery(params): ApiQuery<BirthDateParams>,
) -> Result<Json<Vec<Actor>>, ApiError>
where
  S: ActorStore,
{
  let actors = store
    .find_by_birth_date_between(params.ld1, params.ld2)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(actors))
}
