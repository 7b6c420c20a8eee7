//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure a handler can produce is one of these variants, and
//! [`IntoResponse`] is the only place that turns them into a status code and
//! a `{"error": "..."}` body. Internal detail is logged, never returned.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use bmdb_core::ActorId;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  /// Delete blocked because another record references the actor.
  #[error("actor {id} is referenced elsewhere")]
  IntegrityConflict { id: ActorId },

  #[error("internal error: {0}")]
  Internal(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The request could not be turned into handler arguments.
  #[error("rejected request: {message}")]
  Rejected { status: StatusCode, message: String },
}

impl ApiError {
  pub(crate) fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    ApiError::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
      ApiError::IntegrityConflict { id } => (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("foreign key constraint issue - actor id {id} is referred to elsewhere"),
      ),
      ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal storage error".to_owned())
      }
      ApiError::Rejected { status, message } => (status, message),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

// ─── Extractor rejections ────────────────────────────────────────────────────

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self {
    ApiError::Rejected { status: r.status(), message: r.body_text() }
  }
}

impl From<QueryRejection> for ApiError {
  fn from(r: QueryRejection) -> Self {
    ApiError::Rejected { status: r.status(), message: r.body_text() }
  }
}

impl From<PathRejection> for ApiError {
  fn from(r: PathRejection) -> Self {
    ApiError::Rejected { status: r.status(), message: r.body_text() }
  }
}
