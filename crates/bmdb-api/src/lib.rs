//! JSON REST API for the bmdb actor catalogue.
//!
//! Exposes an axum [`Router`] backed by any [`bmdb_core::ActorStore`].
//! Tracing, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = bmdb_api::api_router(Arc::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod actors;
pub mod error;
pub mod extract;

use std::sync::Arc;

use axum::{
  Router,
  http::Method,
  routing::get,
};
use bmdb_core::ActorStore;
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// Query routes are static segments, so they win over `/{id}` for the same
/// path. The returned `Router<()>` can be merged into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ActorStore + 'static,
{
  Router::new()
    .route(
      "/api/actors",
      get(actors::list::<S>)
        .post(actors::create::<S>)
        .put(actors::update::<S>),
    )
    .route(
      "/api/actors/",
      get(actors::list::<S>)
        .post(actors::create::<S>)
        .put(actors::update::<S>),
    )
    .route(
      "/api/actors/{id}",
      get(actors::get_one::<S>).delete(actors::delete_one::<S>),
    )
    .route("/api/actors/find-by-gender", get(actors::find_by_gender::<S>))
    .route(
      "/api/actors/find-lastname-starts-with",
      get(actors::find_last_name_starts_with::<S>),
    )
    .route(
      "/api/actors/find-by-birthdate-between",
      get(actors::find_by_birth_date_between::<S>),
    )
    .layer(cors_layer())
    .with_state(store)
}

/// Cross-origin requests are accepted from any origin.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PUT,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers(Any)
}
