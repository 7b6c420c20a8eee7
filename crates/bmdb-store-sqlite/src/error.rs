//! Error type for `bmdb-store-sqlite`.

use bmdb_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date error: {0}")]
  Date(#[from] bmdb_core::date::DateError),

  /// A write was rejected because another row still references the target.
  #[error("integrity violation: {detail}")]
  IntegrityViolation { detail: String },
}

impl Error {
  /// Reclassify a foreign-key constraint failure as
  /// [`Error::IntegrityViolation`]; every other error passes through.
  pub(crate) fn classify(err: tokio_rusqlite::Error) -> Self {
    match err {
      tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
        code,
        message,
      )) if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
        Error::IntegrityViolation {
          detail: message.unwrap_or_else(|| code.to_string()),
        }
      }
      other => Error::Database(other),
    }
  }
}

impl StoreError for Error {
  fn integrity_violation(&self) -> Option<&str> {
    match self {
      Error::IntegrityViolation { detail } => Some(detail),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
