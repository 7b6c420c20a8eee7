//! Core types and trait definitions for the bmdb actor catalogue.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod actor;
pub mod date;
pub mod store;

pub use actor::{Actor, ActorId};
pub use store::{ActorStore, StoreError};
