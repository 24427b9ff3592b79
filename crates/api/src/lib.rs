//! HTTP front end for the Lektury catalog.
//!
//! Exposes book and author listings over JSON, backed by the cached
//! aggregators in `lektury_catalog`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod sweeper;

pub use config::Settings;
pub use error::ApiError;
pub use routes::{AppState, router};
pub use sweeper::spawn_cache_sweeper;
