//! Client core for a cocktail dispenser backend.
//!
//! The backend owns the data; this crate owns the client-side view of it:
//! one in-memory store per collection (ingredients, cocktails, dispenser
//! slots), each synchronized over a JSON REST API, plus the page routing
//! table the UI mounts on top.
//!
//! A store replaces its whole snapshot on every refresh and never merges,
//! so the cache is always a single consistent backend snapshot. Reads fail
//! soft (logged, cache untouched); writes fail loud and resync on success.

pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod routes;
pub mod store;

pub use api::{ApiClient, ApiError, Transport};
pub use app::App;
pub use config::Settings;
pub use store::{Resource, ResourceStore};
