//! In-memory resource stores.
//!
//! A store is the single source of truth for one backend collection: it
//! owns an id-keyed cache and the operations that synchronize it with the
//! backend. Refreshing replaces the whole snapshot; reads never touch the
//! network.
//!
//! Failure policy: reads fail soft (logged, explicit result, cache left
//! untouched), writes fail loud (logged and returned to the caller).

pub mod resource;

pub use resource::{Resource, ResourceStore};
