//! The generic resource store.
//!
//! One implementation, three instantiations (ingredients, cocktails,
//! slots). The cache maps server-assigned id to record and is replaced
//! wholesale on every successful refresh - it never holds a mix of pre-
//! and post-fetch data for a collection.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::api::{ApiError, Transport};

/// A backend collection a store can cache.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path segment under `/api/` naming the collection.
    const COLLECTION: &'static str;

    /// Fields a POST sends when creating a record. The backend assigns
    /// ids, so this type never carries one.
    type Fields: Serialize + Send + Sync;

    /// Server-assigned identity.
    fn id(&self) -> i64;
}

/// Single source of truth for one backend collection.
///
/// Methods take `&self`, so a store can be shared behind an `Arc`. The
/// cache lock is only held to copy or replace the snapshot, never across
/// an await - which also means overlapping `refresh` calls are not
/// serialized: whichever response resolves last wins the cache.
pub struct ResourceStore<T: Resource> {
    transport: Arc<dyn Transport>,
    cache: RwLock<HashMap<i64, T>>,
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn path() -> String {
        format!("/api/{}", T::COLLECTION)
    }

    /// Replace the cache with the backend's current snapshot.
    ///
    /// On failure the cache stays exactly as it was. Failures are logged
    /// here, but the result is still returned so callers can tell an empty
    /// collection from a failed fetch.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        match self.fetch().await {
            Ok(records) => {
                let snapshot: HashMap<i64, T> =
                    records.into_iter().map(|r| (r.id(), r)).collect();
                let count = snapshot.len();
                *self.cache.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
                debug!(resource = T::COLLECTION, records = count, "cache replaced");
                Ok(())
            }
            Err(err) => {
                warn!(
                    resource = T::COLLECTION,
                    error = %err,
                    "refresh failed; cache left unchanged"
                );
                Err(err)
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<T>, ApiError> {
        let body = self.transport.get(&Self::path()).await?;
        let records: Vec<T> = serde_json::from_str(&body)?;
        Ok(records)
    }

    /// Create a record, then resync the cache so it reflects the
    /// server-assigned state (the new id in particular).
    pub async fn add(&self, fields: &T::Fields) -> Result<(), ApiError> {
        let body =
            serde_json::to_value(fields).map_err(|e| ApiError::Unknown(e.to_string()))?;
        if let Err(err) = self.transport.post(&Self::path(), body).await {
            error!(resource = T::COLLECTION, error = %err, "create failed");
            return Err(err);
        }
        self.resync().await;
        Ok(())
    }

    /// Delete the record with `id`, then resync the cache.
    ///
    /// The target id goes in the request body, matching the backend
    /// contract.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        if let Err(err) = self.transport.delete(&Self::path(), json!({ "id": id })).await {
            error!(resource = T::COLLECTION, id, error = %err, "delete failed");
            return Err(err);
        }
        self.resync().await;
        Ok(())
    }

    /// Refresh after a successful write. The write itself went through, so
    /// a failed resync only leaves the cache one snapshot behind; `refresh`
    /// has already logged it and the next refresh catches up.
    async fn resync(&self) {
        let _ = self.refresh().await;
    }

    /// Look up one cached record by id.
    pub fn get(&self, id: i64) -> Option<T> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// All cached records, ordered by id.
    pub fn all(&self) -> Vec<T> {
        let mut records: Vec<T> = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id());
        records
    }

    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
