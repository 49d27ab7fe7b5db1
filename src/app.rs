//! Application-level store wiring.
//!
//! `App` owns one store per backend collection plus the single cross-store
//! rule the system has: deleting an ingredient refreshes the cocktail
//! cache, because cocktails embed the ingredients they reference.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, Transport};
use crate::config::Settings;
use crate::models::{Cocktail, Ingredient, Slot};
use crate::store::ResourceStore;

pub struct App {
    pub ingredients: ResourceStore<Ingredient>,
    pub cocktails: ResourceStore<Cocktail>,
    pub slots: ResourceStore<Slot>,
}

impl App {
    /// Wire the stores against the configured backend.
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let transport: Arc<dyn Transport> = Arc::new(ApiClient::new(settings)?);
        Ok(Self::with_transport(transport))
    }

    /// Wire the stores over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            ingredients: ResourceStore::new(transport.clone()),
            cocktails: ResourceStore::new(transport.clone()),
            slots: ResourceStore::new(transport),
        }
    }

    /// Refresh every store from the backend.
    ///
    /// Per-store failures are logged by the stores themselves; a failed
    /// collection keeps its previous snapshot.
    pub async fn refresh_all(&self) {
        let (ingredients, cocktails, slots) = futures::join!(
            self.ingredients.refresh(),
            self.cocktails.refresh(),
            self.slots.refresh(),
        );

        let failures = [
            ingredients.is_err(),
            cocktails.is_err(),
            slots.is_err(),
        ]
        .iter()
        .filter(|&&failed| failed)
        .count();

        if failures == 0 {
            info!("all caches refreshed");
        } else {
            warn!(failures, "some caches failed to refresh");
        }
    }

    /// Delete an ingredient and resync every cache that may reference it.
    ///
    /// Cocktails embed ingredient records, so a successful deletion
    /// refreshes the cocktail store after the ingredient store's own
    /// resync, strictly in that order, before this call resolves. The
    /// cocktail resync is a read and fails soft.
    pub async fn delete_ingredient(&self, id: i64) -> Result<(), ApiError> {
        self.ingredients.delete(id).await?;
        let _ = self.cocktails.refresh().await;
        Ok(())
    }
}
