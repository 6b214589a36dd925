//! Shared cart state handle for UI consumers.

use std::sync::Arc;

use tokio::sync::Mutex;

use shoestring_core::{Cart, ProductId};

use crate::catalog::CatalogClient;
use crate::config::CartConfig;
use crate::manager::CartManager;
use crate::notify::Notifier;
use crate::store::CartStore;

/// Cheaply cloneable handle to the single process-wide cart.
///
/// Any UI consumer may hold a clone; mutations are serialized through an
/// internal mutex, so the manager remains the cart's only writer. Each
/// operation still fetches its own stock snapshot, so two rapid calls for
/// the same product observe independent snapshots (eventually consistent,
/// by design).
#[derive(Clone)]
pub struct CartState {
    inner: Arc<Mutex<CartManager>>,
}

impl CartState {
    /// Build the state from configuration, loading any persisted cart.
    pub async fn load(config: &CartConfig, notifier: Arc<dyn Notifier>) -> Self {
        let catalog = CatalogClient::new(&config.catalog);
        let store = CartStore::new(config.store_path.clone());
        Self::with_manager(CartManager::load(catalog, store, notifier).await)
    }

    /// Wrap an already-constructed manager.
    #[must_use]
    pub fn with_manager(manager: CartManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// A point-in-time copy of the cart for rendering.
    pub async fn cart(&self) -> Cart {
        self.inner.lock().await.cart().clone()
    }

    /// Add one unit of a catalog product to the cart.
    pub async fn add_product(&self, product_id: ProductId) {
        self.inner.lock().await.add_product(product_id).await;
    }

    /// Remove a product's entry from the cart entirely.
    pub async fn remove_product(&self, product_id: ProductId) {
        self.inner.lock().await.remove_product(product_id).await;
    }

    /// Set the quantity of an existing cart entry.
    pub async fn update_product_amount(&self, product_id: ProductId, amount: u32) {
        self.inner
            .lock()
            .await
            .update_product_amount(product_id, amount)
            .await;
    }
}
