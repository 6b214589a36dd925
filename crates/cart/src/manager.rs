//! The cart state manager: the three mutations and the failure contract.
//!
//! Every mutation follows the same policy: fetch a fresh stock snapshot by
//! id, compute the full next cart value, persist it, and only then commit
//! it to memory. A rejected or failed operation leaves both memory and the
//! store exactly as they were and reports a single [`Notification`];
//! repeating a rejected call has no further effect.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use shoestring_core::{Cart, Product, ProductId};

use crate::catalog::{CatalogClient, CatalogError};
use crate::error::CartError;
use crate::notify::{Notification, Notifier};
use crate::store::CartStore;

/// Owns the in-memory cart and mediates all mutations.
///
/// The cart has exactly one writer: this manager. UI consumers go through
/// [`crate::state::CartState`], which serializes access behind a mutex.
pub struct CartManager {
    cart: Cart,
    catalog: CatalogClient,
    store: CartStore,
    notifier: Arc<dyn Notifier>,
}

impl CartManager {
    /// Create a manager, loading the persisted cart from the store.
    pub async fn load(
        catalog: CatalogClient,
        store: CartStore,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = store.load().await;
        if !cart.is_empty() {
            info!(
                products = cart.len(),
                items = cart.total_items(),
                "restored persisted cart"
            );
        }

        Self {
            cart,
            catalog,
            store,
            notifier,
        }
    }

    /// Read-only view of the current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Inserts the product with amount 1, or increments an existing entry.
    /// Rejected (cart unchanged, user notified) when the product is not in
    /// the catalog or the new amount would exceed the fresh stock snapshot.
    #[instrument(skip(self), fields(id = %product_id))]
    pub async fn add_product(&mut self, product_id: ProductId) {
        if let Err(e) = self.try_add_product(product_id).await {
            self.report(&e, Notification::AddFailed);
        }
    }

    /// Remove a product's entry from the cart entirely.
    ///
    /// Rejected (cart unchanged, user notified) when the ID has no entry.
    #[instrument(skip(self), fields(id = %product_id))]
    pub async fn remove_product(&mut self, product_id: ProductId) {
        if let Err(e) = self.try_remove_product(product_id).await {
            self.report(&e, Notification::RemoveFailed);
        }
    }

    /// Set the quantity of an existing cart entry.
    ///
    /// Rejected (cart unchanged, user notified) when `amount` is 0, the ID
    /// has no entry, or `amount` exceeds the fresh stock snapshot.
    #[instrument(skip(self), fields(id = %product_id, amount))]
    pub async fn update_product_amount(&mut self, product_id: ProductId, amount: u32) {
        if let Err(e) = self.try_update_amount(product_id, amount).await {
            self.report(&e, Notification::UpdateFailed);
        }
    }

    async fn try_add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let product = match self.catalog.get_product(product_id).await {
            Ok(product) => product,
            Err(CatalogError::NotFound(id)) => return Err(CartError::ProductNotFound(id)),
            Err(e) => return Err(e.into()),
        };

        let current = self.cart.get(product_id).map_or(0, |item| item.amount);
        let requested = current + 1;
        self.check_stock(product_id, requested).await?;

        let mut next = self.cart.clone();
        if current == 0 {
            next.push(Product {
                amount: 1,
                ..product
            });
        } else {
            next.set_amount(product_id, requested);
        }

        self.commit(next).await
    }

    async fn try_remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let mut next = self.cart.clone();
        if !next.remove(product_id) {
            return Err(CartError::NotInCart(product_id));
        }

        self.commit(next).await
    }

    async fn try_update_amount(
        &mut self,
        product_id: ProductId,
        amount: u32,
    ) -> Result<(), CartError> {
        if amount == 0 {
            return Err(CartError::InvalidAmount);
        }
        if !self.cart.contains(product_id) {
            return Err(CartError::NotInCart(product_id));
        }
        self.check_stock(product_id, amount).await?;

        let mut next = self.cart.clone();
        next.set_amount(product_id, amount);

        self.commit(next).await
    }

    /// Fetch a fresh stock snapshot and verify it covers `requested` units.
    async fn check_stock(&self, product_id: ProductId, requested: u32) -> Result<(), CartError> {
        let stock = match self.catalog.get_stock(product_id).await {
            Ok(stock) => stock,
            Err(CatalogError::NotFound(id)) => return Err(CartError::ProductNotFound(id)),
            Err(e) => return Err(e.into()),
        };

        if requested > stock.amount {
            return Err(CartError::OutOfStock {
                id: product_id,
                requested,
                available: stock.amount,
            });
        }
        Ok(())
    }

    /// Persist the next cart value, committing to memory only on success.
    async fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        self.store.save(&next).await?;
        self.cart = next;
        Ok(())
    }

    fn report(&self, error: &CartError, fallback: Notification) {
        warn!(error = %error, "cart operation rejected");
        self.notifier.notify(error.notification(fallback));
    }
}
