//! Durable single-file store for the serialized cart.
//!
//! One key, one value: the whole cart as a JSON array of product records.
//! The file is read once at startup and rewritten wholesale after every
//! successful mutation. A missing or unparseable file loads as an empty
//! cart; the cart is only ever destroyed by explicitly clearing the store.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{instrument, warn};

use shoestring_core::Cart;

/// Errors that can occur when persisting the cart.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the cart failed.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed store holding the serialized cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted cart.
    ///
    /// Returns an empty cart when the file is absent or unparseable; an
    /// unparseable file is logged at warn and left in place until the next
    /// save overwrites it.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Cart {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Cart::new(),
            Err(e) => {
                warn!(error = %e, "failed to read cart store, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                warn!(error = %e, "cart store is unparseable, starting empty");
                Cart::new()
            }
        }
    }

    /// Overwrite the store with the given cart.
    ///
    /// Writes to a sibling temp file and renames it into place so a crash
    /// mid-write never leaves a truncated cart behind.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the file write fails.
    #[instrument(skip(self, cart), fields(path = %self.path.display()))]
    pub async fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let json = serde_json::to_string(cart)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    /// Delete the persisted cart.
    ///
    /// This is the explicit external reset; a missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be removed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shoestring_core::{Product, ProductId};

    fn store_in(dir: &tempfile::TempDir) -> CartStore {
        CartStore::new(dir.path().join("cart.json"))
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.push(Product {
            id: ProductId::new(1),
            title: "Canvas High Top".to_string(),
            price: Decimal::new(8990, 2),
            image: "https://cdn.example.com/1.jpg".to_string(),
            amount: 2,
        });
        cart
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cart = store_in(&dir).load().await;
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let cart = sample_cart();

        store.save(&cart).await.expect("save");
        assert_eq!(store.load().await, cart);
    }

    #[tokio::test]
    async fn test_load_unparseable_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        tokio::fs::write(store.path(), "{not json")
            .await
            .expect("write");

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.save(&sample_cart()).await.expect("save");
        store.save(&Cart::new()).await.expect("save empty");

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_file_and_tolerates_absence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.save(&sample_cart()).await.expect("save");
        store.clear().await.expect("clear");
        assert!(store.load().await.is_empty());

        // Clearing an already-empty store is fine
        store.clear().await.expect("clear again");
    }
}
