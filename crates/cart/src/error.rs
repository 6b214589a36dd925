//! Operation-level error taxonomy.
//!
//! `CartError` exists at the boundary between the manager's internal logic
//! and the notification contract: internals use `Result` and `?` as usual,
//! and the public operations convert any error into exactly one
//! [`Notification`] for the failure class it belongs to.

use thiserror::Error;

use shoestring_core::ProductId;

use crate::catalog::CatalogError;
use crate::notify::Notification;
use crate::store::StoreError;

/// Why a cart operation was rejected.
#[derive(Debug, Error)]
pub enum CartError {
    /// The catalog has no product with this ID.
    #[error("product {0} not found in catalog")]
    ProductNotFound(ProductId),

    /// The cart has no entry for this ID.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    /// The requested quantity exceeds the observed stock.
    #[error("product {id}: requested {requested} but only {available} in stock")]
    OutOfStock {
        id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Quantities must be at least 1; zero-amount entries are removed, not kept.
    #[error("amount must be at least 1")]
    InvalidAmount,

    /// The catalog read failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The persistent store write failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CartError {
    /// Map this error onto the notification for its failure class.
    ///
    /// `fallback` is the class of the operation that failed; it covers the
    /// variants that are not a distinct class of their own (transport,
    /// parse, and store failures).
    #[must_use]
    pub const fn notification(&self, fallback: Notification) -> Notification {
        match self {
            Self::OutOfStock { .. } => Notification::OutOfStock,
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_stock_display() {
        let err = CartError::OutOfStock {
            id: ProductId::new(3),
            requested: 5,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "product 3: requested 5 but only 2 in stock"
        );
    }

    #[test]
    fn test_out_of_stock_maps_to_its_own_class() {
        let err = CartError::OutOfStock {
            id: ProductId::new(1),
            requested: 2,
            available: 1,
        };
        assert_eq!(
            err.notification(Notification::AddFailed),
            Notification::OutOfStock
        );
    }

    #[test]
    fn test_other_errors_use_operation_class() {
        let err = CartError::NotInCart(ProductId::new(1));
        assert_eq!(
            err.notification(Notification::RemoveFailed),
            Notification::RemoveFailed
        );

        let err = CartError::ProductNotFound(ProductId::new(1));
        assert_eq!(
            err.notification(Notification::AddFailed),
            Notification::AddFailed
        );
    }
}
