//! Catalog product and stock records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;
use super::price::format_price;

/// A catalog product, plus the quantity currently held in the cart.
///
/// `amount` is cart-local state, not catalog state: catalog responses carry
/// no quantity, so it defaults to 0 on deserialization and is only
/// meaningful for entries inside a [`super::Cart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Product image URL.
    pub image: String,
    /// Quantity held in the cart (0 for plain catalog records).
    #[serde(default)]
    pub amount: u32,
}

impl Product {
    /// Line subtotal: unit price times cart quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }

    /// Unit price formatted for display (e.g., "$19.99").
    #[must_use]
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }
}

/// Remotely authoritative available quantity for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Catalog product ID.
    pub id: ProductId,
    /// Units currently available.
    pub amount: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneaker() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Canvas High Top".to_string(),
            price: Decimal::new(8990, 2),
            image: "https://cdn.example.com/canvas-high-top.jpg".to_string(),
            amount: 2,
        }
    }

    #[test]
    fn test_line_subtotal() {
        assert_eq!(sneaker().subtotal(), Decimal::new(17_980, 2));
    }

    #[test]
    fn test_amount_defaults_to_zero_for_catalog_records() {
        // Catalog responses have no `amount` field
        let json = r#"{"id":3,"title":"Runner","price":"120.00","image":"https://cdn.example.com/runner.jpg"}"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.amount, 0);
    }

    #[test]
    fn test_stock_record_deserializes() {
        let stock: StockRecord = serde_json::from_str(r#"{"id":3,"amount":5}"#).expect("deserialize");
        assert_eq!(stock.id, ProductId::new(3));
        assert_eq!(stock.amount, 5);
    }
}
