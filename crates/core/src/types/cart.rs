//! The cart: an ordered collection of products with quantities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// An ordered sequence of products, unique by ID.
///
/// Quantity is folded into each entry's `amount`; there is never more than
/// one entry per product ID. Serializes transparently as a JSON array of
/// products, which is also the persisted wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The cart entries, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Look up an entry by product ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the cart holds an entry for this product ID.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all entries.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Sum of line subtotals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(Product::subtotal).sum()
    }

    /// Append a new entry. The caller guarantees the ID is not yet present.
    pub fn push(&mut self, product: Product) {
        debug_assert!(!self.contains(product.id));
        self.items.push(product);
    }

    /// Set the quantity of an existing entry. Returns false if the ID is
    /// absent, leaving the cart unchanged.
    pub fn set_amount(&mut self, id: ProductId, amount: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Remove the entry for this product ID. Returns false if absent.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, price_cents: i64, amount: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Sneaker {id}"),
            price: Decimal::new(price_cents, 2),
            image: format!("https://cdn.example.com/{id}.jpg"),
            amount,
        }
    }

    #[test]
    fn test_push_and_get() {
        let mut cart = Cart::new();
        cart.push(product(1, 8990, 1));
        cart.push(product(2, 12_000, 3));

        assert_eq!(cart.len(), 2);
        assert!(cart.contains(ProductId::new(1)));
        assert_eq!(cart.get(ProductId::new(2)).map(|p| p.amount), Some(3));
        assert!(cart.get(ProductId::new(9)).is_none());
    }

    #[test]
    fn test_set_amount_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.push(product(1, 8990, 1));

        assert!(!cart.set_amount(ProductId::new(2), 4));
        assert_eq!(cart.get(ProductId::new(1)).map(|p| p.amount), Some(1));
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.push(product(1, 8990, 1));

        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
        assert!(!cart.remove(ProductId::new(1)));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.push(product(1, 8990, 2));
        cart.push(product(2, 12_000, 1));

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal(), Decimal::new(29_980, 2));
    }

    #[test]
    fn test_serde_round_trip_as_plain_array() {
        let mut cart = Cart::new();
        cart.push(product(1, 8990, 2));

        let json = serde_json::to_string(&cart).expect("serialize");
        assert!(json.starts_with('['), "cart must serialize as an array: {json}");

        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        for id in [5, 1, 3] {
            cart.push(product(id, 1000, 1));
        }
        let ids: Vec<i32> = cart.items().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }
}
