//! Domain types for the Shoestring cart.

mod cart;
mod id;
mod price;
mod product;

pub use cart::Cart;
pub use id::ProductId;
pub use price::format_price;
pub use product::{Product, StockRecord};
