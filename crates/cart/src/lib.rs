//! Shoestring Cart - cart state manager for a headless storefront.
//!
//! Holds the user's cart in memory, validates every mutation against the
//! remote catalog's stock levels, and persists the cart wholesale to a local
//! JSON store after each successful mutation.
//!
//! # Architecture
//!
//! - [`catalog::CatalogClient`] - id-keyed product and stock reads over HTTP
//! - [`store::CartStore`] - durable single-file store for the serialized cart
//! - [`manager::CartManager`] - the three mutations plus the failure contract
//! - [`state::CartState`] - cheaply cloneable shared handle for UI consumers
//!
//! Failures never propagate to the caller as errors: each operation converts
//! them into a user-facing [`notify::Notification`] and leaves the cart
//! untouched. Stock is re-fetched on every mutation, so rapid sequential
//! calls observe independent snapshots (eventually consistent by design).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use shoestring_cart::config::CartConfig;
//! use shoestring_cart::notify::TracingNotifier;
//! use shoestring_cart::state::CartState;
//! use shoestring_core::ProductId;
//!
//! let config = CartConfig::from_env()?;
//! let state = CartState::load(&config, Arc::new(TracingNotifier)).await;
//!
//! state.add_product(ProductId::new(1)).await;
//! println!("{} items", state.cart().await.total_items());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod manager;
pub mod notify;
pub mod state;
pub mod store;

pub use catalog::CatalogClient;
pub use config::CartConfig;
pub use error::CartError;
pub use manager::CartManager;
pub use notify::{Notification, Notifier};
pub use state::CartState;
pub use store::CartStore;
