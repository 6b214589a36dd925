//! Shoestring Core - Shared types library.
//!
//! This crate provides the domain types used across all Shoestring components:
//! - `cart` - The cart state manager library
//! - `cli` - Command-line front end for driving a store-backed cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, catalog records, and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
