//! Cart mutation and display commands.
//!
//! Each command loads the persisted cart, runs one operation through the
//! manager, and prints the resulting cart. Rejections surface as console
//! notifications, not process failures.

use std::sync::Arc;

use shoestring_cart::config::CartConfig;
use shoestring_cart::state::CartState;
use shoestring_cart::store::CartStore;
use shoestring_core::{Cart, ProductId, format_price};

use super::ConsoleNotifier;

/// Load the shared cart state from environment configuration.
async fn load_state() -> Result<CartState, Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    Ok(CartState::load(&config, Arc::new(ConsoleNotifier)).await)
}

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub async fn add(product_id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let state = load_state().await?;
    state.add_product(ProductId::new(product_id)).await;
    print_cart(&state.cart().await);
    Ok(())
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub async fn remove(product_id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let state = load_state().await?;
    state.remove_product(ProductId::new(product_id)).await;
    print_cart(&state.cart().await);
    Ok(())
}

/// Set the quantity of a product already in the cart.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub async fn set(product_id: i32, amount: u32) -> Result<(), Box<dyn std::error::Error>> {
    let state = load_state().await?;
    state
        .update_product_amount(ProductId::new(product_id), amount)
        .await;
    print_cart(&state.cart().await);
    Ok(())
}

/// Show the cart contents and subtotal.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let state = load_state().await?;
    print_cart(&state.cart().await);
    Ok(())
}

/// Delete the persisted cart.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the store file
/// cannot be removed.
#[allow(clippy::print_stdout)]
pub async fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    CartStore::new(config.store_path).clear().await?;
    println!("Cart cleared.");
    Ok(())
}

/// Print the cart as a small table with a subtotal line.
#[allow(clippy::print_stdout)]
fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }

    println!("{:>4}  {:>6}  {:>10}  {:>10}  title", "id", "qty", "unit", "total");
    for item in cart.items() {
        println!(
            "{:>4}  {:>6}  {:>10}  {:>10}  {}",
            item.id,
            item.amount,
            item.price_display(),
            format_price(item.subtotal()),
            item.title,
        );
    }
    println!(
        "{} items, subtotal {}",
        cart.total_items(),
        format_price(cart.subtotal())
    );
}
