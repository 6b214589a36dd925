//! Shoestring CLI - drive the store-backed cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of product 1 to the cart
//! shoestring add 1
//!
//! # Change the quantity of a product already in the cart
//! shoestring set 1 3
//!
//! # Remove a product from the cart
//! shoestring remove 1
//!
//! # Show the cart, browse the catalog, reset the cart
//! shoestring show
//! shoestring catalog
//! shoestring clear
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_BASE_URL` - Base URL of the product/stock catalog API
//! - `CART_STORE_PATH` - Path of the persisted cart file (default: cart.json)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shoestring")]
#[command(author, version, about = "Shoestring cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add {
        /// Catalog product ID
        product_id: i32,
    },
    /// Remove a product from the cart
    Remove {
        /// Catalog product ID
        product_id: i32,
    },
    /// Set the quantity of a product already in the cart
    Set {
        /// Catalog product ID
        product_id: i32,
        /// New quantity (must be at least 1)
        amount: u32,
    },
    /// Show the cart contents and subtotal
    Show,
    /// List catalog products with live stock
    Catalog,
    /// Delete the persisted cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter, defaulting to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shoestring=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Add { product_id } => commands::cart::add(product_id).await?,
        Commands::Remove { product_id } => commands::cart::remove(product_id).await?,
        Commands::Set { product_id, amount } => commands::cart::set(product_id, amount).await?,
        Commands::Show => commands::cart::show().await?,
        Commands::Catalog => commands::catalog::list().await?,
        Commands::Clear => commands::cart::clear().await?,
    }
    Ok(())
}
