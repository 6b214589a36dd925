//! Catalog browsing command.

use shoestring_cart::catalog::CatalogClient;
use shoestring_cart::config::CartConfig;

/// List catalog products with their live stock levels.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the catalog
/// request fails.
#[allow(clippy::print_stdout)]
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let catalog = CatalogClient::new(&config.catalog);

    let products = catalog.list_products().await?;
    if products.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    println!("{:>4}  {:>10}  {:>6}  title", "id", "price", "stock");
    for product in products {
        // Stock is a separate id-keyed record; a missing one reads as 0
        let stock = catalog
            .get_stock(product.id)
            .await
            .map_or(0, |record| record.amount);

        println!(
            "{:>4}  {:>10}  {:>6}  {}",
            product.id,
            product.price_display(),
            stock,
            product.title,
        );
    }
    Ok(())
}
