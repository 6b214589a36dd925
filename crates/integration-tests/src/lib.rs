//! Test support for Shoestring integration tests.
//!
//! Provides a stub catalog HTTP server speaking the same REST shape as the
//! real catalog (`/products`, `/products/{id}`, `/stock/{id}`), bound on an
//! ephemeral port, with mutable stock so tests can shift availability
//! between operations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::{Router, routing::get};
use rust_decimal::Decimal;
use url::Url;

use shoestring_cart::config::CatalogConfig;
use shoestring_core::{Product, ProductId, StockRecord};

/// In-memory catalog fixtures served by the stub.
struct Fixtures {
    products: Vec<Product>,
    stock: RwLock<HashMap<i32, u32>>,
}

/// A running stub catalog server.
///
/// The server task is aborted when this is dropped.
pub struct StubCatalog {
    base_url: Url,
    fixtures: Arc<Fixtures>,
    server: tokio::task::JoinHandle<()>,
}

impl StubCatalog {
    /// Spawn a stub catalog on an ephemeral local port.
    ///
    /// `stock` pairs product IDs with available units; products without a
    /// pair have no stock record at all (a 404, like the real catalog).
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn(products: Vec<Product>, stock: &[(i32, u32)]) -> Self {
        let fixtures = Arc::new(Fixtures {
            products,
            stock: RwLock::new(stock.iter().copied().collect()),
        });

        let app = Router::new()
            .route("/products", get(list_products))
            .route("/products/{id}", get(get_product))
            .route("/stock", get(list_stock))
            .route("/stock/{id}", get(get_stock))
            .with_state(Arc::clone(&fixtures));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub catalog");
        let addr = listener.local_addr().expect("listener has no local addr");

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let base_url =
            Url::parse(&format!("http://{addr}/")).expect("stub catalog URL is valid");

        Self {
            base_url,
            fixtures,
            server,
        }
    }

    /// Base URL of the running stub.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Catalog client configuration pointing at the stub.
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.base_url.clone(),
            api_token: None,
            timeout: Duration::from_secs(5),
        }
    }

    /// Replace the available stock for a product.
    ///
    /// # Panics
    ///
    /// Panics if the stock lock is poisoned.
    pub fn set_stock(&self, id: i32, amount: u32) {
        self.fixtures
            .stock
            .write()
            .expect("stock lock poisoned")
            .insert(id, amount);
    }
}

impl Drop for StubCatalog {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Build a catalog product fixture.
#[must_use]
pub fn product(id: i32, title: &str, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Decimal::new(price_cents, 2),
        image: format!("https://cdn.example.com/{id}.jpg"),
        amount: 0,
    }
}

// =============================================================================
// Stub Handlers
// =============================================================================

async fn list_products(State(fixtures): State<Arc<Fixtures>>) -> Json<Vec<Product>> {
    Json(fixtures.products.clone())
}

async fn get_product(
    State(fixtures): State<Arc<Fixtures>>,
    Path(id): Path<i32>,
) -> Response {
    fixtures
        .products
        .iter()
        .find(|product| product.id.as_i32() == id)
        .map_or_else(
            || StatusCode::NOT_FOUND.into_response(),
            |product| Json(product.clone()).into_response(),
        )
}

async fn list_stock(State(fixtures): State<Arc<Fixtures>>) -> Json<Vec<StockRecord>> {
    let stock = fixtures.stock.read().expect("stock lock poisoned");
    let mut records: Vec<StockRecord> = stock
        .iter()
        .map(|(&id, &amount)| StockRecord {
            id: ProductId::new(id),
            amount,
        })
        .collect();
    records.sort_by_key(|record| record.id.as_i32());
    Json(records)
}

async fn get_stock(State(fixtures): State<Arc<Fixtures>>, Path(id): Path<i32>) -> Response {
    let stock = fixtures.stock.read().expect("stock lock poisoned");
    stock.get(&id).map_or_else(
        || StatusCode::NOT_FOUND.into_response(),
        |&amount| {
            Json(StockRecord {
                id: ProductId::new(id),
                amount,
            })
            .into_response()
        },
    )
}
