//! # HTTP Server
//!
//! The query/serialization layer: four read-only JSON endpoints plus a
//! static HTML index, served by axum. Each endpoint issues one query
//! against the injected [`CatalogStore`](crate::store::CatalogStore)
//! handle, projects the result into a view type, and returns it with
//! `Content-Type: application/json`.
//!
//! # Endpoints
//!
//! - `/` - HTML greeting
//! - `/bakeries` - all bakeries
//! - `/bakeries/{id}` - one bakery, 404 when absent
//! - `/baked_goods/by_price` - all baked goods, ascending price
//! - `/baked_goods/most_expensive` - the priciest baked good, 404 when none

pub mod baked_good_routes;
pub mod bakery_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use baked_good_routes::{baked_goods_by_price, most_expensive_baked_good};
pub use bakery_routes::{bakery_by_id, list_bakeries};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;

use std::sync::Arc;

use crate::store::CatalogStore;

/// State shared by all catalog handlers: the storage collaborator handle.
pub struct CatalogState {
    pub store: Arc<dyn CatalogStore>,
}

impl CatalogState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}
