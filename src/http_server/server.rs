//! # HTTP Server
//!
//! Main HTTP server combining the catalog endpoint routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::response::Html;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::CatalogStore;

use super::baked_good_routes::baked_good_routes;
use super::bakery_routes::bakery_routes;
use super::config::HttpServerConfig;
use super::CatalogState;

/// HTTP server for the bakery catalog API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(store: Arc<dyn CatalogStore>, config: HttpServerConfig) -> Self {
        let router = Self::build_router(store, &config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(store: Arc<dyn CatalogStore>, config: &HttpServerConfig) -> Router {
        let state = Arc::new(CatalogState::new(store));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(index_handler))
            .merge(bakery_routes(state.clone()))
            .merge(baked_good_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        tracing::info!(%addr, "starting bakehouse HTTP server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Static greeting, the only non-JSON endpoint.
async fn index_handler() -> Html<&'static str> {
    Html("<h1>Bakery GET API</h1>")
}
