//! Baked Good HTTP Routes
//!
//! Endpoints for listing baked goods by ascending price and for fetching
//! the single most expensive one. Each baked good is serialized with its
//! owning bakery embedded one level deep, or null when it has none.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::model::{BakedGood, BakedGoodView};
use crate::store::CatalogStore;

use super::errors::{ApiError, ApiResult};
use super::CatalogState;

// ==================
// Routes
// ==================

/// Build the baked-goods router
pub fn baked_good_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/baked_goods/by_price", get(by_price_handler))
        .route("/baked_goods/most_expensive", get(most_expensive_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn by_price_handler(
    State(state): State<Arc<CatalogState>>,
) -> Result<Json<Vec<BakedGoodView>>, ApiError> {
    let views = baked_goods_by_price(state.store.as_ref())?;
    Ok(Json(views))
}

async fn most_expensive_handler(
    State(state): State<Arc<CatalogState>>,
) -> Result<Json<BakedGoodView>, ApiError> {
    let view = most_expensive_baked_good(state.store.as_ref())?;
    Ok(Json(view))
}

// ==================
// Queries
// ==================

/// All baked goods ascending by price, ties in storage order.
pub fn baked_goods_by_price(store: &dyn CatalogStore) -> ApiResult<Vec<BakedGoodView>> {
    store
        .baked_goods_by_price()?
        .iter()
        .map(|good| project_with_bakery(store, good))
        .collect()
}

/// The single most expensive baked good.
///
/// An empty table is reported as not-found rather than serialized.
pub fn most_expensive_baked_good(store: &dyn CatalogStore) -> ApiResult<BakedGoodView> {
    let good = store
        .most_expensive_baked_good()?
        .ok_or(ApiError::NoBakedGoods)?;
    project_with_bakery(store, &good)
}

/// Resolve the owning bakery, if any, and project.
///
/// A dangling `bakery_id` projects the same as a null one.
fn project_with_bakery(store: &dyn CatalogStore, good: &BakedGood) -> ApiResult<BakedGoodView> {
    let bakery = match good.bakery_id {
        Some(bakery_id) => store.bakery_by_id(bakery_id)?,
        None => None,
    };
    Ok(BakedGoodView::project(good, bakery.as_ref()))
}
