//! Bakery HTTP Routes
//!
//! Endpoints for listing bakeries and fetching one bakery by id. Each
//! bakery is serialized with its baked goods embedded one level deep.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::model::BakeryView;
use crate::store::CatalogStore;

use super::errors::{ApiError, ApiResult};
use super::CatalogState;

// ==================
// Routes
// ==================

/// Build the bakery router
pub fn bakery_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/bakeries", get(list_bakeries_handler))
        .route("/bakeries/{id}", get(bakery_by_id_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_bakeries_handler(
    State(state): State<Arc<CatalogState>>,
) -> Result<Json<Vec<BakeryView>>, ApiError> {
    let views = list_bakeries(state.store.as_ref())?;
    Ok(Json(views))
}

async fn bakery_by_id_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<i64>,
) -> Result<Json<BakeryView>, ApiError> {
    let view = bakery_by_id(state.store.as_ref(), id)?;
    Ok(Json(view))
}

// ==================
// Queries
// ==================

/// All bakeries in storage-default order, each with its goods embedded.
///
/// An empty table yields an empty array, not an error.
pub fn list_bakeries(store: &dyn CatalogStore) -> ApiResult<Vec<BakeryView>> {
    store
        .bakeries()?
        .iter()
        .map(|bakery| {
            let goods = store.baked_goods_for_bakery(bakery.id)?;
            Ok(BakeryView::project(bakery, &goods))
        })
        .collect()
}

/// The bakery with this exact id.
///
/// The absent case is handled before any serialization happens.
pub fn bakery_by_id(store: &dyn CatalogStore, id: i64) -> ApiResult<BakeryView> {
    let bakery = store
        .bakery_by_id(id)?
        .ok_or(ApiError::BakeryNotFound(id))?;
    let goods = store.baked_goods_for_bakery(bakery.id)?;
    Ok(BakeryView::project(&bakery, &goods))
}
