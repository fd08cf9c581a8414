//! Read API Invariant Tests
//!
//! Tests for the four read operations and the serialization contract:
//! - Listing returns exactly the stored rows
//! - Single-entity lookups handle the absent case as not-found, never panic
//! - Price ordering is non-decreasing over the full table
//! - Extremum selection is deterministic under ties
//! - Cycle-breaking: embedded relations never carry the back-reference

use axum::http::StatusCode;
use bakehouse::http_server::{
    baked_goods_by_price, bakery_by_id, list_bakeries, most_expensive_baked_good, ApiError,
};
use bakehouse::store::{MemoryStore, SeedFile};
use serde_json::json;
use std::collections::HashSet;

// =============================================================================
// Helper Functions
// =============================================================================

fn store_from(value: serde_json::Value) -> MemoryStore {
    let seed: SeedFile = serde_json::from_value(value).unwrap();
    seed.validate().unwrap();
    MemoryStore::from_seed(seed)
}

fn sample_store() -> MemoryStore {
    store_from(json!({
        "bakeries": [
            {"id": 1, "name": "Sweet Spot"},
            {"id": 2, "name": "Crumb Town"},
            {"id": 5, "name": "Flour Power"}
        ],
        "baked_goods": [
            {"id": 1, "name": "Croissant", "price": 3, "bakery_id": 1},
            {"id": 2, "name": "Cake", "price": 20, "bakery_id": 1},
            {"id": 3, "name": "Bagel", "price": 3, "bakery_id": 2},
            {"id": 4, "name": "Rye Loaf", "price": 8}
        ]
    }))
}

// =============================================================================
// Listing Tests
// =============================================================================

/// GET /bakeries returns one element per stored row, ids exactly matching.
#[test]
fn test_list_bakeries_returns_all_stored_ids() {
    let store = sample_store();
    let views = list_bakeries(&store).unwrap();

    assert_eq!(views.len(), 3);
    let ids: HashSet<i64> = views.iter().map(|v| v.id).collect();
    assert_eq!(ids, HashSet::from([1, 2, 5]));
}

/// An empty table serializes as an empty array, not an error.
#[test]
fn test_list_bakeries_empty_table() {
    let store = MemoryStore::new();
    assert!(list_bakeries(&store).unwrap().is_empty());
}

// =============================================================================
// Single-Entity Lookup Tests
// =============================================================================

/// A bakery's view embeds exactly the goods whose bakery_id matches, each
/// without a nested bakery field.
#[test]
fn test_bakery_by_id_embeds_matching_goods() {
    let store = sample_store();
    let view = bakery_by_id(&store, 1).unwrap();

    assert_eq!(view.name.as_deref(), Some("Sweet Spot"));
    let ids: HashSet<i64> = view.baked_goods.iter().map(|g| g.id).collect();
    assert_eq!(ids, HashSet::from([1, 2]));

    let body = serde_json::to_value(&view).unwrap();
    for good in body["baked_goods"].as_array().unwrap() {
        assert!(good.get("bakery").is_none());
    }
}

/// A missing id is a typed not-found that maps to HTTP 404.
#[test]
fn test_bakery_by_id_missing_row_is_404() {
    let store = sample_store();
    let err = bakery_by_id(&store, 404).unwrap_err();

    assert!(matches!(err, ApiError::BakeryNotFound(404)));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Price Ordering Tests
// =============================================================================

/// by_price returns the whole table, prices non-decreasing across it.
#[test]
fn test_by_price_is_non_decreasing_and_complete() {
    let store = sample_store();
    let views = baked_goods_by_price(&store).unwrap();

    assert_eq!(views.len(), 4);
    let ids: HashSet<i64> = views.iter().map(|v| v.id).collect();
    assert_eq!(ids, HashSet::from([1, 2, 3, 4]));

    let prices: Vec<i64> = views.iter().map(|v| v.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

/// Embedded bakeries never carry their own baked_goods collection.
#[test]
fn test_by_price_embedded_bakery_has_no_goods_collection() {
    let store = sample_store();
    let views = baked_goods_by_price(&store).unwrap();
    let body = serde_json::to_value(&views).unwrap();

    for good in body.as_array().unwrap() {
        if !good["bakery"].is_null() {
            assert!(good["bakery"].get("baked_goods").is_none());
        }
    }
}

// =============================================================================
// Extremum Tests
// =============================================================================

/// most_expensive returns the row with the maximum price.
#[test]
fn test_most_expensive_is_the_maximum() {
    let store = sample_store();
    let view = most_expensive_baked_good(&store).unwrap();

    assert_eq!(view.id, 2);
    assert_eq!(view.price, 20);
}

/// Under a price tie, exactly one row comes back, the same one every call.
#[test]
fn test_most_expensive_tie_break_is_deterministic() {
    let store = store_from(json!({
        "baked_goods": [
            {"id": 10, "name": "Pie", "price": 12},
            {"id": 11, "name": "Tart", "price": 12},
            {"id": 12, "name": "Bun", "price": 1}
        ]
    }));

    let first = most_expensive_baked_good(&store).unwrap();
    for _ in 0..20 {
        let again = most_expensive_baked_good(&store).unwrap();
        assert_eq!(again.id, first.id);
    }
}

/// An empty table is a 404, not a panic on a missing row.
#[test]
fn test_most_expensive_empty_table_is_404() {
    let store = MemoryStore::new();
    let err = most_expensive_baked_good(&store).unwrap_err();

    assert!(matches!(err, ApiError::NoBakedGoods));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Worked Example
// =============================================================================

/// Seed Sweet Spot with a $3 croissant and a $20 cake; the most expensive
/// baked good is the cake, with the bakery embedded one level deep.
#[test]
fn test_worked_example() {
    let store = store_from(json!({
        "bakeries": [{"id": 1, "name": "Sweet Spot"}],
        "baked_goods": [
            {"id": 1, "name": "Croissant", "price": 3, "bakery_id": 1},
            {"id": 2, "name": "Cake", "price": 20, "bakery_id": 1}
        ]
    }));

    let view = most_expensive_baked_good(&store).unwrap();
    let body = serde_json::to_value(&view).unwrap();

    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "Cake");
    assert_eq!(body["price"], 20);
    assert_eq!(body["bakery_id"], 1);
    assert_eq!(body["bakery"]["id"], 1);
    assert_eq!(body["bakery"]["name"], "Sweet Spot");
    assert!(body["bakery"].get("baked_goods").is_none());
}
