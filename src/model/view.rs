//! Serialization view types
//!
//! The two entities reference each other (`Bakery.baked_goods` and
//! `BakedGood.bakery`), so serializing either naively would recurse forever.
//! Instead of filtering fields at serialization time, the cycle is broken
//! structurally: each direction gets its own view type, and the embedded
//! side is a summary type that simply has no field for the back-reference.
//!
//! - [`BakeryView`] embeds [`BakedGoodSummary`] rows (no `bakery` field).
//! - [`BakedGoodView`] embeds a [`BakerySummary`] (no `baked_goods` field).
//!
//! Projection never fails: absent optionals serialize as JSON null.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entity::{BakedGood, Bakery};

/// A baked good as embedded inside its owning bakery.
#[derive(Debug, Clone, Serialize)]
pub struct BakedGoodSummary {
    pub id: i64,
    pub name: Option<String>,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub bakery_id: Option<i64>,
}

impl From<&BakedGood> for BakedGoodSummary {
    fn from(good: &BakedGood) -> Self {
        Self {
            id: good.id,
            name: good.name.clone(),
            price: good.price,
            created_at: good.created_at,
            updated_at: good.updated_at,
            bakery_id: good.bakery_id,
        }
    }
}

/// A bakery as embedded inside one of its baked goods.
#[derive(Debug, Clone, Serialize)]
pub struct BakerySummary {
    pub id: i64,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Bakery> for BakerySummary {
    fn from(bakery: &Bakery) -> Self {
        Self {
            id: bakery.id,
            name: bakery.name.clone(),
            created_at: bakery.created_at,
            updated_at: bakery.updated_at,
        }
    }
}

/// Top-level serialized form of a bakery.
#[derive(Debug, Clone, Serialize)]
pub struct BakeryView {
    pub id: i64,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub baked_goods: Vec<BakedGoodSummary>,
}

impl BakeryView {
    /// Project a bakery and its goods into the serialized shape.
    ///
    /// `goods` must already be the rows belonging to `bakery`; the view does
    /// not re-filter them.
    pub fn project(bakery: &Bakery, goods: &[BakedGood]) -> Self {
        Self {
            id: bakery.id,
            name: bakery.name.clone(),
            created_at: bakery.created_at,
            updated_at: bakery.updated_at,
            baked_goods: goods.iter().map(BakedGoodSummary::from).collect(),
        }
    }
}

/// Top-level serialized form of a baked good.
#[derive(Debug, Clone, Serialize)]
pub struct BakedGoodView {
    pub id: i64,
    pub name: Option<String>,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub bakery_id: Option<i64>,
    /// Null when `bakery_id` is null or references a missing row.
    pub bakery: Option<BakerySummary>,
}

impl BakedGoodView {
    /// Project a baked good and its (possibly absent) bakery.
    pub fn project(good: &BakedGood, bakery: Option<&Bakery>) -> Self {
        Self {
            id: good.id,
            name: good.name.clone(),
            price: good.price,
            created_at: good.created_at,
            updated_at: good.updated_at,
            bakery_id: good.bakery_id,
            bakery: bakery.map(BakerySummary::from),
        }
    }
}
