//! Catalog entity types
//!
//! These structs mirror the two relational tables one to one. They are the
//! storage-side representation; the JSON shapes returned by the API are the
//! view types in [`super::view`].
//!
//! Deserialization is the seed-file path. Optional columns (`name`,
//! `bakery_id`, `updated_at`) deserialize to `None` when absent; a missing
//! `created_at` is assigned at load time, since row creation is the seed
//! loader's job in this read-only system.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Table name for [`Bakery`] rows.
pub const BAKERIES_TABLE: &str = "bakeries";

/// Table name for [`BakedGood`] rows.
pub const BAKED_GOODS_TABLE: &str = "baked_goods";

/// A shop owning zero or more baked goods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bakery {
    /// Primary identity. Stable, never reused.
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    /// Set once when the row is provisioned.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Refreshed on mutation. No mutation path exists here, so in practice
    /// this stays whatever the seed provided (usually null).
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A priced product, optionally associated with one bakery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakedGood {
    /// Primary identity. Stable, never reused.
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    pub price: i64,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Foreign key into `bakeries.id`. Nullable, and not enforced: a row may
    /// reference a bakery that does not exist.
    #[serde(default)]
    pub bakery_id: Option<i64>,
}

impl fmt::Display for Bakery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Bakery {}>", self.name.as_deref().unwrap_or("?"))
    }
}

impl fmt::Display for BakedGood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Baked Good {}, ${}>",
            self.name.as_deref().unwrap_or("?"),
            self.price
        )
    }
}
