//! In-memory catalog store
//!
//! Rows live in plain `Vec`s behind an `RwLock`, in insertion order. That
//! order is the "storage-default" order the read operations promise, and
//! all sorts are stable, so equal-price ties resolve the same way on every
//! call.

use std::sync::RwLock;

use crate::model::{BakedGood, Bakery};

use super::errors::{StoreError, StoreResult};
use super::seed::SeedFile;
use super::CatalogStore;

#[derive(Debug, Default)]
struct Tables {
    bakeries: Vec<Bakery>,
    baked_goods: Vec<BakedGood>,
}

/// Catalog store holding all rows in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from a loaded seed file.
    pub fn from_seed(seed: SeedFile) -> Self {
        Self {
            tables: RwLock::new(Tables {
                bakeries: seed.bakeries,
                baked_goods: seed.baked_goods,
            }),
        }
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }
}

impl CatalogStore for MemoryStore {
    fn bakeries(&self) -> StoreResult<Vec<Bakery>> {
        Ok(self.read()?.bakeries.clone())
    }

    fn bakery_by_id(&self, id: i64) -> StoreResult<Option<Bakery>> {
        Ok(self.read()?.bakeries.iter().find(|b| b.id == id).cloned())
    }

    fn baked_goods_by_price(&self) -> StoreResult<Vec<BakedGood>> {
        let mut rows = self.read()?.baked_goods.clone();
        rows.sort_by_key(|g| g.price);
        Ok(rows)
    }

    fn most_expensive_baked_good(&self) -> StoreResult<Option<BakedGood>> {
        let mut rows = self.read()?.baked_goods.clone();
        rows.sort_by(|a, b| b.price.cmp(&a.price));
        Ok(rows.into_iter().next())
    }

    fn baked_goods_for_bakery(&self, bakery_id: i64) -> StoreResult<Vec<BakedGood>> {
        Ok(self
            .read()?
            .baked_goods
            .iter()
            .filter(|g| g.bakery_id == Some(bakery_id))
            .cloned()
            .collect())
    }
}
