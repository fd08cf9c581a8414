//! # Catalog Store
//!
//! The relational-storage collaborator boundary. The API core only ever
//! reads; row provisioning belongs to an external seeding process, here
//! represented by the seed-file loader in [`seed`].
//!
//! Handlers receive a store handle explicitly (`Arc<dyn CatalogStore>`)
//! rather than going through any global session state.

pub mod errors;
pub mod memory;
pub mod seed;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use seed::{SeedError, SeedFile};

use crate::model::{BakedGood, Bakery};

/// Read operations against the catalog tables.
///
/// "Storage-default order" means insertion order throughout; sorts are
/// stable, so equal keys keep that order and every call is deterministic.
pub trait CatalogStore: Send + Sync {
    /// All bakery rows, storage-default order.
    fn bakeries(&self) -> StoreResult<Vec<Bakery>>;

    /// The bakery with exactly this id, if any.
    fn bakery_by_id(&self, id: i64) -> StoreResult<Option<Bakery>>;

    /// All baked-good rows, ascending by price.
    fn baked_goods_by_price(&self) -> StoreResult<Vec<BakedGood>>;

    /// Descending by price, take exactly one. `None` on an empty table.
    fn most_expensive_baked_good(&self) -> StoreResult<Option<BakedGood>>;

    /// The baked goods whose `bakery_id` equals `bakery_id`, storage-default
    /// order.
    fn baked_goods_for_bakery(&self, bakery_id: i64) -> StoreResult<Vec<BakedGood>>;
}
