//! # Catalog Model
//!
//! Entity types for the two catalog tables, the foreign-key naming
//! convention, and the view types used for JSON serialization.
//!
//! Views are one-directional projections: embedding a relation one level
//! deep is allowed, the cyclic hop back is not. See [`view`].

pub mod entity;
pub mod naming;
pub mod view;

pub use entity::{BakedGood, Bakery, BAKED_GOODS_TABLE, BAKERIES_TABLE};
pub use naming::foreign_key_name;
pub use view::{BakedGoodSummary, BakedGoodView, BakerySummary, BakeryView};
