//! Seed-file loading
//!
//! Row provisioning is an external collaborator's job; this module is its
//! in-repo stand-in. A seed file is a JSON document with one array per
//! table. Loading validates the invariants the store relies on (unique ids
//! per table) and warns about dangling foreign keys, which are legal data.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{foreign_key_name, BakedGood, Bakery, BAKED_GOODS_TABLE, BAKERIES_TABLE};

/// Errors raised while loading or validating a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid seed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Ids are stable and never reused, so a duplicate within a table means
    /// the seed is corrupt.
    #[error("duplicate id {id} in table {table}")]
    DuplicateId { table: &'static str, id: i64 },
}

/// Parsed contents of a seed file.
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub bakeries: Vec<Bakery>,

    #[serde(default)]
    pub baked_goods: Vec<BakedGood>,
}

impl SeedFile {
    /// Read and validate a seed file from disk.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path)?;
        let seed: SeedFile = serde_json::from_str(&content)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Check table invariants.
    ///
    /// Duplicate ids are fatal. A `bakery_id` pointing at no bakery is kept
    /// (the schema does not enforce referential presence) but logged with
    /// the constraint name the reference would have violated.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for bakery in &self.bakeries {
            if !seen.insert(bakery.id) {
                return Err(SeedError::DuplicateId {
                    table: BAKERIES_TABLE,
                    id: bakery.id,
                });
            }
        }

        let bakery_ids = seen;
        let mut seen = HashSet::new();
        for good in &self.baked_goods {
            if !seen.insert(good.id) {
                return Err(SeedError::DuplicateId {
                    table: BAKED_GOODS_TABLE,
                    id: good.id,
                });
            }
            if let Some(bakery_id) = good.bakery_id {
                if !bakery_ids.contains(&bakery_id) {
                    tracing::warn!(
                        constraint =
                            %foreign_key_name(BAKED_GOODS_TABLE, "bakery_id", BAKERIES_TABLE),
                        bakery_id,
                        "seed row {} references a missing bakery",
                        good
                    );
                }
            }
        }

        Ok(())
    }
}
