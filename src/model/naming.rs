//! Derived constraint naming
//!
//! Foreign-key constraint names follow the convention
//! `fk_<table>_<column>_<referenced_table>`, kept for compatibility with
//! schemas migrated by external tooling that auto-generates constraint
//! names under the same convention.

/// Derive the name of a foreign-key constraint.
pub fn foreign_key_name(table: &str, column: &str, referenced_table: &str) -> String {
    format!("fk_{}_{}_{}", table, column, referenced_table)
}
