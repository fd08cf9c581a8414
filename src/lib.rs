//! bakehouse - A read-only bakery catalog HTTP API
//!
//! Two relational tables (bakeries and baked goods), four read operations,
//! one serialization contract. The store is a collaborator behind the
//! [`store::CatalogStore`] trait; the HTTP layer only queries and projects.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod store;
