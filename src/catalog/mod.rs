//! Remote recipe catalog.
//!
//! The catalog feeds read-only [`Recipe`](crate::recipe::Recipe) records
//! into the application. Inbound JSON is uneven across deployments (two
//! id spellings, two name spellings, category records with their own id
//! space); everything is normalized to the canonical model here, at the
//! boundary, so no store or screen ever branches on wire shape.

pub mod cache;
pub mod client;
pub mod wire;

pub use cache::CatalogCache;
pub use client::{CatalogClient, DEFAULT_BASE_URL};
