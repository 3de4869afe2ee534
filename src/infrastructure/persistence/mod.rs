//! Link store implementations.
//!
//! - [`MemoryLinkStore`] - in-process map, used when no database is configured
//! - [`PgLinkStore`] - PostgreSQL via SQLx

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
