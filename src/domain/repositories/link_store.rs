//! Storage contract for link records.

use crate::domain::entities::{KeyedLink, Link};
use crate::domain::key::LinkKey;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for links.
///
/// Every method is a single atomic record or query operation; the registry
/// never spans a transaction across calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-process map
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Persists a new record and returns the key the store generated for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, link: Link) -> Result<LinkKey, AppError>;

    /// Fetches the record stored at `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn get(&self, key: LinkKey) -> Result<Option<Link>, AppError>;

    /// Finds the first record whose slug equals `slug`.
    ///
    /// When several records share a slug, the one with the lowest key
    /// (the earliest created) is returned.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<KeyedLink>, AppError>;

    /// Lists every record in ascending key order.
    async fn list(&self) -> Result<Vec<KeyedLink>, AppError>;

    /// Replaces the record at `key` with `link`.
    ///
    /// Returns `Ok(false)` without writing anything if no record exists at
    /// `key`.
    async fn replace(&self, key: LinkKey, link: Link) -> Result<bool, AppError>;

    /// Deletes the record at `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: LinkKey) -> Result<(), AppError>;

    /// Returns true if the backing storage is reachable.
    async fn health_check(&self) -> bool;
}
