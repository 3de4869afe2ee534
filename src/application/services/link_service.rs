//! Link registry and redirect resolution.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::entities::{Identity, KeyedLink, Link, NewLink};
use crate::domain::key::LinkKey;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::slug::{generate_slug, validate_slug};

/// Service owning create/read/update/delete/list of links and slug lookups.
///
/// Authorization is not checked here; handlers only reach the mutating
/// methods once [`crate::application::services::AuthService`] has admitted
/// the caller.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
}

impl LinkService {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Returns every stored link in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_links(&self) -> Result<Vec<KeyedLink>, AppError> {
        self.store.list().await
    }

    /// Fetches a link by key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists at `key`.
    pub async fn get_link(&self, key: LinkKey) -> Result<KeyedLink, AppError> {
        self.store
            .get(key)
            .await?
            .map(|link| KeyedLink::new(key, link))
            .ok_or_else(|| AppError::not_found("Link not found"))
    }

    /// Creates a link on behalf of `author`.
    ///
    /// `author` and `date` are always stamped server-side. A blank slug is
    /// replaced with a generated one that is not currently in use; a supplied
    /// slug is validated but not checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the supplied slug is invalid.
    /// Returns [`AppError::Internal`] on storage errors or if no free slug
    /// could be generated.
    pub async fn create_link(
        &self,
        author: &Identity,
        new_link: NewLink,
    ) -> Result<KeyedLink, AppError> {
        let slug = if new_link.slug.trim().is_empty() {
            self.generate_unique_slug().await?
        } else {
            validate_slug(&new_link.slug)?;
            new_link.slug
        };

        let link = Link::new(author.email.clone(), slug, new_link.target, Utc::now());
        let key = self.store.insert(link.clone()).await?;

        info!(key = %key, slug = %link.slug, author = %link.author, "Link created");

        Ok(KeyedLink::new(key, link))
    }

    /// Fully replaces the link at `key`.
    ///
    /// The payload is trusted as-is, including `author` and `date`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the slug is invalid.
    /// Returns [`AppError::NotFound`] if no record exists at `key`.
    pub async fn update_link(&self, key: LinkKey, link: Link) -> Result<(), AppError> {
        validate_slug(&link.slug)?;

        let slug = link.slug.clone();
        if !self.store.replace(key, link).await? {
            return Err(AppError::not_found("Link not found"));
        }

        info!(key = %key, slug = %slug, "Link updated");

        Ok(())
    }

    /// Deletes the link at `key`. Absent keys are a no-op.
    pub async fn delete_link(&self, key: LinkKey) -> Result<(), AppError> {
        self.store.delete(key).await?;

        info!(key = %key, "Link deleted");

        Ok(())
    }

    /// Resolves a slug to its link for redirection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link carries `slug`.
    pub async fn resolve(&self, slug: &str) -> Result<KeyedLink, AppError> {
        let found = self
            .store
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))?;

        debug!(slug, key = %found.key, target = %found.link.target, "Slug resolved");

        Ok(found)
    }

    /// Returns true if the store is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }

    /// Generates a slug not currently held by any link.
    ///
    /// Attempts up to 10 times before failing. The check and the later insert
    /// are separate store calls, so concurrent creators can still collide.
    async fn generate_unique_slug(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let slug = generate_slug();

            if self.store.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
        }

        Err(AppError::internal("Failed to generate unique slug"))
    }
}
