//! Contract for resolving who is calling.

use axum::http::HeaderMap;
use async_trait::async_trait;

use crate::domain::entities::Identity;
use crate::error::AppError;

/// Source of caller identities and login redirects.
///
/// # Implementations
///
/// - [`crate::infrastructure::identity::HeaderIdentityProvider`] - identity
///   asserted by an authenticating reverse proxy
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the authenticated identity behind a request, if any.
    async fn current_identity(&self, headers: &HeaderMap) -> Option<Identity>;

    /// Builds the URL that starts the login flow and returns the user to
    /// `return_to` afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the URL cannot be built.
    fn login_url(&self, return_to: &str) -> Result<String, AppError>;
}
