//! Organization-membership authorization.

use axum::http::HeaderMap;
use std::sync::Arc;
use tracing::warn;

use crate::domain::entities::{AuthStatus, Identity};
use crate::domain::repositories::IdentityProvider;
use crate::error::AppError;

/// Decides whether a caller may use the management API.
///
/// A caller is authorized when the identity provider reports an identity
/// whose email is in the configured organization domain.
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
    domain: String,
}

impl AuthService {
    /// Creates a new authorization service.
    ///
    /// # Arguments
    ///
    /// - `provider` - source of caller identities
    /// - `domain` - organization email domain, e.g. `example.com`; a leading
    ///   `@` is ignored
    pub fn new(provider: Arc<dyn IdentityProvider>, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let domain = domain.trim_start_matches('@').to_string();
        Self { provider, domain }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Resolves the caller behind `headers` into an [`AuthStatus`].
    pub async fn status(&self, headers: &HeaderMap) -> AuthStatus {
        match self.provider.current_identity(headers).await {
            None => AuthStatus::Unauthenticated,
            Some(identity) if identity.belongs_to(&self.domain) => AuthStatus::Authorized(identity),
            Some(identity) => AuthStatus::Unauthorized(identity),
        }
    }

    /// Returns the caller's identity if they are an authorized member.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for anonymous callers and for
    /// identities outside the domain alike.
    pub async fn require_member(&self, headers: &HeaderMap) -> Result<Identity, AppError> {
        match self.status(headers).await {
            AuthStatus::Authorized(identity) => Ok(identity),
            AuthStatus::Unauthorized(identity) => {
                warn!(email = %identity.email, "Rejected caller outside organization domain");
                Err(AppError::unauthorized("Unauthorized"))
            }
            AuthStatus::Unauthenticated => {
                warn!("Rejected unauthenticated caller");
                Err(AppError::unauthorized("Unauthorized"))
            }
        }
    }

    /// Builds the login redirect URL that returns the user to `return_to`.
    pub fn login_url(&self, return_to: &str) -> Result<String, AppError> {
        self.provider.login_url(return_to)
    }
}
