//! Identity asserted by an authenticating reverse proxy.

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderName};
use url::form_urlencoded;

use crate::domain::entities::Identity;
use crate::domain::repositories::IdentityProvider;
use crate::error::AppError;

/// Reads the caller's email from a header set by a trusted proxy
/// (oauth2-proxy's `X-Forwarded-Email`, Google IAP's
/// `X-Goog-Authenticated-User-Email`, ...).
///
/// The proxy must strip this header from client requests; the service
/// trusts it unconditionally.
pub struct HeaderIdentityProvider {
    header: HeaderName,
    login_url: String,
    return_param: String,
}

impl HeaderIdentityProvider {
    /// # Arguments
    ///
    /// - `header` - header carrying the authenticated email
    /// - `login_url` - absolute or root-relative URL that starts the login flow
    /// - `return_param` - query parameter the login flow reads the return target from
    pub fn new(
        header: HeaderName,
        login_url: impl Into<String>,
        return_param: impl Into<String>,
    ) -> Self {
        Self {
            header,
            login_url: login_url.into(),
            return_param: return_param.into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HeaderIdentityProvider {
    async fn current_identity(&self, headers: &HeaderMap) -> Option<Identity> {
        let value = headers.get(&self.header)?.to_str().ok()?.trim();

        // IAP prefixes the email with its issuer: `accounts.google.com:alice@example.com`.
        let email = value.rsplit(':').next().unwrap_or(value).trim();

        if email.is_empty() || !email.contains('@') {
            return None;
        }

        Some(Identity::new(email))
    }

    fn login_url(&self, return_to: &str) -> Result<String, AppError> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(&self.return_param, return_to)
            .finish();

        let separator = if self.login_url.contains('?') { '&' } else { '?' };

        Ok(format!("{}{}{}", self.login_url, separator, query))
    }
}
