//! Caller identity as reported by the identity provider.

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Returns true if the email belongs to `domain` (compared without case).
    ///
    /// `domain` is the bare domain, e.g. `example.com`.
    pub fn belongs_to(&self, domain: &str) -> bool {
        match self.email.rsplit_once('@') {
            Some((local, host)) => !local.is_empty() && host.eq_ignore_ascii_case(domain),
            None => false,
        }
    }
}

/// Outcome of resolving a request against the authorization rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// No identity at all.
    Unauthenticated,
    /// Signed in, but outside the organization domain.
    Unauthorized(Identity),
    Authorized(Identity),
}
