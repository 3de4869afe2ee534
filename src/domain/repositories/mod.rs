//! Collaborator traits for the domain layer.
//!
//! The registry depends on these contracts only. Implementations live in
//! `crate::infrastructure`; mocks are generated via `mockall` for unit tests.
//!
//! - [`LinkStore`] - link persistence
//! - [`IdentityProvider`] - caller identity and login redirects

pub mod identity_provider;
pub mod link_store;

pub use identity_provider::IdentityProvider;
pub use link_store::LinkStore;

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
#[cfg(test)]
pub use link_store::MockLinkStore;
