//! Identity provider implementations.

pub mod header_identity;

pub use header_identity::HeaderIdentityProvider;
