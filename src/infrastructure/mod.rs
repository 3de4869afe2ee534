//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the domain's collaborator traits.
//!
//! - [`persistence`] - Link stores (in-memory and PostgreSQL)
//! - [`identity`] - Identity providers

pub mod identity;
pub mod persistence;
