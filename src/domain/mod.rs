//! Domain layer: entities, keys, and collaborator contracts.
//!
//! - [`entities`] - Link and identity data structures
//! - [`key`] - Encoding between store keys and their opaque wire form
//! - [`repositories`] - Store and identity-provider traits
//!
//! Nothing here depends on the infrastructure or HTTP layers; business rules
//! live in [`crate::application::services`].

pub mod entities;
pub mod key;
pub mod repositories;
