//! Core domain entities.
//!
//! - [`Link`] - A stored slug-to-target mapping
//! - [`KeyedLink`] - A link paired with its store key
//! - [`NewLink`] - Caller input for creating a link
//! - [`Identity`] / [`AuthStatus`] - Who is calling and whether they may mutate

pub mod identity;
pub mod link;

pub use identity::{AuthStatus, Identity};
pub use link::{KeyedLink, Link, NewLink};
