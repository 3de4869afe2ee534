//! Helper functions shared across layers.
//!
//! - [`slug`] - Slug generation and validation

pub mod slug;
