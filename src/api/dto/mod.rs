//! Data Transfer Objects for API requests and responses.
//!
//! Serde handles (de)serialization and validator checks request input.

pub mod health;
pub mod link;
