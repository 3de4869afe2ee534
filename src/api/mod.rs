//! HTTP layer: translates requests into registry operations.
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - Typed path parameters
//! - [`handlers`] - One handler per operation
//! - [`middleware`] - Membership checks and tracing
//! - [`routes`] - Route tables

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
