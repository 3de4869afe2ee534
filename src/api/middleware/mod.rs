//! HTTP middleware: membership checks and request tracing.

pub mod auth;
pub mod tracing;
