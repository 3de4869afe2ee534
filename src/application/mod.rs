//! Application layer services implementing business logic.
//!
//! Services consume the domain's collaborator traits and give HTTP handlers a
//! small API to call.
//!
//! - [`services::link_service::LinkService`] - Link registry and slug resolution
//! - [`services::auth_service::AuthService`] - Organization-membership checks

pub mod services;
