//! Top-level router.
//!
//! # Route Structure
//!
//! - `GET  /`               - Management UI (login redirect when signed out)
//! - `/links/*`             - Link registry API (see [`crate::api::routes`])
//! - `GET  /health`         - Store health (public)
//! - `GET  /{slug}`         - Slug redirect (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Membership** - Organization-domain check on management routes

use crate::api;
use crate::api::handlers::root_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Built once at startup and handed to the server.
pub fn app_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/", get(root_handler))
        .merge(protected)
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}
