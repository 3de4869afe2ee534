//! API route configuration.

use crate::api::handlers::{
    add_link_handler, delete_link_handler, get_link_handler, health_handler,
    list_links_handler, redirect_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Management routes; callers must be organization members.
///
/// # Endpoints
///
/// - `GET    /links/`       - List all links
/// - `POST   /links/`       - Create a link (form or JSON)
/// - `PUT    /links/{key}`  - Replace a link
/// - `DELETE /links/{key}`  - Delete a link
///
/// The collection routes answer with and without the trailing slash.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(add_link_handler))
        .route("/links/", get(list_links_handler).post(add_link_handler))
        .route(
            "/links/{key}",
            put(update_link_handler).delete(delete_link_handler),
        )
}

/// Routes open to anyone.
///
/// # Endpoints
///
/// - `GET /links/{key}` - Fetch a link by key
/// - `GET /health`      - Store health
/// - `GET /{slug}`      - Redirect to the slug's target
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/links/{key}", get(get_link_handler))
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
}
