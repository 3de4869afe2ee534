//! Organization-membership middleware for the management API.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Admits only authorized members of the organization domain.
///
/// On success the caller's [`crate::domain::entities::Identity`] is stored in
/// the request extensions for handlers to read.
///
/// # Errors
///
/// Returns `401 Unauthorized` for anonymous callers and for identities
/// outside the domain alike. The handler, and therefore the store, is never
/// reached.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/links/{key}", delete(delete_link_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let member = st.auth_service.require_member(req.headers()).await?;

    req.extensions_mut().insert(member);

    Ok(next.run(req).await)
}
