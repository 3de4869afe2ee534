//! Handler for slug redirects.

use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::extract::SlugParam;
use crate::error::AppError;
use crate::state::AppState;

/// Response header exposing the resolved link's key.
pub const X_KEY: HeaderName = HeaderName::from_static("x-key");

/// Redirects a slug to its target.
///
/// # Endpoint
///
/// `GET /{slug}` (public)
///
/// Responds `302 Found` with `Location` set to the target and `X-Key` set to
/// the link's encoded key. If several links share the slug, the earliest
/// created one wins.
///
/// # Errors
///
/// Returns 404 Not Found if no link carries the slug.
pub async fn redirect_handler(
    State(state): State<AppState>,
    SlugParam(slug): SlugParam,
) -> Result<Response, AppError> {
    let found = state.link_service.resolve(&slug).await?;

    let location = HeaderValue::try_from(found.link.target.as_str())
        .map_err(|_| AppError::internal("Link target is not a valid Location header"))?;
    let key = HeaderValue::try_from(found.key.encode())
        .map_err(|_| AppError::internal("Link key is not a valid header value"))?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, location), (X_KEY, key)],
    )
        .into_response())
}
