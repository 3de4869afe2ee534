//! Handlers for the link registry endpoints.

use axum::{
    Extension, Json,
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    Form,
};
use validator::Validate;

use crate::api::dto::link::{AddLinkForm, LinkPayload, LinkResponse};
use crate::api::extract::KeyParam;
use crate::domain::entities::{Identity, NewLink};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link.
///
/// # Endpoint
///
/// `GET /links/` (members only)
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;
    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a link from a form or JSON body.
///
/// # Endpoint
///
/// `POST /links/` (members only)
///
/// # Request Body
///
/// URL-encoded `slug=docs&target=https://docs.example.com`, or, when
/// `Content-Type` is `application/json`:
///
/// ```json
/// { "slug": "docs", "target": "https://docs.example.com" }
/// ```
///
/// `slug` may be empty or omitted to get a generated one. `author` and `date`
/// are always set server-side.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body, an invalid slug, or a
/// target that is not an absolute URL.
pub async fn add_link_handler(
    State(state): State<AppState>,
    Extension(member): Extension<Identity>,
    req: Request,
) -> Result<Json<LinkResponse>, AppError> {
    let new_link: NewLink = if is_json(req.headers()) {
        let Json(payload) = Json::<LinkPayload>::from_request(req, &state).await?;
        payload.validate()?;
        payload.into_new_link()
    } else {
        let Form(form) = Form::<AddLinkForm>::from_request(req, &state).await?;
        form.validate()?;
        form.into()
    };

    let created = state.link_service.create_link(&member, new_link).await?;

    Ok(Json(created.into()))
}

/// Fetches one link by its opaque key.
///
/// # Endpoint
///
/// `GET /links/{key}` (public)
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed key, 404 Not Found if no link
/// has that key.
pub async fn get_link_handler(
    State(state): State<AppState>,
    KeyParam(key): KeyParam,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(key).await?;
    Ok(Json(link.into()))
}

/// Fully replaces a link.
///
/// # Endpoint
///
/// `PUT /links/{key}` (members only)
///
/// The body carries every field (`author`, `slug`, `target`, `date`); they are
/// stored as sent. Any `key` in the body is ignored.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed key or body, 404 Not Found if no
/// link has that key.
pub async fn update_link_handler(
    State(state): State<AppState>,
    KeyParam(key): KeyParam,
    payload: Result<Json<LinkPayload>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    state
        .link_service
        .update_link(key, payload.into_link())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a link. Deleting a key that holds no link still succeeds.
///
/// # Endpoint
///
/// `DELETE /links/{key}` (members only)
pub async fn delete_link_handler(
    State(state): State<AppState>,
    KeyParam(key): KeyParam,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(key).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_is_json() {
        let mut headers = HeaderMap::new();
        assert!(!is_json(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(is_json(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        assert!(!is_json(&headers));
    }
}
