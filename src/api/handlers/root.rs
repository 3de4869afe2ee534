//! Handler for the entry page.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::domain::entities::AuthStatus;
use crate::error::AppError;
use crate::state::AppState;

/// Serves the management UI to members.
///
/// # Endpoint
///
/// `GET /`
///
/// # Behavior
///
/// - Member of the organization domain: the UI file
/// - Signed in with another domain: 401 Unauthorized
/// - Not signed in: 302 to the login flow, returning here afterwards
pub async fn root_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    match state.auth_service.status(req.headers()).await {
        AuthStatus::Authorized(_) => {
            let response = ServeFile::new(state.index_file.as_ref())
                .oneshot(req)
                .await
                .unwrap_or_else(|never| match never {});

            Ok(response.into_response())
        }
        AuthStatus::Unauthorized(_) => Err(AppError::unauthorized("Unauthorized")),
        AuthStatus::Unauthenticated => {
            let return_to = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("/");
            let login_url = state.auth_service.login_url(return_to)?;
            let location = HeaderValue::try_from(login_url)
                .map_err(|_| AppError::internal("Login URL is not a valid Location header"))?;

            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
    }
}
