//! Typed path parameters, validated before any registry logic runs.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::domain::key::LinkKey;
use crate::error::AppError;

/// The `{key}` path segment, already decoded into a [`LinkKey`].
///
/// Rejects with `400 Bad Request` when the segment is not a key this
/// service issued.
#[derive(Debug, Clone, Copy)]
pub struct KeyParam(pub LinkKey);

impl<S> FromRequestParts<S> for KeyParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(LinkKey::decode(&raw)?))
    }
}

/// The `{slug}` path segment of a redirect request.
#[derive(Debug, Clone)]
pub struct SlugParam(pub String);

impl<S> FromRequestParts<S> for SlugParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(slug) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(slug))
    }
}
