// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HttpError;

/// A JSON request body kept as an untyped value so the application layer
/// can tell a missing field from a mistyped one. Unparsable bodies are
/// rejected as invalid input.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "rejected request body");
                HttpError::from_error(ApplicationError::InvalidInput)
            })?;
        Ok(Self(value))
    }
}

/// Query-string extractor whose rejection goes through the shared error
/// translator instead of axum's plain-text response.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        serde_urlencoded::from_str(query)
            .map(Self)
            .map_err(|err| {
                tracing::debug!(error = %err, "rejected query string");
                HttpError::from_error(ApplicationError::InvalidInput)
            })
    }
}

/// Path-segment extractor. Segments that fail to decode (bad percent-encoding,
/// invalid UTF-8) are invalid input like any other malformed identifier.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "rejected path segment");
                HttpError::from_error(ApplicationError::InvalidInput)
            })?;
        Ok(Self(value))
    }
}
