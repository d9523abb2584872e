use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const MSG_INVALID_INPUT: &str = "Invalid input";
const MSG_INVALID_POST_INPUT: &str = "Invalid post input";
const MSG_INVALID_POST_DATA_TYPE: &str = "Invalid post data type";
const MSG_PATH_NOT_FOUND: &str = "Path not found";
const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
const MSG_INTERNAL: &str = "Internal server error";

#[derive(Debug, PartialEq, Eq)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    /// The one place failure kinds become status codes and client messages.
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidInput => Self::new(StatusCode::BAD_REQUEST, MSG_INVALID_INPUT),
            ApplicationError::InvalidPostInput => {
                Self::new(StatusCode::BAD_REQUEST, MSG_INVALID_POST_INPUT)
            }
            ApplicationError::InvalidPostDataType => {
                Self::new(StatusCode::BAD_REQUEST, MSG_INVALID_POST_DATA_TYPE)
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unhandled(detail) => {
                tracing::error!(error = %detail, "unhandled failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
            }
        }
    }

    pub fn path_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, MSG_PATH_NOT_FOUND)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse { msg: self.message };
        (self.status, Json(payload)).into_response()
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
