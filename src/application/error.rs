// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure kinds surfaced by the data-access layer. Each variant maps to
/// exactly one HTTP status in `presentation::http::error`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// Malformed identifier, sort/order token, query string or vote delta.
    #[error("invalid input")]
    InvalidInput,

    /// A required field is missing from a write payload.
    #[error("invalid post input")]
    InvalidPostInput,

    /// A write payload field is present but has the wrong JSON type.
    #[error("invalid post data type")]
    InvalidPostDataType,

    /// Carries the full client-facing message, e.g. "Article not found".
    #[error("{0}")]
    NotFound(String),

    #[error("unhandled failure: {0}")]
    Unhandled(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn article_not_found() -> Self {
        Self::not_found("Article not found")
    }

    pub fn topic_not_found() -> Self {
        Self::not_found("Topic not found")
    }

    pub fn user_not_found() -> Self {
        Self::not_found("User not found")
    }

    pub fn unhandled(msg: impl Into<String>) -> Self {
        Self::Unhandled(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(_) => Self::InvalidInput,
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Unhandled(msg),
        }
    }
}
