// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::CreateCommentCommand, queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::openapi::{CommentListResponse, CommentResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub username: String,
    pub body: String,
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Positive integer article id")),
    responses(
        (status = 200, description = "Comments, newest first; empty when the article has none.", body = CommentListResponse),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    PathParam(article_id): PathParam<String>,
) -> HttpResult<Json<CommentListResponse>> {
    let comments = state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery { article_id })
        .await
        .into_http()?;

    Ok(Json(CommentListResponse { comments }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Positive integer article id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "The created comment.", body = CommentResponse),
        (status = 400, description = "Malformed id, missing or mistyped field.", body = ErrorResponse),
        (status = 404, description = "No such article or user.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    PathParam(article_id): PathParam<String>,
    JsonBody(payload): JsonBody,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let comment = state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand {
            article_id,
            payload,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}
