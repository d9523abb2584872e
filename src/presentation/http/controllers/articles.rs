// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleVotesCommand},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam, QueryParams};
use crate::presentation::http::openapi::{ArticleListResponse, ArticleResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// One of `created_at`, `votes`, `title`, `topic`, `author`,
    /// `comment_count`, `article_id`. Defaults to `created_at`.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// `asc` or `desc` (case-insensitive). Defaults to `desc`.
    #[serde(default)]
    pub order: Option<String>,
    /// Topic slug; must name an existing topic.
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateVotesRequest {
    pub inc_votes: i32,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles with comment counts.", body = ArticleListResponse),
        (status = 400, description = "Unknown sort column or order.", body = ErrorResponse),
        (status = 404, description = "Unknown topic.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = ListArticlesQuery {
        sort_by: params.sort_by,
        order: params.order,
        topic: params.topic,
    };

    let articles = state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse { articles }))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Positive integer article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleResponse),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    PathParam(article_id): PathParam<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: article_id })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Positive integer article id")),
    request_body = UpdateVotesRequest,
    responses(
        (status = 200, description = "The article with its new vote count.", body = ArticleResponse),
        (status = 400, description = "Malformed id or vote delta.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article_votes(
    Extension(state): Extension<HttpState>,
    PathParam(article_id): PathParam<String>,
    JsonBody(payload): JsonBody,
) -> HttpResult<Json<ArticleResponse>> {
    let command = UpdateArticleVotesCommand {
        id: article_id,
        payload,
    };

    state
        .services
        .article_commands
        .update_votes(command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "The created article.", body = ArticleResponse),
        (status = 400, description = "Missing or mistyped field.", body = ErrorResponse),
        (status = 404, description = "Unknown topic or author.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let article = state
        .services
        .article_commands
        .create_article(CreateArticleCommand { payload })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}
