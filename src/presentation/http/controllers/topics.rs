// src/presentation/http/controllers/topics.rs
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::TopicListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "All topics.", body = TopicListResponse),
        (status = 500, description = "Unexpected failure.", body = ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<TopicListResponse>> {
    let topics = state
        .services
        .topic_queries
        .list_topics()
        .await
        .into_http()?;

    Ok(Json(TopicListResponse { topics }))
}
