// src/presentation/http/controllers/users.rs
use crate::application::queries::users::GetUserQuery;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::PathParam;
use crate::presentation::http::openapi::{UserListResponse, UserResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users.", body = UserListResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<UserListResponse>> {
    let users = state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()?;

    Ok(Json(UserListResponse { users }))
}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "The user.", body = UserResponse),
        (status = 404, description = "No such user.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    PathParam(username): PathParam<String>,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { username })
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}
