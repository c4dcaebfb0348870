//! Borrow request board endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        request::{CreateRequest, RequestOut},
        PageParams,
    },
};

use super::SharerUserId;

/// Post a new borrow request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 201, description = "Request created", body = RequestOut),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "User not found")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Json(request): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<RequestOut>)> {
    let created = state.services.requests.create(request, user_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List the acting user's own requests with fulfilling items
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Requests by the acting user, newest first", body = Vec<RequestOut>),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_own_requests(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
) -> AppResult<Json<Vec<RequestOut>>> {
    let requests = state.services.requests.list_by_requestor(user_id).await?;
    Ok(Json(requests))
}

/// List everyone else's requests, paginated
#[utoipa::path(
    get,
    path = "/requests/all",
    tag = "requests",
    params(
        PageParams,
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Requests by other users, newest first", body = Vec<RequestOut>),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_other_requests(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<RequestOut>>> {
    let requests = state.services.requests.list_others(page, user_id).await?;
    Ok(Json(requests))
}

/// Get one request with its fulfilling items
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(
        ("id" = i64, Path, description = "Request ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Request details", body = RequestOut),
        (status = 404, description = "Request or user not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(request_id): Path<i64>,
) -> AppResult<Json<RequestOut>> {
    let request = state.services.requests.get_by_id(request_id, user_id).await?;
    Ok(Json(request))
}
