//! Item catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::{
        comment::{CommentOut, CreateComment},
        item::{CreateItem, ItemDetails, ItemOut, UpdateItem},
        PageParams,
    },
};

use super::SharerUserId;

fn default_size() -> i64 {
    10
}

/// Query parameters for item search
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    pub text: String,
    #[serde(default)]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

/// List a new item for sharing
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItem,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 201, description = "Item created", body = ItemOut),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Owner or request not found")
    )
)]
pub async fn create_item(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Json(item): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<ItemOut>)> {
    let created = state.services.items.create(item, user_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update an item (owner only)
#[utoipa::path(
    patch,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = ItemOut),
        (status = 403, description = "Acting user is not the owner"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(item_id): Path<i64>,
    Json(patch): Json<UpdateItem>,
) -> AppResult<Json<ItemOut>> {
    let updated = state.services.items.update(item_id, patch, user_id).await?;
    Ok(Json(updated))
}

/// Get item details with comments; booking outlook included for the owner
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Item details", body = ItemDetails),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(item_id): Path<i64>,
) -> AppResult<Json<ItemDetails>> {
    let item = state.services.items.get_by_id(item_id, user_id).await?;
    Ok(Json(item))
}

/// List the acting user's items
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(
        PageParams,
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Items owned by the acting user", body = Vec<ItemOut>),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_items(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<ItemOut>>> {
    let items = state.services.items.list_by_owner(page, user_id).await?;
    Ok(Json(items))
}

/// Search available items by name or description
#[utoipa::path(
    get,
    path = "/items/search",
    tag = "items",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching available items", body = Vec<ItemOut>)
    )
)]
pub async fn search_items(
    State(state): State<crate::AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<ItemOut>>> {
    let page = PageParams {
        from: params.from,
        size: params.size,
    };
    let items = state.services.items.search(page, &params.text).await?;
    Ok(Json(items))
}

/// Comment on an item after a completed rental
#[utoipa::path(
    post,
    path = "/items/{id}/comment",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    request_body = CreateComment,
    responses(
        (status = 200, description = "Comment added", body = CommentOut),
        (status = 400, description = "No completed booking on this item"),
        (status = 404, description = "Item or user not found")
    )
)]
pub async fn add_comment(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(item_id): Path<i64>,
    Json(comment): Json<CreateComment>,
) -> AppResult<Json<CommentOut>> {
    let created = state
        .services
        .comments
        .create(item_id, comment, user_id)
        .await?;
    Ok(Json(created))
}
