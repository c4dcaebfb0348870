//! Booking lifecycle endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::booking::{BookingListParams, BookingOut, CreateBooking},
};

use super::SharerUserId;

/// Query parameters for the approval decision
#[derive(Debug, Deserialize, IntoParams)]
pub struct ApproveParams {
    pub approved: bool,
}

/// Book an item for a time window
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 201, description = "Booking created in WAITING status", body = BookingOut),
        (status = 400, description = "Item unavailable or invalid dates"),
        (status = 404, description = "Item or user not found, or own item")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Json(booking): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<BookingOut>)> {
    let created = state.services.bookings.create(booking, user_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Decide a waiting booking (item owner only, one-shot)
#[utoipa::path(
    patch,
    path = "/bookings/{id}",
    tag = "bookings",
    params(
        ("id" = i64, Path, description = "Booking ID"),
        ApproveParams,
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Booking decided", body = BookingOut),
        (status = 400, description = "Booking already decided"),
        (status = 404, description = "Booking not found or acting user is not the owner")
    )
)]
pub async fn approve_booking(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(booking_id): Path<i64>,
    Query(params): Query<ApproveParams>,
) -> AppResult<Json<BookingOut>> {
    let booking = state
        .services
        .bookings
        .approve(booking_id, params.approved, user_id)
        .await?;
    Ok(Json(booking))
}

/// Get a booking (booker or item owner only)
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(
        ("id" = i64, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Booking details", body = BookingOut),
        (status = 404, description = "Booking not found or not visible to the acting user")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(booking_id): Path<i64>,
) -> AppResult<Json<BookingOut>> {
    let booking = state.services.bookings.get_by_id(booking_id, user_id).await?;
    Ok(Json(booking))
}

/// List the acting user's bookings, filtered by state
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    params(
        BookingListParams,
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Bookings by the acting user, newest start first", body = Vec<BookingOut>),
        (status = 400, description = "Unknown state filter"),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_by_booker(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(params): Query<BookingListParams>,
) -> AppResult<Json<Vec<BookingOut>>> {
    let bookings = state.services.bookings.list_by_booker(&params, user_id).await?;
    Ok(Json(bookings))
}

/// List bookings on the acting user's items, filtered by state
#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = "bookings",
    params(
        BookingListParams,
        ("X-Sharer-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Bookings on the acting user's items, newest start first", body = Vec<BookingOut>),
        (status = 400, description = "Unknown state filter"),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_by_owner(
    State(state): State<crate::AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(params): Query<BookingListParams>,
) -> AppResult<Json<Vec<BookingOut>>> {
    let bookings = state.services.bookings.list_by_owner(&params, user_id).await?;
    Ok(Json(bookings))
}
