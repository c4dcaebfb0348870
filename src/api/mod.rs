//! API handlers for Lendhub REST endpoints

pub mod bookings;
pub mod health;
pub mod items;
pub mod openapi;
pub mod requests;
pub mod users;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, AppState};

/// Header carrying the acting user's id, resolved by the caller
pub const SHARER_USER_ID: &str = "X-Sharer-User-Id";

/// Extractor for the acting user id from the `X-Sharer-User-Id` header.
///
/// The id is trusted as given; whether it names a known user is checked by
/// the services against the user directory, not here.
pub struct SharerUserId(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for SharerUserId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(SHARER_USER_ID)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Validation(format!("Missing {} header", SHARER_USER_ID)))?;

        let user_id = header
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation(format!("Invalid {} header", SHARER_USER_ID)))?;

        Ok(SharerUserId(user_id))
    }
}
