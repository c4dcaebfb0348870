//! Item (shared good) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::booking::BookingShort;
use super::comment::CommentOut;
use super::user::UserShort;

/// Item model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

/// Internal row structure for item queries joined with the owner
#[derive(Debug, Clone, FromRow)]
pub struct ItemWithOwnerRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub owner_name: String,
    pub request_id: Option<i64>,
}

impl From<ItemWithOwnerRow> for ItemOut {
    fn from(row: ItemWithOwnerRow) -> Self {
        ItemOut {
            id: row.id,
            name: row.name,
            description: row.description,
            available: row.available,
            owner: UserShort {
                id: row.owner_id,
                name: row.owner_name,
            },
            request_id: row.request_id,
        }
    }
}

/// Item representation returned by list and search endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemOut {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner: UserShort,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
}

/// Short item representation embedded in booking payloads
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemShort {
    pub id: i64,
    pub name: String,
}

/// Item detail returned by `GET /items/{id}`.
///
/// `last_booking`/`next_booking` are populated only when the caller owns
/// the item; `comments` is always present (empty list if none).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemDetails {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner: UserShort,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
    pub last_booking: Option<BookingShort>,
    pub next_booking: Option<BookingShort>,
    pub comments: Vec<CommentOut>,
}

/// Create item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "Name must not be blank"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description must not be blank"))]
    pub description: String,
    pub available: bool,
    /// Request this item is offered in response to, if any
    pub request_id: Option<i64>,
}

/// Update item request.
///
/// `name`/`description`: absent or blank means unchanged. `available` is
/// tri-state: its presence, not its value, decides whether it is applied.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}
