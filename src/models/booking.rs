//! Booking model, lifecycle status and list-filter state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};

use super::item::ItemShort;
use super::user::UserShort;

/// Booking lifecycle status.
///
/// `Waiting` is the only non-terminal status: a booking is decided exactly
/// once, to `Approved` or `Rejected`, and is immutable afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(BookingStatus::Waiting),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

// SQLx conversion for BookingStatus (stored as TEXT)
impl sqlx::Type<Postgres> for BookingStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for BookingStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for BookingStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// List-filter state for booking queries, evaluated against "now".
///
/// Matched exactly (upper-case); anything else is an unsupported state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl std::str::FromStr for BookingState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(BookingState::All),
            "CURRENT" => Ok(BookingState::Current),
            "PAST" => Ok(BookingState::Past),
            "FUTURE" => Ok(BookingState::Future),
            "WAITING" => Ok(BookingState::Waiting),
            "REJECTED" => Ok(BookingState::Rejected),
            _ => Err(s.to_string()),
        }
    }
}

/// Booking model from database
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub item_id: i64,
    pub booker_id: i64,
    pub status: BookingStatus,
}

/// Internal row structure for booking queries joined with item and booker
#[derive(Debug, Clone, FromRow)]
pub struct BookingDetailsRow {
    pub id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub item_id: i64,
    pub item_name: String,
    pub booker_id: i64,
    pub booker_name: String,
}

impl From<BookingDetailsRow> for BookingOut {
    fn from(row: BookingDetailsRow) -> Self {
        BookingOut {
            id: row.id,
            start: row.start_date,
            end: row.end_date,
            status: row.status,
            item: ItemShort {
                id: row.item_id,
                name: row.item_name,
            },
            booker: UserShort {
                id: row.booker_id,
                name: row.booker_name,
            },
        }
    }
}

/// Booking with item and booker details for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingOut {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub item: ItemShort,
    pub booker: UserShort,
}

/// Short booking representation attached to owner item details
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookingShort {
    pub id: i64,
    #[sqlx(rename = "start_date")]
    pub start: DateTime<Utc>,
    #[sqlx(rename = "end_date")]
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub booker_id: i64,
}

/// Create booking request.
///
/// Dates are optional on the wire so that a missing date reaches the
/// validity engine as a date error rather than a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBooking {
    pub item_id: i64,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Query parameters for booking list endpoints
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookingListParams {
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default)]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_state() -> String {
    "ALL".to_string()
}

fn default_size() -> i64 {
    10
}
