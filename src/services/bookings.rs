//! Booking lifecycle service
//!
//! Owns the booking validity rules, the one-shot approval transition and
//! the state-filtered list queries.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{BookingListParams, BookingOut, BookingState, BookingStatus, CreateBooking},
        PageParams,
    },
    repository::Repository,
};

/// Check a requested booking window against "now".
///
/// Both dates must be present, the start must not be in the past and the
/// end must be strictly after the start.
fn validate_window(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start = start.ok_or_else(|| AppError::InvalidDate("Start date is required".to_string()))?;
    let end = end.ok_or_else(|| AppError::InvalidDate("End date is required".to_string()))?;
    if start < now {
        return Err(AppError::InvalidDate(
            "Start date must not be in the past".to_string(),
        ));
    }
    if end <= start {
        return Err(AppError::InvalidDate(
            "End date must be strictly after the start date".to_string(),
        ));
    }
    Ok((start, end))
}

fn parse_state(state: &str) -> AppResult<BookingState> {
    BookingState::from_str(state).map_err(AppError::UnsupportedState)
}

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new booking in WAITING status
    pub async fn create(&self, booking: CreateBooking, user_id: i64) -> AppResult<BookingOut> {
        let booker = self.repository.users.get_by_id(user_id).await?;
        let item = self.repository.items.get_by_id(booking.item_id).await?;

        if !item.available {
            return Err(AppError::ItemNotAvailable(format!(
                "Item {} is not available for booking",
                item.id
            )));
        }
        if booker.id == item.owner_id {
            return Err(AppError::OwnItemBooking(
                "Booking your own item is not possible".to_string(),
            ));
        }
        let (start, end) = validate_window(booking.start, booking.end, Utc::now())?;

        let id = self
            .repository
            .bookings
            .create(item.id, booker.id, start, end)
            .await?;
        tracing::info!("Booking {} created", id);
        self.repository.bookings.get_details(id).await
    }

    /// Decide a WAITING booking. The transition is one-shot: APPROVED and
    /// REJECTED are terminal, a second decision fails.
    pub async fn approve(
        &self,
        booking_id: i64,
        approved: bool,
        user_id: i64,
    ) -> AppResult<BookingOut> {
        let booking = self.repository.bookings.get_by_id(booking_id).await?;
        let item = self.repository.items.get_by_id(booking.item_id).await?;

        if booking.status != BookingStatus::Waiting {
            return Err(AppError::ItemNotAvailable(format!(
                "Booking {} is already decided",
                booking.id
            )));
        }
        if item.owner_id != user_id {
            return Err(AppError::NotAllowed(
                "Only the item owner may decide a booking".to_string(),
            ));
        }

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        self.repository.bookings.set_status(booking.id, status).await?;
        tracing::info!("Booking {} {}", booking.id, status);
        self.repository.bookings.get_details(booking.id).await
    }

    /// Get a booking, visible to its booker and the item owner only
    pub async fn get_by_id(&self, booking_id: i64, user_id: i64) -> AppResult<BookingOut> {
        let booking = self.repository.bookings.get_by_id(booking_id).await?;
        let item = self.repository.items.get_by_id(booking.item_id).await?;

        if booking.booker_id != user_id && item.owner_id != user_id {
            return Err(AppError::NotAllowed(
                "Only the booker or the item owner may view a booking".to_string(),
            ));
        }
        self.repository.bookings.get_details(booking_id).await
    }

    /// List bookings created by a user, filtered by state, newest start first
    pub async fn list_by_booker(
        &self,
        params: &BookingListParams,
        booker_id: i64,
    ) -> AppResult<Vec<BookingOut>> {
        let state = parse_state(&params.state)?;
        let page = PageParams {
            from: params.from,
            size: params.size,
        };
        page.validate()?;
        self.repository.users.get_by_id(booker_id).await?;
        self.repository
            .bookings
            .list_by_booker(booker_id, state, page.limit(), page.offset())
            .await
    }

    /// List bookings on a user's items, filtered by state, newest start first
    pub async fn list_by_owner(
        &self,
        params: &BookingListParams,
        owner_id: i64,
    ) -> AppResult<Vec<BookingOut>> {
        let state = parse_state(&params.state)?;
        let page = PageParams {
            from: params.from,
            size: params.size,
        };
        page.validate()?;
        self.repository.users.get_by_id(owner_id).await?;
        self.repository
            .bookings
            .list_by_owner(owner_id, state, page.limit(), page.offset())
            .await
    }
}
