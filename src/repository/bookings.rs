//! Bookings repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingDetailsRow, BookingOut, BookingShort, BookingState, BookingStatus},
};

const BOOKING_DETAILS: &str = r#"
    SELECT b.id, b.start_date, b.end_date, b.status,
           b.item_id, i.name AS item_name,
           b.booker_id, u.name AS booker_name
    FROM bookings b
    JOIN items i ON b.item_id = i.id
    JOIN users u ON b.booker_id = u.id
"#;

/// Extra predicate for a state filter, evaluated against NOW() in the database
fn state_predicate(state: BookingState) -> &'static str {
    match state {
        BookingState::All => "",
        BookingState::Current => " AND NOW() BETWEEN b.start_date AND b.end_date",
        BookingState::Past => " AND NOW() > b.end_date",
        BookingState::Future => " AND NOW() < b.start_date",
        BookingState::Waiting => " AND b.status = 'WAITING'",
        BookingState::Rejected => " AND b.status = 'REJECTED'",
    }
}

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// Get booking by ID with item and booker attached
    pub async fn get_details(&self, id: i64) -> AppResult<BookingOut> {
        let query = format!("{} WHERE b.id = $1", BOOKING_DETAILS);
        let row = sqlx::query_as::<_, BookingDetailsRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))?;
        Ok(row.into())
    }

    /// Create a new booking in WAITING status
    pub async fn create(
        &self,
        item_id: i64,
        booker_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO bookings (start_date, end_date, item_id, booker_id, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(item_id)
        .bind(booker_id)
        .bind(BookingStatus::Waiting)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Set the status of a booking
    pub async fn set_status(&self, id: i64, status: BookingStatus) -> AppResult<()> {
        sqlx::query("UPDATE bookings SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// List bookings created by a user, newest start first
    pub async fn list_by_booker(
        &self,
        booker_id: i64,
        state: BookingState,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<BookingOut>> {
        let query = format!(
            "{} WHERE b.booker_id = $1{} ORDER BY b.start_date DESC LIMIT $2 OFFSET $3",
            BOOKING_DETAILS,
            state_predicate(state)
        );
        let rows = sqlx::query_as::<_, BookingDetailsRow>(&query)
            .bind(booker_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List bookings on items owned by a user, newest start first
    pub async fn list_by_owner(
        &self,
        owner_id: i64,
        state: BookingState,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<BookingOut>> {
        let query = format!(
            "{} WHERE i.owner_id = $1{} ORDER BY b.start_date DESC LIMIT $2 OFFSET $3",
            BOOKING_DETAILS,
            state_predicate(state)
        );
        let rows = sqlx::query_as::<_, BookingDetailsRow>(&query)
            .bind(owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Most recent approved booking on an item that has already started
    pub async fn last_for_item(&self, item_id: i64) -> AppResult<Option<BookingShort>> {
        let booking = sqlx::query_as::<_, BookingShort>(
            r#"
            SELECT id, start_date, end_date, status, booker_id
            FROM bookings
            WHERE item_id = $1 AND status = 'APPROVED' AND start_date <= NOW()
            ORDER BY start_date DESC
            LIMIT 1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(booking)
    }

    /// Nearest approved booking on an item that has not yet started
    pub async fn next_for_item(&self, item_id: i64) -> AppResult<Option<BookingShort>> {
        let booking = sqlx::query_as::<_, BookingShort>(
            r#"
            SELECT id, start_date, end_date, status, booker_id
            FROM bookings
            WHERE item_id = $1 AND status = 'APPROVED' AND start_date > NOW()
            ORDER BY start_date
            LIMIT 1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(booking)
    }

    /// Whether a user holds a booking on an item whose end has passed
    pub async fn has_completed_booking(&self, booker_id: i64, item_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE booker_id = $1 AND item_id = $2 AND end_date < NOW()
            )
            "#,
        )
        .bind(booker_id)
        .bind(item_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
