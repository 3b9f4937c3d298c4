//! Repository for the `bookings` table.

use sqlx::PgPool;
use tourwise_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking, UpdateBooking};
use crate::models::status::BookingStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, reference, user_id, tour_id, travel_date, status, total_amount, created_at, updated_at";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking in `pending` status with a server-assigned
    /// reference, returning the created row.
    pub async fn create(
        pool: &PgPool,
        reference: &str,
        input: &CreateBooking,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (reference, user_id, tour_id, travel_date, total_amount)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(reference)
            .bind(input.user_id)
            .bind(input.tour_id)
            .bind(input.travel_date)
            .bind(input.total_amount)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bookings, most recently created first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List a single customer's bookings, most recently created first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a booking. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET
                travel_date = COALESCE($2, travel_date),
                status = COALESCE($3, status),
                total_amount = COALESCE($4, total_amount),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(input.travel_date)
            .bind(input.status)
            .bind(input.total_amount)
            .fetch_optional(pool)
            .await
    }

    /// Cancel a booking. Only non-terminal bookings can be cancelled;
    /// returns `None` when the booking is absent or already terminal.
    pub async fn cancel(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW()
             WHERE id = $1 AND status IN ('pending', 'confirmed')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(BookingStatus::Cancelled)
            .fetch_optional(pool)
            .await
    }
}
