//! Booking entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourwise_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::status::BookingStatus;

/// A booking row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub reference: String,
    pub user_id: DbId,
    pub tour_id: DbId,
    pub travel_date: NaiveDate,
    pub status: BookingStatus,
    pub total_amount: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new booking. The reference and `pending` status are
/// assigned server-side.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBooking {
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: DbId,
    #[validate(range(min = 1, message = "tour_id must be positive"))]
    pub tour_id: DbId,
    pub travel_date: NaiveDate,
    #[validate(range(min = 0.0, message = "total_amount must not be negative"))]
    pub total_amount: f64,
}

/// DTO for updating an existing booking. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBooking {
    pub travel_date: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
    pub total_amount: Option<f64>,
}
