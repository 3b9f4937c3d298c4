//! Repository for the `payments` table.

use sqlx::PgPool;
use tourwise_core::types::DbId;

use crate::models::payment::Payment;
use crate::models::status::PaymentStatus;

const COLUMNS: &str = "id, booking_id, amount, status, paid_at, created_at";

/// Provides payment recording and lookup.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Record a payment against a booking. `paid_at` is set when the
    /// payment is already completed.
    pub async fn create(
        pool: &PgPool,
        booking_id: DbId,
        amount: f64,
        status: PaymentStatus,
    ) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (booking_id, amount, status, paid_at)
             VALUES ($1, $2, $3, CASE WHEN $3 = 'completed'::payment_status THEN NOW() END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(booking_id)
            .bind(amount)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// List payments recorded against a booking, oldest first.
    pub async fn list_by_booking(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments WHERE booking_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(booking_id)
            .fetch_all(pool)
            .await
    }
}
