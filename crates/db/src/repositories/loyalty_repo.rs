//! Read-only aggregation feeding the loyalty scoring engine.

use sqlx::PgPool;
use tourwise_core::loyalty::ActivitySnapshot;
use tourwise_core::types::DbId;

/// Aggregates a customer's booking history into an [`ActivitySnapshot`].
pub struct LoyaltyRepo;

impl LoyaltyRepo {
    /// Aggregate over all of the customer's bookings regardless of status:
    /// total count, completed count, and the sum of booking totals that have
    /// a completed payment.
    ///
    /// The `EXISTS` subquery keeps a booking with several payment attempts
    /// from being counted more than once. An unknown `user_id` yields the
    /// all-zero snapshot.
    pub async fn activity_snapshot(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<ActivitySnapshot, sqlx::Error> {
        let row: (i64, i64, f64) = sqlx::query_as(
            "SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE b.status = 'completed'),
                COALESCE(SUM(b.total_amount) FILTER (WHERE EXISTS (
                    SELECT 1 FROM payments p
                    WHERE p.booking_id = b.id AND p.status = 'completed'
                )), 0)::DOUBLE PRECISION
             FROM bookings b
             WHERE b.user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(ActivitySnapshot {
            booking_count: row.0,
            completed_count: row.1,
            total_spent: row.2,
        })
    }
}
