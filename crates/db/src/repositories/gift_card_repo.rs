//! Repository for the `gift_cards` table.

use sqlx::PgPool;
use tourwise_core::types::DbId;

use crate::models::gift_card::GiftCard;

const COLUMNS: &str = "id, code, user_id, booking_id, amount, expires_at, created_at";

/// Provides gift card issuance and lookup.
pub struct GiftCardRepo;

impl GiftCardRepo {
    /// Issue a gift card for a user, optionally tied to the refunded booking.
    pub async fn create(
        pool: &PgPool,
        code: &str,
        user_id: DbId,
        booking_id: Option<DbId>,
        amount: f64,
    ) -> Result<GiftCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO gift_cards (code, user_id, booking_id, amount)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GiftCard>(&query)
            .bind(code)
            .bind(user_id)
            .bind(booking_id)
            .bind(amount)
            .fetch_one(pool)
            .await
    }

    /// List a user's gift cards, most recent first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<GiftCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gift_cards WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, GiftCard>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
