//! Payment entity model.

use serde::Serialize;
use sqlx::FromRow;
use tourwise_core::types::{DbId, Timestamp};

use crate::models::status::PaymentStatus;

/// A payment row from the `payments` table. One booking may accumulate
/// several payment attempts; only `completed` ones count as spend.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub booking_id: DbId,
    pub amount: f64,
    pub status: PaymentStatus,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
