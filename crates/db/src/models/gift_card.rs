//! Gift card entity model.

use serde::Serialize;
use sqlx::FromRow;
use tourwise_core::types::{DbId, Timestamp};

/// A gift card row. Issued by an admin approving a refund as a gift card;
/// the amount includes the loyalty bonus uplift.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GiftCard {
    pub id: DbId,
    pub code: String,
    pub user_id: DbId,
    pub booking_id: Option<DbId>,
    pub amount: f64,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
