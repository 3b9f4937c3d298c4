//! Handler for approving a booking refund as a gift card.
//!
//! This is the composition point between the two core components: the
//! loyalty engine sizes the bonus, and the resulting card is persisted for
//! the booking's customer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use tourwise_core::error::CoreError;
use tourwise_core::loyalty::{assess, gift_card_quote, LoyaltyTier};
use tourwise_core::types::DbId;
use tourwise_db::models::gift_card::GiftCard;
use tourwise_db::repositories::{BookingRepo, GiftCardRepo, LoyaltyRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Response payload for the refund-as-gift-card endpoint.
#[derive(Debug, Serialize)]
pub struct RefundGiftCardResponse {
    pub gift_card: GiftCard,
    pub booking_amount: f64,
    pub bonus_percentage: f64,
    pub bonus_amount: f64,
    pub tier: LoyaltyTier,
}

/// Generate a gift card code: `GC-` plus 10 random alphanumerics.
fn new_code() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    format!("GC-{suffix}")
}

/// POST /api/v1/admin/bookings/{id}/refund-gift-card
///
/// Issues a gift card for the booking's total amount plus the customer's
/// loyalty bonus.
pub async fn refund_as_gift_card(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<ApiResponse<RefundGiftCardResponse>>)> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    let snapshot = LoyaltyRepo::activity_snapshot(&state.pool, booking.user_id).await?;
    let bonus = assess(&snapshot, &state.config.loyalty);
    let quote = gift_card_quote(bonus.bonus_percentage, booking.total_amount)
        .map_err(AppError::Core)?;

    let gift_card = GiftCardRepo::create(
        &state.pool,
        &new_code(),
        booking.user_id,
        Some(booking.id),
        quote.total_gift_card_amount,
    )
    .await?;

    tracing::info!(
        booking_id = booking.id,
        user_id = booking.user_id,
        amount = gift_card.amount,
        "Issued refund gift card"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(RefundGiftCardResponse {
            gift_card,
            booking_amount: booking.total_amount,
            bonus_percentage: quote.bonus_percentage,
            bonus_amount: quote.bonus_amount,
            tier: bonus.tier,
        })),
    ))
}
