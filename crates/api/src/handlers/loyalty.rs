//! Handlers for loyalty scoring and gift-card bonus sizing.
//!
//! Both endpoints are pure read/compute: the customer's booking history is
//! aggregated in SQL, scored by `tourwise_core::loyalty`, and returned. A
//! customer with no history scores zero and lands in Bronze with no bonus;
//! an unknown id behaves the same way rather than returning 404.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tourwise_core::error::CoreError;
use tourwise_core::loyalty::{assess, gift_card_quote, ActivityBonus, LoyaltyTier};
use tourwise_core::types::DbId;
use tourwise_db::repositories::LoyaltyRepo;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Response payload for `GET /users/{user_id}/loyalty`.
#[derive(Debug, Serialize)]
pub struct LoyaltyResponse {
    pub user_id: DbId,
    pub bonus: ActivityBonus,
}

/// Request body for `POST /users/{user_id}/loyalty/gift-card`.
#[derive(Debug, Deserialize)]
pub struct GiftCardBonusRequest {
    pub booking_amount: f64,
}

/// Response payload for the gift-card sizing endpoint.
#[derive(Debug, Serialize)]
pub struct GiftCardBonusResponse {
    pub user_id: DbId,
    pub booking_amount: f64,
    pub bonus_percentage: f64,
    pub bonus_amount: f64,
    pub total_gift_card_amount: f64,
    pub tier: LoyaltyTier,
    pub reason: String,
    pub booking_count: i64,
    pub activity_score: f64,
}

fn require_positive_id(user_id: DbId) -> Result<(), AppError> {
    if user_id <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "user_id must be a positive integer".into(),
        )));
    }
    Ok(())
}

/// GET /api/v1/users/{user_id}/loyalty
pub async fn get_bonus(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<LoyaltyResponse>>> {
    require_positive_id(user_id)?;

    let snapshot = LoyaltyRepo::activity_snapshot(&state.pool, user_id).await?;
    let bonus = assess(&snapshot, &state.config.loyalty);

    Ok(Json(ApiResponse::new(LoyaltyResponse { user_id, bonus })))
}

/// POST /api/v1/users/{user_id}/loyalty/gift-card
///
/// Sizes a gift card for the given booking amount using the customer's
/// current tier bonus.
pub async fn gift_card_bonus(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<GiftCardBonusRequest>,
) -> AppResult<Json<ApiResponse<GiftCardBonusResponse>>> {
    require_positive_id(user_id)?;

    let snapshot = LoyaltyRepo::activity_snapshot(&state.pool, user_id).await?;
    let bonus = assess(&snapshot, &state.config.loyalty);
    let quote = gift_card_quote(bonus.bonus_percentage, input.booking_amount)
        .map_err(AppError::Core)?;

    Ok(Json(ApiResponse::new(GiftCardBonusResponse {
        user_id,
        booking_amount: input.booking_amount,
        bonus_percentage: quote.bonus_percentage,
        bonus_amount: quote.bonus_amount,
        total_gift_card_amount: quote.total_gift_card_amount,
        tier: bonus.tier,
        reason: bonus.reason,
        booking_count: bonus.booking_count,
        activity_score: bonus.activity_score,
    })))
}
