//! Route definitions for loyalty lookups under `/users`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::loyalty;
use crate::state::AppState;

/// Routes mounted at `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/loyalty", get(loyalty::get_bonus))
        .route("/{user_id}/loyalty/gift-card", post(loyalty::gift_card_bonus))
}
