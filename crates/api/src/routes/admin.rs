//! Route definitions for the `/admin` resource (admin-only operations).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{gift_cards, reconciliation};
use crate::state::AppState;

/// Routes mounted at `/admin`. All handlers enforce the admin role via the
/// `RequireAdmin` extractor.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reconciliation/run", post(reconciliation::run))
        .route("/reconciliation/runs", get(reconciliation::list_runs))
        .route(
            "/bookings/{id}/refund-gift-card",
            post(gift_cards::refund_as_gift_card),
        )
}
