//! Route definitions for the `/bookings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bookings::list).post(bookings::create))
        .route(
            "/{id}",
            get(bookings::get_by_id)
                .put(bookings::update)
                .delete(bookings::cancel),
        )
        .route(
            "/{id}/payments",
            get(bookings::list_payments).post(bookings::record_payment),
        )
}
