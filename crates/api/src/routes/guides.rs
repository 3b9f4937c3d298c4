//! Route definitions for the `/guides` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::guides;
use crate::state::AppState;

/// Routes mounted at `/guides`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(guides::list).post(guides::create))
        .route("/{id}", get(guides::get_by_id))
        .route(
            "/{id}/assignments",
            get(guides::list_assignments).post(guides::create_assignment),
        )
}
