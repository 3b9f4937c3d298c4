pub mod admin;
pub mod auth;
pub mod bookings;
pub mod guides;
pub mod health;
pub mod loyalty;
pub mod tours;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
/// /auth/me                                current user (auth)
///
/// /tours                                  list, create
/// /tours/{id}                             get, update, delete
///
/// /bookings                               list, create
/// /bookings/{id}                          get, update, cancel
/// /bookings/{id}/payments                 list, record
///
/// /guides                                 list, create
/// /guides/{id}                            get
/// /guides/{id}/assignments                list, create
///
/// /users/{user_id}/loyalty                activity bonus (GET)
/// /users/{user_id}/loyalty/gift-card      gift-card sizing (POST)
///
/// /admin/reconciliation/run               trigger auto-completion (POST, admin)
/// /admin/reconciliation/runs              run history (GET, admin)
/// /admin/bookings/{id}/refund-gift-card   issue refund gift card (POST, admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tours", tours::router())
        .nest("/bookings", bookings::router())
        .nest("/guides", guides::router())
        .nest("/users", loyalty::router())
        .nest("/admin", admin::router())
}
