//! Shared helpers for API integration tests.
//!
//! Mirrors the router construction in `main.rs` (via [`build_app_router`])
//! so tests exercise the same middleware stack that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tourwise_api::auth::jwt::{generate_access_token, JwtConfig};
use tourwise_api::config::ServerConfig;
use tourwise_api::router::build_app_router;
use tourwise_api::state::AppState;
use tourwise_core::loyalty::LoyaltyPolicy;
use tourwise_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
        loyalty: LoyaltyPolicy::default(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Generate a bearer token for an arbitrary user id and role, signed with
/// the test secret.
pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).expect("token generation")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request through the router. `token` adds a Bearer header; `body`
/// is serialized as JSON.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

/// GET without auth.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a status and return the JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert a user directly; the password hash is a placeholder, so seeded
/// users cannot log in (tests that need login go through /auth/register).
pub async fn seed_user(pool: &PgPool, email: &str, role: &str) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO users (email, password_hash, full_name, role)
         VALUES ($1, 'not-a-real-hash', 'Test User', $2)
         RETURNING id",
    )
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn seed_tour(pool: &PgPool, name: &str, duration_days: i32) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO tours (name, destination, duration_days, price)
         VALUES ($1, 'Test Destination', $2, 500)
         RETURNING id",
    )
    .bind(name)
    .bind(duration_days)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

/// Insert a booking with a unique reference and the given status
/// (`pending` / `confirmed` / `completed` / `cancelled`).
pub async fn seed_booking(
    pool: &PgPool,
    user_id: DbId,
    tour_id: DbId,
    travel_date: NaiveDate,
    status: &str,
    total_amount: f64,
) -> DbId {
    let reference = format!("BK-{}", &uuid::Uuid::new_v4().simple().to_string()[..8]);
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO bookings (reference, user_id, tour_id, travel_date, status, total_amount)
         VALUES ($1, $2, $3, $4, $5::booking_status, $6)
         RETURNING id",
    )
    .bind(reference)
    .bind(user_id)
    .bind(tour_id)
    .bind(travel_date)
    .bind(status)
    .bind(total_amount)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn seed_payment(pool: &PgPool, booking_id: DbId, amount: f64, status: &str) {
    sqlx::query(
        "INSERT INTO payments (booking_id, amount, status)
         VALUES ($1, $2, $3::payment_status)",
    )
    .bind(booking_id)
    .bind(amount)
    .bind(status)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_guide(pool: &PgPool, full_name: &str, status: &str) -> DbId {
    let email = format!("{}@guides.test", uuid::Uuid::new_v4().simple());
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO guides (full_name, email, status)
         VALUES ($1, $2, $3::guide_status)
         RETURNING id",
    )
    .bind(full_name)
    .bind(email)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn seed_assignment(
    pool: &PgPool,
    guide_id: DbId,
    booking_id: DbId,
    status: &str,
    notes: Option<&str>,
) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO guide_assignments (guide_id, booking_id, status, notes)
         VALUES ($1, $2, $3::assignment_status, $4)
         RETURNING id",
    )
    .bind(guide_id)
    .bind(booking_id)
    .bind(status)
    .bind(notes)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

/// Today's date (UTC) plus an offset in days, for building travel windows
/// relative to the reconciliation clock.
pub fn today_offset(days: i64) -> NaiveDate {
    chrono::Utc::now().date_naive() + chrono::Duration::days(days)
}
