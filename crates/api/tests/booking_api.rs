mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{build_test_app, expect_json, seed_booking, seed_tour, seed_user, send, today_offset};

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_booking_assigns_reference_and_pending_status(pool: PgPool) {
    let user_id = seed_user(&pool, "booker@example.com", "customer").await;
    let tour_id = seed_tour(&pool, "Northern Lights", 4).await;
    let app = build_test_app(pool);

    let response = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        None,
        Some(json!({
            "user_id": user_id,
            "tour_id": tour_id,
            "travel_date": "2026-10-01",
            "total_amount": 1250.0
        })),
    )
    .await;
    let body = expect_json(response, StatusCode::CREATED).await;

    let reference = body["reference"].as_str().unwrap();
    assert!(reference.starts_with("BK-"));
    assert_eq!(reference.len(), 11);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total_amount"], 1250.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_booking_unknown_tour_is_404(pool: PgPool) {
    let user_id = seed_user(&pool, "booker@example.com", "customer").await;
    let app = build_test_app(pool);

    let response = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        None,
        Some(json!({
            "user_id": user_id,
            "tour_id": 999_999,
            "travel_date": "2026-10-01",
            "total_amount": 500.0
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_booking_by_id(pool: PgPool) {
    let user_id = seed_user(&pool, "booker@example.com", "customer").await;
    let tour_id = seed_tour(&pool, "River Cruise", 2).await;
    let booking_id =
        seed_booking(&pool, user_id, tour_id, today_offset(14), "confirmed", 700.0).await;
    let app = build_test_app(pool);

    let response = send(
        &app,
        Method::GET,
        &format!("/api/v1/bookings/{booking_id}"),
        None,
        None,
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["id"], booking_id);
    assert_eq!(body["status"], "confirmed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cancel_is_idempotent_guarded(pool: PgPool) {
    let user_id = seed_user(&pool, "booker@example.com", "customer").await;
    let tour_id = seed_tour(&pool, "Old Town Walk", 1).await;
    let booking_id =
        seed_booking(&pool, user_id, tour_id, today_offset(7), "pending", 120.0).await;
    let app = build_test_app(pool);

    let first = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/bookings/{booking_id}"),
        None,
        None,
    )
    .await;
    let body = expect_json(first, StatusCode::OK).await;
    assert_eq!(body["status"], "cancelled");

    let second = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/bookings/{booking_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completed_booking_cannot_be_cancelled(pool: PgPool) {
    let user_id = seed_user(&pool, "booker@example.com", "customer").await;
    let tour_id = seed_tour(&pool, "Volcano Tour", 3).await;
    let booking_id =
        seed_booking(&pool, user_id, tour_id, today_offset(-30), "completed", 950.0).await;
    let app = build_test_app(pool);

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/bookings/{booking_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn record_and_list_payments(pool: PgPool) {
    let user_id = seed_user(&pool, "booker@example.com", "customer").await;
    let tour_id = seed_tour(&pool, "Coastal Drive", 2).await;
    let booking_id =
        seed_booking(&pool, user_id, tour_id, today_offset(21), "confirmed", 480.0).await;
    let app = build_test_app(pool);

    let created = send(
        &app,
        Method::POST,
        &format!("/api/v1/bookings/{booking_id}/payments"),
        None,
        Some(json!({ "amount": 480.0 })),
    )
    .await;
    let body = expect_json(created, StatusCode::CREATED).await;
    assert_eq!(body["status"], "completed");
    assert!(body["paid_at"].is_string());

    let listed = send(
        &app,
        Method::GET,
        &format!("/api/v1/bookings/{booking_id}/payments"),
        None,
        None,
    )
    .await;
    let body = expect_json(listed, StatusCode::OK).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn payment_amount_must_be_positive(pool: PgPool) {
    let user_id = seed_user(&pool, "booker@example.com", "customer").await;
    let tour_id = seed_tour(&pool, "Harbor Ferry", 1).await;
    let booking_id =
        seed_booking(&pool, user_id, tour_id, today_offset(5), "pending", 60.0).await;
    let app = build_test_app(pool);

    let response = send(
        &app,
        Method::POST,
        &format!("/api/v1/bookings/{booking_id}/payments"),
        None,
        Some(json!({ "amount": -10.0 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
