mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{build_test_app, expect_json, get, send};

#[sqlx::test(migrations = "../../db/migrations")]
async fn tour_crud_lifecycle(pool: PgPool) {
    let app = build_test_app(pool);

    let created = send(
        &app,
        Method::POST,
        "/api/v1/tours",
        None,
        Some(json!({
            "name": "Midnight Sun Trek",
            "destination": "Tromso",
            "description": "Summer hiking above the Arctic circle",
            "duration_days": 6,
            "price": 1890.0
        })),
    )
    .await;
    let body = expect_json(created, StatusCode::CREATED).await;
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["duration_days"], 6);

    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/v1/tours/{id}"),
        None,
        Some(json!({ "price": 1790.0 })),
    )
    .await;
    let body = expect_json(updated, StatusCode::OK).await;
    // Partial update leaves other fields untouched.
    assert_eq!(body["price"], 1790.0);
    assert_eq!(body["name"], "Midnight Sun Trek");

    let listed = get(&app, "/api/v1/tours").await;
    let body = expect_json(listed, StatusCode::OK).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let deleted = send(&app, Method::DELETE, &format!("/api/v1/tours/{id}"), None, None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = get(&app, &format!("/api/v1/tours/{id}")).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_tour_rejects_zero_duration(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send(
        &app,
        Method::POST,
        "/api/v1/tours",
        None,
        Some(json!({
            "name": "Instant Tour",
            "destination": "Nowhere",
            "duration_days": 0,
            "price": 10.0
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tour_list_respects_pagination(pool: PgPool) {
    let app = build_test_app(pool);

    for i in 0..5 {
        let response = send(
            &app,
            Method::POST,
            "/api/v1/tours",
            None,
            Some(json!({
                "name": format!("Tour {i}"),
                "destination": "Lisbon",
                "duration_days": 2,
                "price": 100.0
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let page = get(&app, "/api/v1/tours?limit=2&offset=2").await;
    let body = expect_json(page, StatusCode::OK).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
