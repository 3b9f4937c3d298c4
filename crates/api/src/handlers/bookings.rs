//! Handlers for the `/bookings` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tourwise_core::error::CoreError;
use tourwise_core::types::DbId;
use tourwise_db::models::booking::{Booking, CreateBooking, UpdateBooking};
use tourwise_db::models::payment::Payment;
use tourwise_db::models::status::PaymentStatus;
use tourwise_db::repositories::{BookingRepo, PaymentRepo, TourRepo};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// Generate a booking reference: `BK-` plus the first block of a UUID,
/// uppercased.
fn new_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("BK-{}", id[..8].to_uppercase())
}

/// POST /api/v1/bookings
///
/// Creates a `pending` booking with a server-assigned reference. The
/// referenced tour must exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    TourRepo::find_by_id(&state.pool, input.tour_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tour",
            id: input.tour_id,
        }))?;

    let booking = BookingRepo::create(&state.pool, &new_reference(), &input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/v1/bookings
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list(&state.pool, params.limit(), params.offset()).await?;
    Ok(Json(bookings))
}

/// GET /api/v1/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(booking))
}

/// PUT /api/v1/bookings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(booking))
}

/// DELETE /api/v1/bookings/{id}
///
/// Cancels the booking (no hard delete); only non-terminal bookings can be
/// cancelled.
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    match BookingRepo::cancel(&state.pool, id).await? {
        Some(cancelled) => Ok(Json(cancelled)),
        None => Err(AppError::Core(CoreError::Conflict(format!(
            "Booking {} is already {:?} and cannot be cancelled",
            booking.reference, booking.status
        )))),
    }
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

/// Request body for recording a payment.
#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub amount: f64,
    /// Defaults to `completed` when omitted.
    pub status: Option<PaymentStatus>,
}

/// POST /api/v1/bookings/{id}/payments
pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RecordPaymentRequest>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    if !(input.amount > 0.0) {
        return Err(AppError::Core(CoreError::Validation(
            "amount must be a positive number".into(),
        )));
    }

    BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    let status = input.status.unwrap_or(PaymentStatus::Completed);
    let payment = PaymentRepo::create(&state.pool, id, input.amount, status).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// GET /api/v1/bookings/{id}/payments
pub async fn list_payments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = PaymentRepo::list_by_booking(&state.pool, id).await?;
    Ok(Json(payments))
}
