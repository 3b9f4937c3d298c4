//! Handlers for the `/guides` resource and guide assignments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tourwise_core::error::CoreError;
use tourwise_core::types::DbId;
use tourwise_db::models::guide::{CreateGuide, Guide};
use tourwise_db::models::guide_assignment::{CreateAssignment, GuideAssignment};
use tourwise_db::models::status::BookingStatus;
use tourwise_db::repositories::{AssignmentRepo, BookingRepo, GuideRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/guides
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGuide>,
) -> AppResult<(StatusCode, Json<Guide>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    let guide = GuideRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(guide)))
}

/// GET /api/v1/guides
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Guide>>> {
    let guides = GuideRepo::list(&state.pool).await?;
    Ok(Json(guides))
}

/// GET /api/v1/guides/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Guide>> {
    let guide = GuideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Guide", id }))?;
    Ok(Json(guide))
}

/// POST /api/v1/guides/{id}/assignments
///
/// Assigns the guide to a booking and marks the guide busy. The booking
/// must exist and still be in a non-terminal status.
pub async fn create_assignment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<GuideAssignment>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    GuideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Guide", id }))?;

    let booking = BookingRepo::find_by_id(&state.pool, input.booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: input.booking_id,
        }))?;

    if !matches!(
        booking.status,
        BookingStatus::Pending | BookingStatus::Confirmed
    ) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Booking {} is {:?}; only pending or confirmed bookings can be assigned",
            booking.reference, booking.status
        ))));
    }

    let assignment =
        AssignmentRepo::create(&state.pool, id, input.booking_id, input.notes.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /api/v1/guides/{id}/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<GuideAssignment>>> {
    GuideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Guide", id }))?;

    let assignments = AssignmentRepo::list_by_guide(&state.pool, id).await?;
    Ok(Json(assignments))
}
