//! Handlers for the `/tours` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tourwise_core::error::CoreError;
use tourwise_core::types::DbId;
use tourwise_db::models::tour::{CreateTour, Tour, UpdateTour};
use tourwise_db::repositories::TourRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/tours
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTour>,
) -> AppResult<(StatusCode, Json<Tour>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    let tour = TourRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tour)))
}

/// GET /api/v1/tours
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Tour>>> {
    let tours = TourRepo::list(&state.pool, params.limit(), params.offset()).await?;
    Ok(Json(tours))
}

/// GET /api/v1/tours/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Tour>> {
    let tour = TourRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour", id }))?;
    Ok(Json(tour))
}

/// PUT /api/v1/tours/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTour>,
) -> AppResult<Json<Tour>> {
    let tour = TourRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour", id }))?;
    Ok(Json(tour))
}

/// DELETE /api/v1/tours/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TourRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Tour", id }))
    }
}
