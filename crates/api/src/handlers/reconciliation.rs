//! Handlers for the `/admin/reconciliation` resource.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tourwise_core::reconciliation::CompletedBooking;
use tourwise_core::types::Timestamp;
use tourwise_db::models::reconciliation_run::ReconciliationRun;
use tourwise_db::repositories::ReconciliationRepo;

use crate::engine::auto_completion::run_auto_completion;
use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Response for `POST /admin/reconciliation/run`.
///
/// `total_checked` always reflects the candidate count; `completed_count`
/// may be lower when individual items failed (those appear in `errors`).
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub success: bool,
    pub message: String,
    pub completed_count: i64,
    pub total_checked: i64,
    pub completed_bookings: Vec<CompletedBooking>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub timestamp: Timestamp,
}

/// POST /api/v1/admin/reconciliation/run
///
/// Trigger an auto-completion pass over expired bookings. Returns 409 if a
/// run is already in progress.
pub async fn run(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<RunResponse>> {
    let report = run_auto_completion(&state.pool, "manual").await?;

    let message = format!(
        "Auto-completed {} of {} expired bookings",
        report.completed_count, report.total_checked
    );

    Ok(Json(RunResponse {
        success: true,
        message,
        completed_count: report.completed_count,
        total_checked: report.total_checked,
        completed_bookings: report.completed_bookings,
        errors: report.errors,
        timestamp: Utc::now(),
    }))
}

/// GET /api/v1/admin/reconciliation/runs
pub async fn list_runs(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<ReconciliationRun>>> {
    let runs =
        ReconciliationRepo::list_runs(&state.pool, params.limit(), params.offset()).await?;
    Ok(Json(runs))
}
