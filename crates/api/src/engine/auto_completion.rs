//! Booking auto-completion: closes out bookings whose travel window has
//! elapsed and keeps guide availability consistent.
//!
//! The batch is best-effort by design: each candidate runs in its own
//! transaction, a failed item rolls back alone and is reported in the run's
//! error list, and `total_checked` always reflects the full candidate count.
//! A PostgreSQL advisory lock serializes whole runs; concurrent invocations
//! get a Conflict instead of racing the read-then-write on guide status.

use chrono::Utc;
use sqlx::PgPool;
use tourwise_core::error::CoreError;
use tourwise_core::reconciliation::{
    append_completion_note, days_past_end, end_date, guide_is_free, CompletedBooking,
    ReconciliationReport,
};
use tourwise_db::models::status::GuideStatus;
use tourwise_db::repositories::{CompletionCandidate, ReconciliationRepo};

use crate::error::{AppError, AppResult};

/// Advisory lock key for reconciliation runs (arbitrary fixed value,
/// reserved for this job).
const RUN_LOCK_KEY: i64 = 0x7477_7265_636f_6e;

/// Run the auto-completion job once.
///
/// `run_type` is recorded on the audit row (`"manual"` for the admin
/// endpoint, `"scheduled"` for the background task). Fails fatally if the
/// candidate set cannot be fetched or another run is in progress;
/// individual item failures are swallowed into the report.
pub async fn run_auto_completion(pool: &PgPool, run_type: &str) -> AppResult<ReconciliationReport> {
    // Hold one connection for the advisory lock: the lock is session-scoped
    // and must outlive every item transaction (which runs on other
    // connections from the pool).
    let mut lock_conn = pool.acquire().await?;

    if !ReconciliationRepo::try_acquire_run_lock(&mut lock_conn, RUN_LOCK_KEY).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "A reconciliation run is already in progress".into(),
        )));
    }

    let result = run_locked(pool, run_type).await;

    if let Err(e) = ReconciliationRepo::release_run_lock(&mut lock_conn, RUN_LOCK_KEY).await {
        tracing::error!(error = %e, "Failed to release reconciliation lock");
    }

    result
}

async fn run_locked(pool: &PgPool, run_type: &str) -> AppResult<ReconciliationReport> {
    let run = ReconciliationRepo::create_run(pool, run_type).await?;

    let today = Utc::now().date_naive();
    // A failure here is fatal: without the candidate set there is no batch.
    let candidates = ReconciliationRepo::candidates(pool, today).await?;

    let mut report = ReconciliationReport {
        total_checked: candidates.len() as i64,
        ..Default::default()
    };

    tracing::info!(
        run_id = run.id,
        total_checked = report.total_checked,
        "Auto-completion run started"
    );

    for candidate in &candidates {
        match complete_one(pool, candidate).await {
            Ok(Some(detail)) => {
                report.completed_count += 1;
                report.completed_bookings.push(detail);
            }
            Ok(None) => {
                // Claimed by an earlier run between select and update; skip.
                tracing::debug!(booking_id = candidate.booking_id, "Candidate already closed");
            }
            Err(e) => {
                let msg = format!("Booking {} ({}): {e}", candidate.booking_id, candidate.reference);
                tracing::error!(booking_id = candidate.booking_id, error = %e, "Auto-completion item failed");
                report.errors.push(msg);
            }
        }
    }

    let error_count = report.errors.len() as i64;
    let joined = if report.errors.is_empty() {
        None
    } else {
        Some(report.errors.join("; "))
    };
    ReconciliationRepo::complete_run(
        pool,
        run.id,
        report.total_checked,
        report.completed_count,
        error_count,
        joined.as_deref(),
    )
    .await?;

    tracing::info!(
        run_id = run.id,
        completed = report.completed_count,
        errors = error_count,
        "Auto-completion run finished"
    );

    Ok(report)
}

/// Close out one candidate in its own transaction.
///
/// Returns `Ok(None)` when the booking was no longer claimable (processed
/// by a concurrent or earlier run).
async fn complete_one(
    pool: &PgPool,
    candidate: &CompletionCandidate,
) -> Result<Option<CompletedBooking>, sqlx::Error> {
    let now = Utc::now();
    let today = now.date_naive();

    let mut tx = pool.begin().await?;

    if !ReconciliationRepo::claim_booking(&mut tx, candidate.booking_id).await? {
        return Ok(None);
    }

    let notes = append_completion_note(candidate.notes.as_deref(), now);
    ReconciliationRepo::complete_assignment(&mut tx, candidate.assignment_id, &notes, now).await?;

    // Re-derive guide availability from what remains after this completion.
    let active = ReconciliationRepo::count_active_assignments(&mut tx, candidate.guide_id).await?;
    let guide_status = if guide_is_free(active) {
        GuideStatus::Available
    } else {
        GuideStatus::Busy
    };
    ReconciliationRepo::set_guide_status(&mut tx, candidate.guide_id, guide_status).await?;

    tx.commit().await?;

    let end = end_date(candidate.travel_date, candidate.duration_days);
    Ok(Some(CompletedBooking {
        booking_id: candidate.booking_id,
        booking_reference: candidate.reference.clone(),
        guide_name: candidate.guide_name.clone(),
        travel_date: candidate.travel_date,
        end_date: end,
        days_past_end: days_past_end(end, today),
        guide_status_updated: guide_status.as_str().to_string(),
    }))
}
