//! Periodic invocation of the booking auto-completion job.
//!
//! Runs the reconciliation engine on a fixed interval using
//! `tokio::time::interval`. Each invocation is self-contained and
//! idempotent at the booking level, so the schedule only controls how
//! quickly expired bookings are closed out.

use std::time::Duration;

use sqlx::PgPool;
use tokio_util::sync::CancellationToken;
use tourwise_core::error::CoreError;

use crate::engine::auto_completion::run_auto_completion;
use crate::error::AppError;

/// How often the job runs by default.
const DEFAULT_INTERVAL_SECS: u64 = 3600; // 1 hour

/// Run the auto-completion loop until `cancel` is triggered.
///
/// The interval can be tuned via `RECONCILIATION_INTERVAL_SECS`.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    let interval_secs: u64 = std::env::var("RECONCILIATION_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    tracing::info!(interval_secs, "Auto-completion job started");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Auto-completion job stopping");
                break;
            }
            _ = interval.tick() => {
                match run_auto_completion(&pool, "scheduled").await {
                    Ok(report) => {
                        if report.completed_count > 0 || !report.errors.is_empty() {
                            tracing::info!(
                                completed = report.completed_count,
                                checked = report.total_checked,
                                errors = report.errors.len(),
                                "Scheduled auto-completion finished"
                            );
                        } else {
                            tracing::debug!("Scheduled auto-completion: nothing to do");
                        }
                    }
                    // A manual run holds the lock; try again next tick.
                    Err(AppError::Core(CoreError::Conflict(_))) => {
                        tracing::debug!("Auto-completion skipped: run already in progress");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Scheduled auto-completion failed");
                    }
                }
            }
        }
    }
}
