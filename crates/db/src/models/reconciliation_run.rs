//! Reconciliation run audit records.

use serde::Serialize;
use sqlx::FromRow;
use tourwise_core::types::{DbId, Timestamp};

/// One row per invocation of the auto-completion job, manual or scheduled.
///
/// `errors` holds the joined per-item failure messages of a best-effort
/// batch; `total_checked` always reflects the full candidate count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReconciliationRun {
    pub id: DbId,
    pub run_type: String,
    pub total_checked: i64,
    pub completed_count: i64,
    pub error_count: i64,
    pub errors: Option<String>,
    pub started_at: Timestamp,
    pub finished_at: Option<Timestamp>,
}
