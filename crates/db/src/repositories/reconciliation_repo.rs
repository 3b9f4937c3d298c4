//! Queries backing the booking auto-completion job.
//!
//! Candidate selection runs against the pool; the per-item mutation
//! sequence (claim booking, complete assignment, re-derive guide status)
//! takes a `PgConnection` so the engine can scope each item to its own
//! transaction.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use tourwise_core::types::{DbId, Timestamp};

use crate::models::reconciliation_run::ReconciliationRun;
use crate::models::status::GuideStatus;

const RUN_COLUMNS: &str =
    "id, run_type, total_checked, completed_count, error_count, errors, started_at, finished_at";

/// One auto-completion candidate: an expired booking joined to its tour,
/// open guide assignment, and guide.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompletionCandidate {
    pub booking_id: DbId,
    pub reference: String,
    pub travel_date: NaiveDate,
    pub duration_days: i32,
    pub assignment_id: DbId,
    pub notes: Option<String>,
    pub guide_id: DbId,
    pub guide_name: String,
}

/// Provides candidate selection, per-item mutations, and run audit records
/// for the reconciliation job.
pub struct ReconciliationRepo;

impl ReconciliationRepo {
    /// Select bookings eligible for auto-completion as of `today`: status
    /// still {pending, confirmed}, holding a not-yet-completed guide
    /// assignment, with `travel_date + duration_days` strictly before
    /// `today`.
    pub async fn candidates(
        pool: &PgPool,
        today: NaiveDate,
    ) -> Result<Vec<CompletionCandidate>, sqlx::Error> {
        sqlx::query_as::<_, CompletionCandidate>(
            "SELECT b.id AS booking_id,
                    b.reference,
                    b.travel_date,
                    t.duration_days,
                    ga.id AS assignment_id,
                    ga.notes,
                    g.id AS guide_id,
                    g.full_name AS guide_name
             FROM bookings b
             JOIN tours t ON t.id = b.tour_id
             JOIN guide_assignments ga ON ga.booking_id = b.id
             JOIN guides g ON g.id = ga.guide_id
             WHERE b.status IN ('pending', 'confirmed')
               AND ga.status <> 'completed'
               AND b.travel_date + t.duration_days < $1
             ORDER BY b.id",
        )
        .bind(today)
        .fetch_all(pool)
        .await
    }

    /// Claim a candidate booking by marking it completed, guarded on the
    /// status still being non-terminal. Returns `false` when another run
    /// already processed it (idempotent replay).
    pub async fn claim_booking(
        conn: &mut PgConnection,
        booking_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE bookings SET status = 'completed', updated_at = NOW()
             WHERE id = $1 AND status IN ('pending', 'confirmed')",
        )
        .bind(booking_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Complete a guide assignment, replacing its notes with the
    /// audit-appended version and stamping `completed_at`.
    pub async fn complete_assignment(
        conn: &mut PgConnection,
        assignment_id: DbId,
        notes: &str,
        completed_at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE guide_assignments
             SET status = 'completed', notes = $2, completed_at = $3
             WHERE id = $1",
        )
        .bind(assignment_id)
        .bind(notes)
        .bind(completed_at)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Count a guide's remaining active assignments: non-terminal assignment
    /// status on a non-terminal booking.
    pub async fn count_active_assignments(
        conn: &mut PgConnection,
        guide_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*)
             FROM guide_assignments ga
             JOIN bookings b ON b.id = ga.booking_id
             WHERE ga.guide_id = $1
               AND ga.status IN ('assigned', 'in_progress')
               AND b.status IN ('pending', 'confirmed')",
        )
        .bind(guide_id)
        .fetch_one(conn)
        .await?;
        Ok(count)
    }

    /// Set a guide's availability inside the item transaction.
    pub async fn set_guide_status(
        conn: &mut PgConnection,
        guide_id: DbId,
        status: GuideStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE guides SET status = $2 WHERE id = $1")
            .bind(guide_id)
            .bind(status)
            .execute(conn)
            .await?;
        Ok(())
    }

    // ── Single-flight guard ─────────────────────────────────────────────

    /// Try to take the session-scoped advisory lock guarding reconciliation
    /// runs. Returns `false` when another run holds it.
    pub async fn try_acquire_run_lock(
        conn: &mut PgConnection,
        key: i64,
    ) -> Result<bool, sqlx::Error> {
        let (locked,): (bool,) = sqlx::query_as("SELECT pg_try_advisory_lock($1)")
            .bind(key)
            .fetch_one(conn)
            .await?;
        Ok(locked)
    }

    /// Release the advisory lock taken by [`Self::try_acquire_run_lock`].
    pub async fn release_run_lock(conn: &mut PgConnection, key: i64) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT pg_advisory_unlock($1)")
            .bind(key)
            .execute(conn)
            .await?;
        Ok(())
    }

    // ── Run audit records ───────────────────────────────────────────────

    /// Open a run record before scanning candidates.
    pub async fn create_run(
        pool: &PgPool,
        run_type: &str,
    ) -> Result<ReconciliationRun, sqlx::Error> {
        let query = format!(
            "INSERT INTO reconciliation_runs (run_type) VALUES ($1) RETURNING {RUN_COLUMNS}"
        );
        sqlx::query_as::<_, ReconciliationRun>(&query)
            .bind(run_type)
            .fetch_one(pool)
            .await
    }

    /// Finalize a run record with its counts and joined error messages.
    pub async fn complete_run(
        pool: &PgPool,
        id: DbId,
        total_checked: i64,
        completed_count: i64,
        error_count: i64,
        errors: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE reconciliation_runs
             SET total_checked = $2, completed_count = $3, error_count = $4,
                 errors = $5, finished_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(total_checked)
        .bind(completed_count)
        .bind(error_count)
        .bind(errors)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List past runs, most recent first.
    pub async fn list_runs(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ReconciliationRun>, sqlx::Error> {
        let query = format!(
            "SELECT {RUN_COLUMNS} FROM reconciliation_runs
             ORDER BY started_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ReconciliationRun>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
