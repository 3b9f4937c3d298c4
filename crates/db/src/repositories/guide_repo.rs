//! Repositories for the `guides` and `guide_assignments` tables.

use sqlx::PgPool;
use tourwise_core::types::DbId;

use crate::models::guide::{CreateGuide, Guide};
use crate::models::guide_assignment::GuideAssignment;
use crate::models::status::GuideStatus;

const GUIDE_COLUMNS: &str = "id, full_name, email, status, created_at";
const ASSIGNMENT_COLUMNS: &str =
    "id, guide_id, booking_id, status, notes, assigned_at, completed_at";

/// Provides CRUD operations for guides.
pub struct GuideRepo;

impl GuideRepo {
    /// Insert a new guide in `available` status, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGuide) -> Result<Guide, sqlx::Error> {
        let query = format!(
            "INSERT INTO guides (full_name, email)
             VALUES ($1, $2)
             RETURNING {GUIDE_COLUMNS}"
        );
        sqlx::query_as::<_, Guide>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a guide by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guide>, sqlx::Error> {
        let query = format!("SELECT {GUIDE_COLUMNS} FROM guides WHERE id = $1");
        sqlx::query_as::<_, Guide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all guides, alphabetically by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Guide>, sqlx::Error> {
        let query = format!("SELECT {GUIDE_COLUMNS} FROM guides ORDER BY full_name");
        sqlx::query_as::<_, Guide>(&query).fetch_all(pool).await
    }

    /// Set a guide's availability status. Returns `true` if a row changed.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: GuideStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE guides SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides operations for guide assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Assign a guide to a booking and mark the guide busy, atomically.
    pub async fn create(
        pool: &PgPool,
        guide_id: DbId,
        booking_id: DbId,
        notes: Option<&str>,
    ) -> Result<GuideAssignment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO guide_assignments (guide_id, booking_id, notes)
             VALUES ($1, $2, $3)
             RETURNING {ASSIGNMENT_COLUMNS}"
        );
        let assignment = sqlx::query_as::<_, GuideAssignment>(&query)
            .bind(guide_id)
            .bind(booking_id)
            .bind(notes)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE guides SET status = $2 WHERE id = $1")
            .bind(guide_id)
            .bind(GuideStatus::Busy)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(assignment)
    }

    /// Find an assignment by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GuideAssignment>, sqlx::Error> {
        let query = format!("SELECT {ASSIGNMENT_COLUMNS} FROM guide_assignments WHERE id = $1");
        sqlx::query_as::<_, GuideAssignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a guide's assignments, most recent first.
    pub async fn list_by_guide(
        pool: &PgPool,
        guide_id: DbId,
    ) -> Result<Vec<GuideAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSIGNMENT_COLUMNS} FROM guide_assignments
             WHERE guide_id = $1 ORDER BY assigned_at DESC"
        );
        sqlx::query_as::<_, GuideAssignment>(&query)
            .bind(guide_id)
            .fetch_all(pool)
            .await
    }
}
