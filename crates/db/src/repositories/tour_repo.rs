//! Repository for the `tours` table.

use sqlx::PgPool;
use tourwise_core::types::DbId;

use crate::models::tour::{CreateTour, Tour, UpdateTour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, destination, description, duration_days, price, created_at, updated_at";

/// Provides CRUD operations for tours.
pub struct TourRepo;

impl TourRepo {
    /// Insert a new tour, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTour) -> Result<Tour, sqlx::Error> {
        let query = format!(
            "INSERT INTO tours (name, destination, description, duration_days, price)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(&input.name)
            .bind(&input.destination)
            .bind(&input.description)
            .bind(input.duration_days)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a tour by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tours WHERE id = $1");
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tours ordered by most recently created first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Tour>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tours ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a tour. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTour,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!(
            "UPDATE tours SET
                name = COALESCE($2, name),
                destination = COALESCE($3, destination),
                description = COALESCE($4, description),
                duration_days = COALESCE($5, duration_days),
                price = COALESCE($6, price),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.destination)
            .bind(&input.description)
            .bind(input.duration_days)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tour by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tours WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
