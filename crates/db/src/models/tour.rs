//! Tour entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourwise_core::types::{DbId, Timestamp};
use validator::Validate;

/// A tour row from the `tours` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tour {
    pub id: DbId,
    pub name: String,
    pub destination: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tour.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTour {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "destination must not be empty"))]
    pub destination: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "duration_days must be at least 1"))]
    pub duration_days: i32,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

/// DTO for updating an existing tour. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTour {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub description: Option<String>,
    pub duration_days: Option<i32>,
    pub price: Option<f64>,
}
