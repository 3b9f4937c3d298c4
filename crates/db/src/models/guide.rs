//! Guide entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourwise_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::status::GuideStatus;

/// A guide row from the `guides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Guide {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub status: GuideStatus,
    pub created_at: Timestamp,
}

/// DTO for creating a new guide.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuide {
    #[validate(length(min = 1, message = "full_name must not be empty"))]
    pub full_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}
