//! Guide assignment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourwise_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::status::AssignmentStatus;

/// A row from `guide_assignments`: links exactly one guide to exactly one
/// booking.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GuideAssignment {
    pub id: DbId,
    pub guide_id: DbId,
    pub booking_id: DbId,
    pub status: AssignmentStatus,
    pub notes: Option<String>,
    pub assigned_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// DTO for assigning a guide to a booking.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAssignment {
    #[validate(range(min = 1, message = "booking_id must be positive"))]
    pub booking_id: DbId,
    pub notes: Option<String>,
}
