//! Status enums mapped to PostgreSQL enum types.
//!
//! The lifecycle state machines live in the type system: a status column can
//! only hold one of the values declared in the migration, and every Rust-side
//! transition goes through these enums.

use serde::{Deserialize, Serialize};

/// `bookings.status` — the only field the reconciliation job mutates on a
/// booking. `Pending` and `Confirmed` are the non-terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// `payments.status`. Only `Completed` payments count toward loyalty spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// `guides.status` — derived: busy iff the guide holds at least one active
/// assignment. Re-established by the reconciliation job after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "guide_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GuideStatus {
    Available,
    Busy,
}

impl GuideStatus {
    /// Wire label, used in reconciliation run details.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
        }
    }
}

/// `guide_assignments.status`. `Assigned` and `InProgress` are the
/// non-terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "assignment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Assigned,
    InProgress,
    Completed,
}
