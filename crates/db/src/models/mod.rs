//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod booking;
pub mod gift_card;
pub mod guide;
pub mod guide_assignment;
pub mod payment;
pub mod reconciliation_run;
pub mod status;
pub mod tour;
pub mod user;
