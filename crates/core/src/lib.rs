//! Pure domain logic for the Tourwise back office.
//!
//! No I/O lives here: the loyalty scoring engine and the reconciliation
//! date math are plain functions over plain data, so they can be tested
//! without a database.

pub mod error;
pub mod loyalty;
pub mod reconciliation;
pub mod roles;
pub mod types;
