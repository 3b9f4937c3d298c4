//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input at the boundary, delegate to the corresponding
//! repository in `tourwise_db`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod bookings;
pub mod gift_cards;
pub mod guides;
pub mod loyalty;
pub mod reconciliation;
pub mod tours;
