//! Domain-level error taxonomy shared by all crates.

use crate::types::DbId;

/// Errors produced by domain logic and the persistence layer's callers.
///
/// The API crate maps each variant to an HTTP status in its `AppError`
/// wrapper; nothing in this crate knows about HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed validation (missing/malformed identifiers or amounts).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with current state (e.g. a reconciliation
    /// run is already in progress).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Authentication is missing or invalid.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The authenticated caller lacks the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure. The message is logged server-side
    /// and never shown verbatim to callers.
    #[error("Internal error: {0}")]
    Internal(String),
}
