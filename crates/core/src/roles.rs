//! Role name constants.
//!
//! Roles are stored as plain text on the `users` table and embedded in JWT
//! claims. Keeping the names here avoids scattering string literals across
//! handlers and middleware.

/// Back-office administrator: may trigger reconciliation runs and issue
/// gift-card refunds.
pub const ROLE_ADMIN: &str = "admin";

/// Regular customer account created via self-registration.
pub const ROLE_CUSTOMER: &str = "customer";
