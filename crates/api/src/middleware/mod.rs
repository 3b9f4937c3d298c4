//! Request guards implemented as Axum extractors.

pub mod auth;
pub mod rbac;
