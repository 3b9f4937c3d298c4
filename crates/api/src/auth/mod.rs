//! Credential handling: Argon2id password hashing and HS256 access tokens.

pub mod jwt;
pub mod password;
