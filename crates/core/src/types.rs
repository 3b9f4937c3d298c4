/// Primary key type shared by every table (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp used across models and run reports.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
