//! Table names and DDL.

pub const TABLE_USERS: &str = "users";
pub const TABLE_CURRENT_INTERVIEW: &str = "current_interview";
pub const TABLE_INTERVIEW_HISTORY: &str = "interview_history";

/// Applied in order by [`crate::Database::initialize`]; every statement is
/// idempotent.
pub const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id            TEXT PRIMARY KEY,
        name          TEXT NOT NULL,
        email         TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at    TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS current_interview (
        user_id    TEXT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
        payload    TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS interview_history (
        id             TEXT PRIMARY KEY,
        user_id        TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        job_position   TEXT NOT NULL,
        overall_score  INTEGER NOT NULL,
        interview_ts   INTEGER NOT NULL,
        payload        TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_history_user_ts ON interview_history (user_id, interview_ts DESC)",
];
