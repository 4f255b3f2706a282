use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Table the probe writes to and reads from
pub const TABLE_NAME: &str = "test_messages";

/// Rows inserted by the seed step, in insertion order
pub const SEED_MESSAGES: [&str; 3] = [
    "Hello from PostgreSQL!",
    "CI/CD test is working",
    "Database connection successful",
];

/// A row of `test_messages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: i32,
    pub message: String,
    // Column has a server default but no NOT NULL, so older tables may hold NULLs.
    pub created_at: Option<NaiveDateTime>,
}

impl fmt::Display for MessageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ID: {}] {}", self.id, self.message)
    }
}

/// What a successful probe run hands back to its caller
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub messages: Vec<MessageRecord>,
    pub total: i64,
    pub inserted: u64,
}
