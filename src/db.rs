use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};
use crate::models::{MessageRecord, SEED_MESSAGES, TABLE_NAME};
use sqlx::{Connection, PgConnection};
use tracing::{debug, info};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS test_messages (
    id SERIAL PRIMARY KEY,
    message TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

// Rows whose text is already present are filtered out, so reseeding a table
// without a uniqueness constraint does not duplicate them.
const SEED_SQL: &str = "INSERT INTO test_messages (message)
    SELECT seed.message
    FROM UNNEST($1::text[]) WITH ORDINALITY AS seed(message, ord)
    WHERE NOT EXISTS (
        SELECT 1 FROM test_messages existing WHERE existing.message = seed.message
    )
    ORDER BY seed.ord
    ON CONFLICT DO NOTHING";

const SELECT_ALL_SQL: &str = "SELECT id, message, created_at FROM test_messages ORDER BY id";

const COUNT_SQL: &str = "SELECT COUNT(*) FROM test_messages";

/// A single live session to the database
pub struct Database {
    conn: PgConnection,
}

impl Database {
    /// Open one connection; no retry is attempted
    pub async fn connect(config: &ProbeConfig) -> Result<Self> {
        debug!(url = %config.redacted_url(), "connecting");
        let conn = PgConnection::connect(&config.database_url)
            .await
            .map_err(ProbeError::Connection)?;
        info!(url = %config.redacted_url(), "Connected to database successfully");
        Ok(Database { conn })
    }

    /// Round-trip `SELECT 1`
    pub async fn ping(&mut self) -> Result<i32> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&mut self.conn)
            .await
            .map_err(ProbeError::Query)
    }

    /// Create `test_messages` unless it already exists
    pub async fn ensure_schema(&mut self) -> Result<()> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&mut self.conn)
            .await
            .map_err(ProbeError::Schema)?;
        info!(table = TABLE_NAME, "Test table created successfully");
        Ok(())
    }

    /// Insert the seed messages that are not present yet, returning how many were written
    pub async fn seed_data(&mut self) -> Result<u64> {
        let messages: Vec<String> = SEED_MESSAGES.iter().map(|m| m.to_string()).collect();
        let result = sqlx::query(SEED_SQL)
            .bind(messages)
            .execute(&mut self.conn)
            .await
            .map_err(ProbeError::Write)?;
        let inserted = result.rows_affected();
        info!(inserted, "Test data inserted successfully");
        Ok(inserted)
    }

    /// All messages, ascending by id
    pub async fn fetch_all(&mut self) -> Result<Vec<MessageRecord>> {
        let records = sqlx::query_as::<_, MessageRecord>(SELECT_ALL_SQL)
            .fetch_all(&mut self.conn)
            .await
            .map_err(ProbeError::Query)?;
        debug!(count = records.len(), "fetched messages");
        Ok(records)
    }

    pub async fn count_messages(&mut self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(COUNT_SQL)
            .fetch_one(&mut self.conn)
            .await
            .map_err(ProbeError::Query)
    }

    /// Check `information_schema` for the probe table in the current schema
    pub async fn table_exists(&mut self) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT FROM information_schema.tables
                WHERE table_schema = current_schema() AND table_name = $1
            )",
        )
        .bind(TABLE_NAME)
        .fetch_one(&mut self.conn)
        .await
        .map_err(ProbeError::Query)
    }

    /// `(column_name, data_type)` pairs of the probe table in ordinal order
    pub async fn columns(&mut self) -> Result<Vec<(String, String)>> {
        sqlx::query_as::<_, (String, String)>(
            "SELECT column_name::text, data_type::text
             FROM information_schema.columns
             WHERE table_schema = current_schema() AND table_name = $1
             ORDER BY ordinal_position",
        )
        .bind(TABLE_NAME)
        .fetch_all(&mut self.conn)
        .await
        .map_err(ProbeError::Query)
    }

    /// Release the session. Best effort: a failing close is logged and
    /// never replaces an earlier error.
    pub async fn close(self) {
        match self.conn.close().await {
            Ok(()) => info!("Database connection closed"),
            Err(e) => debug!(error = %e, "ignoring error while closing connection"),
        }
    }
}
