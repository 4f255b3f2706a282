//! The connect, ensure schema, seed, fetch, close sequence.
//!
//! Steps run strictly one after another. The first failure aborts the
//! remaining steps; the session is closed exactly once on every path.

use crate::config::ProbeConfig;
use crate::db::Database;
use crate::error::Result;
use crate::models::{MessageRecord, ProbeReport};
use tracing::info;

/// Operations the pipeline needs from an open session
#[allow(async_fn_in_trait)]
pub trait Session {
    async fn ensure_schema(&mut self) -> Result<()>;
    async fn seed_data(&mut self) -> Result<u64>;
    async fn fetch_all(&mut self) -> Result<Vec<MessageRecord>>;
    async fn count_messages(&mut self) -> Result<i64>;
    async fn close(self);
}

impl Session for Database {
    async fn ensure_schema(&mut self) -> Result<()> {
        Database::ensure_schema(self).await
    }

    async fn seed_data(&mut self) -> Result<u64> {
        Database::seed_data(self).await
    }

    async fn fetch_all(&mut self) -> Result<Vec<MessageRecord>> {
        Database::fetch_all(self).await
    }

    async fn count_messages(&mut self) -> Result<i64> {
        Database::count_messages(self).await
    }

    async fn close(self) {
        Database::close(self).await
    }
}

pub struct DatabaseProbe {
    config: ProbeConfig,
}

impl DatabaseProbe {
    pub fn new(config: ProbeConfig) -> Self {
        DatabaseProbe { config }
    }

    /// Run the full pipeline against the configured endpoint
    pub async fn run(&self) -> Result<ProbeReport> {
        info!("Starting database probe");
        let db = Database::connect(&self.config).await?;
        run_session(db).await
    }
}

/// Drive an already-open session through the pipeline, then close it
pub async fn run_session<S: Session>(mut session: S) -> Result<ProbeReport> {
    let outcome = run_steps(&mut session).await;
    session.close().await;
    outcome
}

async fn run_steps<S: Session>(session: &mut S) -> Result<ProbeReport> {
    session.ensure_schema().await?;
    let inserted = session.seed_data().await?;
    let messages = session.fetch_all().await?;
    let total = session.count_messages().await?;
    info!(found = messages.len(), total, "Probe finished");
    Ok(ProbeReport {
        messages,
        total,
        inserted,
    })
}
