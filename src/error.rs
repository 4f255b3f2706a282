use thiserror::Error;

/// Failures of the probe pipeline, one variant per step
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Schema error: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("Write error: {0}")]
    Write(#[source] sqlx::Error),

    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProbeError {
    /// Name of the pipeline step that failed
    pub fn step(&self) -> &'static str {
        match self {
            ProbeError::Connection(_) => "connect",
            ProbeError::Schema(_) => "ensure_schema",
            ProbeError::Write(_) => "seed_data",
            ProbeError::Query(_) => "fetch",
            ProbeError::Json(_) => "report",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_name_the_failure_kind() {
        let err = ProbeError::Connection(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("Connection error: "));

        let err = ProbeError::Write(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Write error: "));
    }

    #[test]
    fn test_step_names() {
        assert_eq!(ProbeError::Schema(sqlx::Error::RowNotFound).step(), "ensure_schema");
        assert_eq!(ProbeError::Query(sqlx::Error::RowNotFound).step(), "fetch");
    }

    #[test]
    fn test_source_is_preserved() {
        let err = ProbeError::Query(sqlx::Error::RowNotFound);
        assert!(err.source().is_some());
    }
}
