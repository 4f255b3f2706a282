pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod output;
pub mod probe;

pub use config::{DEFAULT_DATABASE_URL, ProbeConfig};
pub use error::{ProbeError, Result};
pub use models::{MessageRecord, ProbeReport};
