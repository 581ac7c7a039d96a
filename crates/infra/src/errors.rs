//! Infrastructure error types and their mapping into the domain error.

use buidlmatch_domain::BuidlMatchError;
use thiserror::Error;

/// Errors raised by infrastructure adapters.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<InfraError> for BuidlMatchError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Sqlite(e) => Self::Database(format!("SQLite error: {e}")),
            InfraError::Pool(e) => Self::Database(format!("connection pool error: {e}")),
            InfraError::Serde(e) => Self::Serialization(e.to_string()),
            InfraError::Io(e) => Self::Internal(e.to_string()),
        }
    }
}
