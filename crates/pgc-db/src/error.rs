//! Error types for pgc-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    Connection(String),

    /// Catalog query error (D002)
    #[error("[D002] Catalog query failed: {0}")]
    Query(String),

    /// Statement execution error (D003)
    #[error("[D003] SQL execution failed: {0}")]
    Execution(String),

    /// COPY stream error (D004)
    #[error("[D004] COPY failed: {0}")]
    Copy(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
