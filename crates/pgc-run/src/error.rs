//! Error types for pgc-run

use pgc_core::TableName;
use pgc_db::DbError;
use thiserror::Error;

/// Errors surfaced while resolving, guarding, or copying
#[derive(Error, Debug)]
pub enum RunError {
    /// R001: Catalog access or statement execution failed
    #[error("[R001] {0}")]
    Db(#[from] DbError),

    /// R002: A trigger statement failed after `applied` statements ran.
    ///
    /// Statements already applied are not reverted; partial application is a
    /// terminal state the operator has to resolve.
    #[error("[R002] Statement failed after {applied} applied: {statement}: {source}")]
    StatementFailed {
        statement: String,
        applied: usize,
        #[source]
        source: DbError,
    },

    /// R003: Copying a table's rows failed
    #[error("[R003] Copy failed for table {table}: {source}")]
    CopyFailed {
        table: TableName,
        #[source]
        source: DbError,
    },
}

/// Result type alias for RunError
pub type RunResult<T> = Result<T, RunError>;
