//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use futures::stream::BoxStream;
use pgc_core::{FkEdge, TableName, TriggerName};

/// Chunks of COPY data flowing out of one database and into another.
pub type CopyStream = BoxStream<'static, DbResult<Vec<u8>>>;

/// A trigger as listed in the catalog's trigger metadata.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TriggerRef {
    /// Table the trigger fires on
    pub table: TableName,

    /// Trigger name
    pub name: TriggerName,
}

/// Database abstraction trait for pgcopy
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Foreign-key edges declared on any of the given tables.
    ///
    /// One edge per (dependent, referenced) pair; multi-column constraints
    /// collapse to a single edge. Tables without foreign keys (or absent
    /// from the catalog) simply contribute no edges.
    async fn foreign_key_edges(&self, tables: &[TableName]) -> DbResult<Vec<FkEdge>>;

    /// Integrity triggers owned by the current schema/user.
    ///
    /// No ordering is promised; callers sort as needed.
    async fn triggers(&self) -> DbResult<Vec<TriggerRef>>;

    /// Execute a DDL/DML statement, returning affected rows
    async fn execute(&self, sql: &str) -> DbResult<u64>;

    /// Stream a table's rows out via the COPY protocol
    async fn copy_out(&self, table: &TableName) -> DbResult<CopyStream>;

    /// Stream rows into a table via the COPY protocol, returning the number
    /// of rows written
    async fn copy_in(&self, table: &TableName, data: CopyStream) -> DbResult<u64>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
