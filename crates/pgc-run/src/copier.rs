//! Bulk row copy between databases via the COPY protocol.

use crate::error::{RunError, RunResult};
use pgc_core::TableName;
use pgc_db::Database;
use std::sync::Arc;

/// Streams table contents from a source database into a destination.
///
/// One table at a time; the dependency plan decides the order and the
/// trigger guard decides whether integrity checks fire while rows land.
pub struct TableCopier {
    source: Arc<dyn Database>,
    dest: Arc<dyn Database>,
}

impl TableCopier {
    /// Create a copier between the two databases
    pub fn new(source: Arc<dyn Database>, dest: Arc<dyn Database>) -> Self {
        Self { source, dest }
    }

    /// Copy one table's rows, returning the number of rows written.
    pub async fn copy_table(&self, table: &TableName) -> RunResult<u64> {
        let stream = self
            .source
            .copy_out(table)
            .await
            .map_err(|source| RunError::CopyFailed {
                table: table.clone(),
                source,
            })?;

        self.dest
            .copy_in(table, stream)
            .await
            .map_err(|source| RunError::CopyFailed {
                table: table.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDatabase;

    #[tokio::test]
    async fn test_copy_table_streams_rows() {
        let source = Arc::new(MockDatabase::new().with_rows("orders", 3));
        let dest = Arc::new(MockDatabase::new());

        let copier = TableCopier::new(source, dest.clone());
        let rows = copier.copy_table(&TableName::new("orders")).await.unwrap();

        assert_eq!(rows, 3);
        assert_eq!(dest.copied_tables(), vec!["orders"]);
    }

    #[tokio::test]
    async fn test_copy_failure_names_the_table() {
        let source = Arc::new(MockDatabase::new().fail_copy_of("orders"));
        let dest = Arc::new(MockDatabase::new());

        let copier = TableCopier::new(source, dest);
        let err = copier
            .copy_table(&TableName::new("orders"))
            .await
            .unwrap_err();

        match err {
            RunError::CopyFailed { table, .. } => assert_eq!(table, "orders"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
