//! PostgreSQL database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::{CopyStream, Database, TriggerRef};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use pgc_core::sql_utils::quote_qualified;
use pgc_core::{FkEdge, TableName, TriggerName};
use sqlx::postgres::{PgPool, PgPoolCopyExt, PgPoolOptions};

/// Foreign keys declared on a set of tables, one row per
/// (dependent, referenced) pair. DISTINCT collapses multi-column
/// constraints, which otherwise produce one row per column.
const FOREIGN_KEY_EDGES_SQL: &str = "\
SELECT DISTINCT
    tc.table_name,
    ccu.table_name AS foreign_table_name
FROM information_schema.table_constraints AS tc
JOIN information_schema.key_column_usage AS kcu
    ON tc.constraint_name = kcu.constraint_name
JOIN information_schema.constraint_column_usage AS ccu
    ON ccu.constraint_name = tc.constraint_name
WHERE tc.constraint_type = 'FOREIGN KEY'
    AND tc.table_name = ANY($1)";

/// Triggers owned by the current user. information_schema.triggers holds
/// one row per firing event, so DISTINCT collapses multi-event triggers.
const TRIGGERS_SQL: &str = "\
SELECT DISTINCT
    event_object_table,
    trigger_name
FROM information_schema.triggers
WHERE trigger_schema = current_user
ORDER BY event_object_table, trigger_name";

/// PostgreSQL database backend over an sqlx connection pool
pub struct PostgresBackend {
    pool: PgPool,
}

impl PostgresBackend {
    /// Connect to a PostgreSQL database.
    ///
    /// The pool stays small: all operations are strictly sequential, the
    /// second connection only covers a COPY holding the first one open.
    pub async fn connect(url: &str) -> DbResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(url)
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Database for PostgresBackend {
    async fn foreign_key_edges(&self, tables: &[TableName]) -> DbResult<Vec<FkEdge>> {
        let names: Vec<String> = tables.iter().map(|t| t.as_str().to_string()).collect();
        let rows: Vec<(String, String)> = sqlx::query_as(FOREIGN_KEY_EDGES_SQL)
            .bind(names)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .filter_map(|(dependent, referenced)| {
                Some(FkEdge::new(
                    TableName::try_new(dependent)?,
                    TableName::try_new(referenced)?,
                ))
            })
            .collect())
    }

    async fn triggers(&self) -> DbResult<Vec<TriggerRef>> {
        let rows: Vec<(String, String)> = sqlx::query_as(TRIGGERS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .filter_map(|(table, name)| {
                Some(TriggerRef {
                    table: TableName::try_new(table)?,
                    name: TriggerName::try_new(name)?,
                })
            })
            .collect())
    }

    async fn execute(&self, sql: &str) -> DbResult<u64> {
        let result = sqlx::query(sql)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::Execution(format!("{}: {}", e, sql)))?;
        Ok(result.rows_affected())
    }

    async fn copy_out(&self, table: &TableName) -> DbResult<CopyStream> {
        let sql = format!("COPY {} TO STDOUT (FORMAT text)", quote_qualified(table));
        let stream = self
            .pool
            .copy_out_raw(&sql)
            .await
            .map_err(|e| DbError::Copy(e.to_string()))?;

        Ok(stream
            .map_ok(|chunk| chunk.to_vec())
            .map_err(|e| DbError::Copy(e.to_string()))
            .boxed())
    }

    async fn copy_in(&self, table: &TableName, mut data: CopyStream) -> DbResult<u64> {
        let sql = format!("COPY {} FROM STDIN (FORMAT text)", quote_qualified(table));
        let mut sink = self
            .pool
            .copy_in_raw(&sql)
            .await
            .map_err(|e| DbError::Copy(e.to_string()))?;

        while let Some(chunk) = data.try_next().await? {
            sink.send(chunk)
                .await
                .map_err(|e| DbError::Copy(e.to_string()))?;
        }

        sink.finish()
            .await
            .map_err(|e| DbError::Copy(e.to_string()))
    }

    fn db_type(&self) -> &'static str {
        "postgres"
    }
}
