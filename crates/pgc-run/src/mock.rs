//! Scripted in-memory `Database` used by the unit tests in this crate.

use async_trait::async_trait;
use futures::StreamExt;
use pgc_core::{FkEdge, TableName, TriggerName};
use pgc_db::{CopyStream, Database, DbError, DbResult, TriggerRef};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory catalog with recorded interactions and failure injection.
#[derive(Default)]
pub(crate) struct MockDatabase {
    /// Foreign keys: dependent table -> referenced tables
    foreign_keys: HashMap<String, Vec<String>>,

    /// Triggers as (table, name), in insertion order
    triggers: Vec<(String, String)>,

    /// Number of COPY rows each table yields
    rows: HashMap<String, u64>,

    /// Statements whose execution fails
    fail_statements: HashSet<String>,

    /// Tables whose copy_out fails
    fail_copies: HashSet<String>,

    /// Every statement passed to execute, in order
    executed: Mutex<Vec<String>>,

    /// Every table passed to copy_in, in order
    copied: Mutex<Vec<String>>,
}

impl MockDatabase {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_foreign_key(mut self, dependent: &str, referenced: &str) -> Self {
        self.foreign_keys
            .entry(dependent.to_string())
            .or_default()
            .push(referenced.to_string());
        self
    }

    pub(crate) fn with_trigger(mut self, table: &str, name: &str) -> Self {
        self.triggers.push((table.to_string(), name.to_string()));
        self
    }

    pub(crate) fn with_rows(mut self, table: &str, rows: u64) -> Self {
        self.rows.insert(table.to_string(), rows);
        self
    }

    pub(crate) fn fail_on_statement(mut self, statement: &str) -> Self {
        self.fail_statements.insert(statement.to_string());
        self
    }

    pub(crate) fn fail_copy_of(mut self, table: &str) -> Self {
        self.fail_copies.insert(table.to_string());
        self
    }

    pub(crate) fn executed_statements(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    pub(crate) fn copied_tables(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

#[async_trait]
impl Database for MockDatabase {
    async fn foreign_key_edges(&self, tables: &[TableName]) -> DbResult<Vec<FkEdge>> {
        let mut edges = Vec::new();
        for table in tables {
            if let Some(referenced) = self.foreign_keys.get(table.as_str()) {
                for r in referenced {
                    edges.push(FkEdge::new(table.clone(), TableName::new(r.clone())));
                }
            }
        }
        Ok(edges)
    }

    async fn triggers(&self) -> DbResult<Vec<TriggerRef>> {
        Ok(self
            .triggers
            .iter()
            .map(|(table, name)| TriggerRef {
                table: TableName::new(table.clone()),
                name: TriggerName::new(name.clone()),
            })
            .collect())
    }

    async fn execute(&self, sql: &str) -> DbResult<u64> {
        self.executed.lock().unwrap().push(sql.to_string());
        if self.fail_statements.contains(sql) {
            return Err(DbError::Execution(format!("injected failure: {sql}")));
        }
        Ok(0)
    }

    async fn copy_out(&self, table: &TableName) -> DbResult<CopyStream> {
        if self.fail_copies.contains(table.as_str()) {
            return Err(DbError::Copy(format!("injected copy failure: {table}")));
        }
        let rows = self.rows.get(table.as_str()).copied().unwrap_or(0);
        let chunks: Vec<DbResult<Vec<u8>>> =
            (0..rows).map(|i| Ok(format!("{i}\n").into_bytes())).collect();
        Ok(futures::stream::iter(chunks).boxed())
    }

    async fn copy_in(&self, table: &TableName, mut data: CopyStream) -> DbResult<u64> {
        self.copied.lock().unwrap().push(table.to_string());
        let mut rows = 0;
        while let Some(chunk) = data.next().await {
            chunk?;
            rows += 1;
        }
        Ok(rows)
    }

    fn db_type(&self) -> &'static str {
        "mock"
    }
}
