//! Dependency-order resolution over the foreign-key catalog.

use crate::error::RunResult;
use pgc_core::{TableGraph, TableName};
use pgc_db::Database;
use std::collections::HashSet;
use std::sync::Arc;

/// The resolved prerequisite set for a start table.
#[derive(Debug)]
pub struct DependencyPlan {
    /// The table resolution started from; never part of `tables`
    pub start: TableName,

    /// Prerequisite tables, duplicate-free, sorted lexicographically by name.
    ///
    /// The sort is by name, not by dependency depth: unrelated branches of
    /// the dependency tree interleave alphabetically, so a prerequisite of a
    /// prerequisite is not guaranteed to appear earlier in the list. Callers
    /// that need strict load ordering must keep referential-integrity
    /// triggers disabled for the whole batch.
    pub tables: Vec<TableName>,

    /// The traversed foreign-key graph, for display and diagnostics
    pub graph: TableGraph,
}

impl DependencyPlan {
    /// Tables to copy: prerequisites first, the start table last.
    pub fn copy_order(&self) -> Vec<TableName> {
        let mut order = self.tables.clone();
        order.push(self.start.clone());
        order
    }

    /// Whether the start table has no prerequisites at all.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Resolves the set of tables that must be populated before a start table.
pub struct DependencyResolver {
    db: Arc<dyn Database>,
}

impl DependencyResolver {
    /// Create a resolver over the given catalog
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self { db }
    }

    /// Compute the ancestor closure of `start` over the foreign-key catalog.
    ///
    /// Follows "depends on" edges only: first the tables referenced by
    /// foreign keys declared on `start`, then the tables referenced by those,
    /// and so on. Tables that merely reference `start` are never pulled in.
    /// A start table with no foreign keys, or one absent from the catalog
    /// entirely, yields an empty plan rather than an error.
    ///
    /// Each round fetches the edges for the whole frontier of newly
    /// discovered tables in one catalog query. The visited set keeps
    /// self-referential and mutually-referential constraints from looping.
    pub async fn resolve(&self, start: &TableName) -> RunResult<DependencyPlan> {
        let mut graph = TableGraph::new();
        graph.add_table(start);

        let mut visited: HashSet<TableName> = HashSet::from([start.clone()]);
        let mut frontier = vec![start.clone()];

        while !frontier.is_empty() {
            let edges = self.db.foreign_key_edges(&frontier).await?;

            let mut next = Vec::new();
            for edge in &edges {
                graph.add_foreign_key(edge);
                if visited.insert(edge.referenced.clone()) {
                    next.push(edge.referenced.clone());
                }
            }
            frontier = next;
        }

        if graph.has_cycle() {
            log::warn!(
                "foreign-key cycle detected while resolving {start}; \
                 revisited tables were not expanded again"
            );
        }

        let mut tables = graph.referenced_closure(start);
        tables.sort();

        Ok(DependencyPlan {
            start: start.clone(),
            tables,
            graph,
        })
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
