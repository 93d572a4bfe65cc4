//! Foreign-key dependency graph over catalog tables.

use crate::table_name::TableName;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// A directed relationship derived from a foreign-key constraint:
/// the dependent table must be populated after the referenced table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FkEdge {
    /// The table the foreign key is declared on
    pub dependent: TableName,

    /// The table the foreign key points at
    pub referenced: TableName,
}

impl FkEdge {
    /// Create an edge from dependent to referenced table.
    pub fn new(dependent: TableName, referenced: TableName) -> Self {
        Self {
            dependent,
            referenced,
        }
    }
}

/// A directed graph of foreign-key relationships between tables.
///
/// Edges point from a dependent table to the table it references. Unlike a
/// model DAG, this graph may legally contain cycles (self-referential and
/// mutually-referential constraints exist in real catalogs), so every
/// traversal guards against revisiting nodes.
#[derive(Debug, Default)]
pub struct TableGraph {
    /// The underlying graph
    graph: DiGraph<TableName, ()>,

    /// Map from table name to node index
    node_map: HashMap<TableName, NodeIndex>,
}

impl TableGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Add a table to the graph, returning the existing node if present
    pub fn add_table(&mut self, name: &TableName) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            idx
        } else {
            let idx = self.graph.add_node(name.clone());
            self.node_map.insert(name.clone(), idx);
            idx
        }
    }

    /// Add a foreign-key edge (dependent references referenced).
    ///
    /// Re-adding the same edge is a no-op rather than a parallel edge.
    pub fn add_foreign_key(&mut self, edge: &FkEdge) {
        let dep_idx = self.add_table(&edge.dependent);
        let ref_idx = self.add_table(&edge.referenced);
        self.graph.update_edge(dep_idx, ref_idx, ());
    }

    /// Build a graph from a list of foreign-key edges.
    pub fn from_edges(edges: &[FkEdge]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_foreign_key(edge);
        }
        graph
    }

    /// All tables reachable from `start` by following foreign keys outward,
    /// in discovery order.
    ///
    /// This is the set of tables `start` transitively depends on; `start`
    /// itself is never included, even when a cycle leads back to it. Cyclic
    /// constraint chains terminate through the visited set.
    pub fn referenced_closure(&self, start: &TableName) -> Vec<TableName> {
        let Some(&start_idx) = self.node_map.get(start) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut visited = HashSet::from([start_idx]);
        let mut stack = vec![start_idx];

        while let Some(idx) = stack.pop() {
            for edge in self.graph.edges_directed(idx, Direction::Outgoing) {
                let target = edge.target();
                if visited.insert(target) {
                    result.push(self.graph[target].clone());
                    stack.push(target);
                }
            }
        }

        result
    }

    /// Tables directly referenced by foreign keys on `table`, sorted by name.
    pub fn direct_references(&self, table: &TableName) -> Vec<TableName> {
        let Some(&idx) = self.node_map.get(table) else {
            return Vec::new();
        };
        let mut refs: Vec<TableName> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| self.graph[e.target()].clone())
            .collect();
        refs.sort();
        refs
    }

    /// Whether the graph contains at least one foreign-key cycle.
    pub fn has_cycle(&self) -> bool {
        petgraph::algo::is_cyclic_directed(&self.graph)
    }

    /// Check if a table exists in the graph
    pub fn contains(&self, table: &TableName) -> bool {
        self.node_map.contains_key(table)
    }

    /// All table names in the graph, sorted by name.
    pub fn tables(&self) -> Vec<TableName> {
        let mut tables: Vec<TableName> = self.node_map.keys().cloned().collect();
        tables.sort();
        tables
    }

    /// Number of tables in the graph
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    /// Whether the graph has no tables
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
