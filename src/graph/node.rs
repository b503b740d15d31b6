//! Node and graph representation

use serde_json::Value;
use std::collections::HashMap;

/// A record from the input document that carries a string `id`
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique identifier, taken from the record's `id` field
    pub id: String,
    /// The full original record, written back out verbatim
    pub payload: Value,
}

impl Node {
    pub fn new(id: impl Into<String>, payload: Value) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }
}

/// Node-link graph built from a document
///
/// Nodes are indexed by their position of first appearance in the document.
/// `directed[i]` lists the nodes that node `i` references; `undirected[i]`
/// is its symmetric counterpart used for connectivity.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) directed: Vec<Vec<usize>>,
    pub(crate) undirected: Vec<Vec<usize>>,
    pub(crate) skipped_records: usize,
    pub(crate) duplicate_ids: Vec<String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up the index of a node by id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Nodes referenced by `index`, in discovery order
    pub fn directed(&self, index: usize) -> &[usize] {
        self.directed.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes adjacent to `index` ignoring edge direction
    pub fn undirected(&self, index: usize) -> &[usize] {
        self.undirected.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of directed references
    pub fn edge_count(&self) -> usize {
        self.directed.iter().map(Vec::len).sum()
    }

    /// Entries of the document that did not become nodes
    /// (non-records, missing or non-string `id`)
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    /// Ids of records rejected because an earlier record already used them
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicate_ids
    }

    /// Append a node, returning its index. A repeated id is rejected.
    pub(crate) fn push_node(&mut self, node: Node) -> Option<usize> {
        if self.index.contains_key(&node.id) {
            self.duplicate_ids.push(node.id);
            return None;
        }
        let idx = self.nodes.len();
        self.index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        self.directed.push(Vec::new());
        self.undirected.push(Vec::new());
        Some(idx)
    }

    /// Record a reference `from -> to` and its undirected pair
    pub(crate) fn add_edge(&mut self, from: usize, to: usize) {
        self.directed[from].push(to);
        self.undirected[from].push(to);
        self.undirected[to].push(from);
    }
}
