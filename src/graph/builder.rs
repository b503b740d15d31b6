//! Graph construction from a flow document
//!
//! A document is a JSON array of records. Each record with a string `id`
//! becomes a node. References between nodes are discovered in two passes
//! sharing one per-node dedup set:
//!
//! 1. the `wires` field: a list of groups, each a list of target ids
//!    (only group 0 unless `use_all_wires` is set)
//! 2. every other field, scanned recursively for strings equal to a known id

use super::node::{Graph, Node};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// Field holding the identifier of a record
pub const ID_FIELD: &str = "id";

/// Field holding the grouped wire references of a record
pub const WIRES_FIELD: &str = "wires";

/// Builds a [`Graph`] from a parsed document
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    ignored: HashSet<String>,
    use_all_wires: bool,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip fields with these names (and everything beneath them) when
    /// scanning for incidental references
    pub fn ignore_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Scan every wire group instead of only the first
    pub fn use_all_wires(mut self, enable: bool) -> Self {
        self.use_all_wires = enable;
        self
    }

    /// Build the graph. Never fails: malformed entries are skipped.
    pub fn build(&self, document: &Value) -> Graph {
        let mut graph = Graph::new();
        let Some(entries) = document.as_array() else {
            tracing::debug!("document is not an array, building empty graph");
            return graph;
        };

        for entry in entries {
            let Some(id) = entry.get(ID_FIELD).and_then(Value::as_str) else {
                graph.skipped_records += 1;
                continue;
            };
            if graph.push_node(Node::new(id, entry.clone())).is_none() {
                tracing::warn!(id, "duplicate node id, keeping first occurrence");
            }
        }

        for source in 0..graph.nodes.len() {
            let targets = self.discover(&graph, source);
            for target in targets {
                graph.add_edge(source, target);
            }
        }

        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            skipped = graph.skipped_records,
            duplicates = graph.duplicate_ids.len(),
            "graph built"
        );
        graph
    }

    /// Targets referenced by `source`, deduplicated, in discovery order
    fn discover(&self, graph: &Graph, source: usize) -> Vec<usize> {
        let mut scan = ReferenceScan::new(&graph.index, &self.ignored, source);
        let Some(record) = graph.nodes[source].payload.as_object() else {
            return scan.found;
        };

        if let Some(groups) = record.get(WIRES_FIELD).and_then(Value::as_array) {
            let take = if self.use_all_wires { groups.len() } else { 1 };
            for group in groups.iter().take(take) {
                let Some(targets) = group.as_array() else {
                    continue;
                };
                for target in targets.iter().filter_map(Value::as_str) {
                    scan.link(target);
                }
            }
        }

        scan.visit_record(record);
        scan.found
    }
}

/// Build a graph with the given ignored field names and wire mode
pub fn build_graph<S: AsRef<str>>(document: &Value, ignored: &[S], use_all_wires: bool) -> Graph {
    GraphBuilder::new()
        .ignore_fields(ignored.iter().map(|s| s.as_ref().to_string()))
        .use_all_wires(use_all_wires)
        .build(document)
}

/// Depth-first walk over one record collecting references to known ids
struct ReferenceScan<'a> {
    index: &'a HashMap<String, usize>,
    ignored: &'a HashSet<String>,
    source: usize,
    seen: HashSet<usize>,
    found: Vec<usize>,
}

impl<'a> ReferenceScan<'a> {
    fn new(index: &'a HashMap<String, usize>, ignored: &'a HashSet<String>, source: usize) -> Self {
        Self {
            index,
            ignored,
            source,
            seen: HashSet::new(),
            found: Vec::new(),
        }
    }

    /// Record a reference if `target` names another known node
    fn link(&mut self, target: &str) {
        let Some(&to) = self.index.get(target) else {
            return;
        };
        if to != self.source && self.seen.insert(to) {
            self.found.push(to);
        }
    }

    fn visit_record(&mut self, record: &Map<String, Value>) {
        for (key, value) in record {
            if key == ID_FIELD || key == WIRES_FIELD || self.ignored.contains(key) {
                continue;
            }
            self.visit(value);
        }
    }

    // Sequence elements inherit the name of their field, which was
    // already checked against the ignore set by the enclosing record.
    fn visit(&mut self, value: &Value) {
        match value {
            Value::Object(record) => self.visit_record(record),
            Value::Array(items) => items.iter().for_each(|item| self.visit(item)),
            Value::String(s) => self.link(s),
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }
}
