//! Module file output
//!
//! Each subgraph is written beside its input document as
//! `module_<stem>_[<labels>_]<size>_<n>.json`, where `n` counts modules of
//! the same size written for that input.

use super::{WriteError, WriteResult, MODULE_PREFIX};
use crate::enumerate::Subgraph;
use crate::graph::Graph;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Writes the subgraphs of one input document
#[derive(Debug, Clone)]
pub struct ModuleWriter {
    output_dir: PathBuf,
    stem: String,
    labels: String,
    counters: BTreeMap<usize, usize>,
}

impl ModuleWriter {
    /// Writer for modules extracted from `input`, named after the ignored
    /// field labels in the order given
    pub fn for_input<S: AsRef<str>>(input: &Path, ignored_labels: &[S]) -> Self {
        let output_dir = input.parent().map(Path::to_path_buf).unwrap_or_default();
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let labels = ignored_labels
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<_>>()
            .join("_");
        Self {
            output_dir,
            stem,
            labels,
            counters: BTreeMap::new(),
        }
    }

    /// Write modules into `dir` instead of beside the input
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Allocate the next file name for a module of `size` nodes
    pub fn next_file_name(&mut self, size: usize) -> String {
        let counter = self.counters.entry(size).or_insert(0);
        *counter += 1;

        let mut name = format!("{}{}_", MODULE_PREFIX, self.stem);
        if !self.labels.is_empty() {
            name.push_str(&self.labels);
            name.push('_');
        }
        name.push_str(&format!("{}_{}.json", size, counter));
        name
    }

    /// Number of modules of `size` nodes named so far
    pub fn count(&self, size: usize) -> usize {
        self.counters.get(&size).copied().unwrap_or(0)
    }

    /// Write one subgraph as a JSON array of the members' original records
    pub fn write(&mut self, graph: &Graph, subgraph: &Subgraph) -> WriteResult<PathBuf> {
        let name = self.next_file_name(subgraph.len());
        let path = self.output_dir.join(name);
        let text = render_module(graph, subgraph)?;
        std::fs::write(&path, text).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Render a subgraph's records with four-space indentation
pub fn render_module(graph: &Graph, subgraph: &Subgraph) -> WriteResult<String> {
    let records: Vec<&Value> = subgraph
        .iter()
        .filter_map(|i| graph.node(i))
        .map(|n| &n.payload)
        .collect();

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
