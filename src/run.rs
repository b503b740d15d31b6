//! End-to-end extraction: discover inputs, build graphs, enumerate and
//! write modules

use crate::config::PlusConfig;
use crate::enumerate::{Subgraph, SubgraphEnumerator};
use crate::files::{collect_input_files, load_document, ModuleWriter};
use crate::graph::{Graph, GraphBuilder};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that stop a run before any document is processed
#[derive(Debug, Error)]
pub enum RunError {
    #[error("bounds must be positive integers with lower <= upper (got {lower}..{upper})")]
    InvalidBounds { lower: usize, upper: usize },

    #[error("input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("no JSON files to process under {}", .0.display())]
    NoInputFiles(PathBuf),
}

/// Result type for runs
pub type RunResult<T> = Result<T, RunError>;

/// Validated inclusive module size range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    lower: usize,
    upper: usize,
}

impl SizeBounds {
    pub fn new(lower: usize, upper: usize) -> RunResult<Self> {
        if lower == 0 || upper == 0 || lower > upper {
            return Err(RunError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> usize {
        self.lower
    }

    pub fn upper(&self) -> usize {
        self.upper
    }
}

/// Everything a run needs
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// A `.json` file or a directory of them
    pub input: PathBuf,
    pub bounds: SizeBounds,
    /// Field names excluded from reference scanning; also used in output names
    pub ignored_labels: Vec<String>,
    pub config: PlusConfig,
}

/// What a run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Reports of documents that were loaded, in processing order
    pub files: Vec<FileReport>,
    /// Documents that could not be read or parsed
    pub files_failed: usize,
}

impl RunSummary {
    pub fn files_processed(&self) -> usize {
        self.files.len()
    }

    pub fn subgraphs_found(&self) -> usize {
        self.files.iter().map(|f| f.subgraphs).sum()
    }

    pub fn modules_written(&self) -> usize {
        self.files.iter().map(|f| f.written.len()).sum()
    }
}

/// Outcome for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub nodes: usize,
    pub edges: usize,
    pub subgraphs: usize,
    pub written: Vec<PathBuf>,
}

/// Build the graph of a parsed document and enumerate its modules
pub fn process_document(
    document: &Value,
    bounds: SizeBounds,
    ignored_labels: &[String],
    config: &PlusConfig,
) -> (Graph, Vec<Subgraph>) {
    let graph = GraphBuilder::new()
        .ignore_fields(ignored_labels.iter().cloned())
        .use_all_wires(config.use_all_wires)
        .build(document);
    let subgraphs = SubgraphEnumerator::new(&graph)
        .bounds(bounds.lower(), bounds.upper())
        .allow_disconnected(config.allow_disconnected)
        .enumerate();
    (graph, subgraphs)
}

/// Process every input document
///
/// Documents that cannot be read or parsed are logged and skipped; the run
/// itself only fails when there is nothing to process.
pub fn run(options: &RunOptions) -> RunResult<RunSummary> {
    if !options.input.exists() {
        return Err(RunError::InputNotFound(options.input.clone()));
    }
    let files = collect_input_files(&options.input);
    if files.is_empty() {
        return Err(RunError::NoInputFiles(options.input.clone()));
    }

    tracing::debug!(
        input = %options.input.display(),
        lower = options.bounds.lower(),
        upper = options.bounds.upper(),
        ignored = ?options.ignored_labels,
        use_all_wires = options.config.use_all_wires,
        allow_disconnected = options.config.allow_disconnected,
        files = files.len(),
        "starting run"
    );

    let mut summary = RunSummary::default();
    for path in &files {
        match process_file(path, options) {
            Some(report) => summary.files.push(report),
            None => summary.files_failed += 1,
        }
    }
    Ok(summary)
}

/// Load, enumerate and write one document. Returns `None` when the
/// document could not be loaded.
pub fn process_file(path: &Path, options: &RunOptions) -> Option<FileReport> {
    let document = match load_document(path) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::error!("{}", e);
            return None;
        }
    };

    let (graph, subgraphs) =
        process_document(&document, options.bounds, &options.ignored_labels, &options.config);
    log_graph_summary(&graph);
    tracing::info!(file = %path.display(), subgraphs = subgraphs.len(), "enumerated");

    let mut writer = ModuleWriter::for_input(path, &options.ignored_labels);
    let mut written = Vec::new();
    for subgraph in &subgraphs {
        match writer.write(&graph, subgraph) {
            Ok(out) => {
                tracing::debug!(
                    module = %out.file_name().unwrap_or_default().to_string_lossy(),
                    size = subgraph.len(),
                    nodes = %subgraph.ids(&graph).join(", "),
                    "module written"
                );
                written.push(out);
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }

    Some(FileReport {
        path: path.to_path_buf(),
        nodes: graph.len(),
        edges: graph.edge_count(),
        subgraphs: subgraphs.len(),
        written,
    })
}

fn log_graph_summary(graph: &Graph) {
    let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    tracing::debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        ids = %ids.join(" "),
        "graph summary"
    );
}
