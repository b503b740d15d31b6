//! modsplit: reference-closed module extraction for node-link flows
//!
//! A flow document is a JSON array of records, each with an `id`, an
//! optional `wires` list of reference groups, and arbitrary other fields
//! that may mention other ids as plain strings. modsplit turns such a
//! document into a graph and enumerates every *module*: a node set within a
//! size range that no member references out of.
//!
//! # Core Concepts
//!
//! - **Graph**: nodes in document order with directed references and their
//!   undirected counterpart ([`GraphBuilder`])
//! - **Closure**: a set is closed when every reference of a member points
//!   at another member ([`is_closed`])
//! - **Enumeration**: connected closed sets by default, or every closed
//!   subset on request ([`SubgraphEnumerator`])
//!
//! # Example
//!
//! ```
//! use modsplit::{enumerate_subgraphs, GraphBuilder};
//! use serde_json::json;
//!
//! let graph = GraphBuilder::new().build(&json!([
//!     { "id": "A", "wires": [["B"]] },
//!     { "id": "B" }
//! ]));
//! let modules = enumerate_subgraphs(&graph, 1, 2, false);
//! assert_eq!(modules.len(), 2);
//! ```

pub mod config;
pub mod enumerate;
pub mod files;
mod graph;
pub mod run;

pub use config::{resolve_config_path, ConfigError, PlusConfig};
pub use enumerate::{enumerate_subgraphs, is_closed, Subgraph, SubgraphEnumerator};
pub use files::{DocumentError, ModuleWriter, WriteError};
pub use graph::{build_graph, Graph, GraphBuilder, Node, ID_FIELD, WIRES_FIELD};
pub use run::{process_document, run, RunError, RunOptions, RunSummary, SizeBounds};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
