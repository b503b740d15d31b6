//! Core graph data structures

mod builder;
mod node;

#[cfg(test)]
mod tests;

pub use builder::{build_graph, GraphBuilder, ID_FIELD, WIRES_FIELD};
pub use node::{Graph, Node};
