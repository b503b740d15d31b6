//! Subgraph enumeration
//!
//! Produces every node set whose size lies within the configured bounds and
//! which is *closed*: no member references a node outside the set. By
//! default only sets that are connected in the undirected graph are
//! considered; with `allow_disconnected` every subset is.
//!
//! Results are deterministic. Connected sets are reported by anchor (their
//! minimum index) in increasing order, then in depth-first extension order.

mod connected;
mod exhaustive;
mod types;

pub use types::Subgraph;

use crate::graph::Graph;
use connected::ConnectedSearch;
use exhaustive::ExhaustiveSearch;

/// Enumerates closed subgraphs of a [`Graph`]
#[derive(Debug, Clone)]
pub struct SubgraphEnumerator<'g> {
    graph: &'g Graph,
    lower: usize,
    upper: usize,
    allow_disconnected: bool,
}

impl<'g> SubgraphEnumerator<'g> {
    /// Enumerator over `graph` for single-node subgraphs, connected only
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            lower: 1,
            upper: 1,
            allow_disconnected: false,
        }
    }

    /// Inclusive size range of reported subgraphs
    pub fn bounds(mut self, lower: usize, upper: usize) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Consider every subset rather than only connected ones
    pub fn allow_disconnected(mut self, enable: bool) -> Self {
        self.allow_disconnected = enable;
        self
    }

    /// Run the enumeration. An empty graph or an empty size range
    /// yields no subgraphs.
    pub fn enumerate(&self) -> Vec<Subgraph> {
        if self.graph.is_empty() || self.lower > self.upper || self.upper == 0 {
            return Vec::new();
        }

        let subgraphs = if self.allow_disconnected {
            ExhaustiveSearch::new(self.graph, self.lower, self.upper).run()
        } else {
            ConnectedSearch::new(self.graph, self.lower, self.upper).run()
        };

        tracing::debug!(
            lower = self.lower,
            upper = self.upper,
            allow_disconnected = self.allow_disconnected,
            found = subgraphs.len(),
            "enumeration finished"
        );
        subgraphs
    }
}

/// Enumerate closed subgraphs with sizes in `lower..=upper`
pub fn enumerate_subgraphs(
    graph: &Graph,
    lower: usize,
    upper: usize,
    allow_disconnected: bool,
) -> Vec<Subgraph> {
    SubgraphEnumerator::new(graph)
        .bounds(lower, upper)
        .allow_disconnected(allow_disconnected)
        .enumerate()
}

/// Check that every reference from a member of `members` stays inside it.
/// Indices outside the graph are treated as absent.
pub fn is_closed(graph: &Graph, members: &[usize]) -> bool {
    let mut inside = vec![false; graph.len()];
    for &m in members {
        if let Some(slot) = inside.get_mut(m) {
            *slot = true;
        }
    }
    members
        .iter()
        .filter(|&&m| m < graph.len())
        .all(|&u| graph.directed(u).iter().all(|&v| inside[v]))
}
