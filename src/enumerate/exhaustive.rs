//! Unconstrained enumeration over every subset of the node range
//!
//! Exponential in the node count; only meant for small graphs.

use super::types::{Backtrack, Selection, Subgraph};
use crate::graph::Graph;

pub(crate) struct ExhaustiveSearch<'g> {
    graph: &'g Graph,
    lower: usize,
    upper: usize,
    selection: Selection,
    output: Vec<Subgraph>,
}

impl<'g> ExhaustiveSearch<'g> {
    pub(crate) fn new(graph: &'g Graph, lower: usize, upper: usize) -> Self {
        Self {
            graph,
            lower,
            upper,
            selection: Selection::new(graph.len()),
            output: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> Vec<Subgraph> {
        self.choose(0);
        self.output
    }

    /// Decide membership of `index`: include first, then exclude
    fn choose(&mut self, index: usize) {
        let size = self.selection.len();
        let remaining = self.graph.len() - index;
        if size + remaining < self.lower {
            return;
        }
        if remaining == 0 {
            if self.selection.is_closed(self.graph) {
                self.output.push(self.selection.snapshot());
            }
            return;
        }

        if size < self.upper {
            self.with_member(index, |s| s.choose(index + 1));
        }
        self.choose(index + 1);
    }
}

impl Backtrack for ExhaustiveSearch<'_> {
    fn selection(&mut self) -> &mut Selection {
        &mut self.selection
    }
}
