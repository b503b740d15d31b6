//! Connected subgraph enumeration
//!
//! Each connected vertex set is generated under exactly one anchor, its
//! minimum index: only neighbours with a larger index than the anchor are
//! ever added. Within an anchor, sibling branches partition the search:
//! branch `i` includes candidate `c_i` and excludes `c_0..c_{i-1}` from
//! itself and everything beneath it, so no set is reached twice.

use super::types::{Backtrack, Selection, Subgraph};
use crate::graph::Graph;

pub(crate) struct ConnectedSearch<'g> {
    graph: &'g Graph,
    lower: usize,
    upper: usize,
    anchor: usize,
    selection: Selection,
    excluded: Vec<bool>,
    output: Vec<Subgraph>,
}

impl<'g> ConnectedSearch<'g> {
    pub(crate) fn new(graph: &'g Graph, lower: usize, upper: usize) -> Self {
        Self {
            graph,
            lower,
            upper,
            anchor: 0,
            selection: Selection::new(graph.len()),
            excluded: vec![false; graph.len()],
            output: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> Vec<Subgraph> {
        for anchor in 0..self.graph.len() {
            self.anchor = anchor;
            let candidates: Vec<usize> = self.higher_neighbours(anchor, &[]);
            self.with_member(anchor, |s| s.extend(&candidates));
        }
        self.output
    }

    fn extend(&mut self, candidates: &[usize]) {
        let size = self.selection.len();
        if size >= self.lower && size <= self.upper && self.selection.is_closed(self.graph) {
            self.output.push(self.selection.snapshot());
        }
        if size >= self.upper {
            return;
        }

        for (i, &candidate) in candidates.iter().enumerate() {
            self.with_member(candidate, |s| {
                let next = s.higher_neighbours(candidate, &candidates[i + 1..]);
                s.extend(&next);
            });
            self.excluded[candidate] = true;
        }
        for &candidate in candidates {
            self.excluded[candidate] = false;
        }
    }

    /// `pending` followed by the neighbours of `index` above the anchor that
    /// are neither members, excluded, nor already pending
    fn higher_neighbours(&self, index: usize, pending: &[usize]) -> Vec<usize> {
        let mut next = pending.to_vec();
        for &neighbour in self.graph.undirected(index) {
            if neighbour > self.anchor
                && !self.selection.contains(neighbour)
                && !self.excluded[neighbour]
                && !next.contains(&neighbour)
            {
                next.push(neighbour);
            }
        }
        next
    }
}

impl Backtrack for ConnectedSearch<'_> {
    fn selection(&mut self) -> &mut Selection {
        &mut self.selection
    }
}
