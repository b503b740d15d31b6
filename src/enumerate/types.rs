//! Subgraph result type and shared backtracking state

use crate::graph::Graph;

/// A set of node indices produced by enumeration
///
/// Members are listed in the order the search added them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subgraph {
    pub nodes: Vec<usize>,
}

impl Subgraph {
    pub fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.nodes.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.iter().copied()
    }

    /// Ids of the members, in member order
    pub fn ids<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.nodes
            .iter()
            .filter_map(|&i| graph.node(i))
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Members in ascending index order
    pub fn sorted(&self) -> Vec<usize> {
        let mut nodes = self.nodes.clone();
        nodes.sort_unstable();
        nodes
    }
}

/// Membership bitmap plus the path of members in insertion order
#[derive(Debug)]
pub(crate) struct Selection {
    member: Vec<bool>,
    path: Vec<usize>,
}

impl Selection {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            member: vec![false; node_count],
            path: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.path.len()
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.member[index]
    }

    pub(crate) fn push(&mut self, index: usize) {
        debug_assert!(!self.member[index]);
        self.member[index] = true;
        self.path.push(index);
    }

    pub(crate) fn pop(&mut self) {
        if let Some(index) = self.path.pop() {
            self.member[index] = false;
        }
    }

    /// No member references a node outside the selection
    pub(crate) fn is_closed(&self, graph: &Graph) -> bool {
        self.path
            .iter()
            .all(|&u| graph.directed(u).iter().all(|&v| self.member[v]))
    }

    pub(crate) fn snapshot(&self) -> Subgraph {
        Subgraph::new(self.path.clone())
    }
}

/// A search that grows and shrinks a [`Selection`]
pub(crate) trait Backtrack: Sized {
    fn selection(&mut self) -> &mut Selection;

    /// Run `f` with `index` added to the selection, removing it afterwards
    fn with_member<F: FnOnce(&mut Self)>(&mut self, index: usize, f: F) {
        self.selection().push(index);
        f(self);
        self.selection().pop();
    }
}
