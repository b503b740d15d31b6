//! Brute-force reference implementations

use modsplit::{is_closed, Graph, Subgraph};
use std::collections::{BTreeSet, VecDeque};

/// Whether `members` induce a connected subgraph of the undirected graph
pub fn is_connected(graph: &Graph, members: &[usize]) -> bool {
    let Some(&start) = members.first() else {
        return false;
    };
    let inside: BTreeSet<usize> = members.iter().copied().collect();
    let mut seen = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for &v in graph.undirected(u) {
            if inside.contains(&v) && seen.insert(v) {
                queue.push_back(v);
            }
        }
    }
    seen.len() == inside.len()
}

/// Every closed subset with size in `lower..=upper`, optionally connected
/// only, as sorted member lists
pub fn brute_force(graph: &Graph, lower: usize, upper: usize, connected: bool) -> BTreeSet<Vec<usize>> {
    let n = graph.len();
    let mut result = BTreeSet::new();
    for mask in 0u32..(1u32 << n) {
        let members: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
        if members.len() < lower || members.len() > upper {
            continue;
        }
        if !is_closed(graph, &members) {
            continue;
        }
        if connected && !is_connected(graph, &members) {
            continue;
        }
        result.insert(members);
    }
    result
}

/// Sorted member lists of enumerated subgraphs
pub fn sorted_sets(subgraphs: &[Subgraph]) -> Vec<Vec<usize>> {
    subgraphs.iter().map(Subgraph::sorted).collect()
}
