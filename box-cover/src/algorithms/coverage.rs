//! How much of a graph a set of centers reaches.

use std::collections::VecDeque;

use crate::graph::{Graph, Node};

/// The fraction of nodes within `radius` hops of at least one of `centers`.
///
/// An empty graph counts as fully covered.
pub fn coverage(graph: &Graph, centers: &[Node], radius: u32) -> f64 {
    if graph.is_empty() {
        return 1.0;
    }
    let reached = nearest_centers(graph, centers, radius).iter().filter(|center| center.is_some()).count();
    reached as f64 / graph.nodes() as f64
}

/// Labels each node with a nearest center, if one lies within `radius` hops.
///
/// The search starts from all centers at once, so each node is visited a single time. Every
/// center labels itself; among equally near centers a node takes whichever search reached it
/// first.
pub fn nearest_centers(graph: &Graph, centers: &[Node], radius: u32) -> Vec<Option<Node>> {
    let mut nearest = vec![None; graph.nodes()];
    let mut queue = VecDeque::new();
    for &center in centers {
        if nearest[center].is_none() {
            nearest[center] = Some(center);
            queue.push_back((center, 0u32));
        }
    }

    while let Some((node, distance)) = queue.pop_front() {
        if distance == radius {
            continue;
        }
        let center = nearest[node];
        for &next in graph.neighbors(node) {
            if nearest[next].is_none() {
                nearest[next] = center;
                queue.push_back((next, distance + 1));
            }
        }
    }

    nearest
}
