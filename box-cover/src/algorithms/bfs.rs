//! Breadth-first distance labeling, cut off at a radius.
//!
//! `BoundedBfs` keeps one distance label per node of the graph, but resets only the labels it set
//! during the previous search. A search from `source` therefore costs time proportional to the
//! nodes it reaches and the edges leaving them, however large the graph is.

use crate::graph::{Graph, Node};

const UNSEEN: u32 = u32::MAX;

/// Reusable state for radius-bounded breadth-first searches over one graph.
#[derive(Debug, Clone)]
pub struct BoundedBfs {
    distance: Vec<u32>,
    /// Nodes reached by the last search with their distances, in order of discovery.
    reached: Vec<(Node, u32)>,
}

impl BoundedBfs {
    /// Allocates search state for graphs with `nodes` nodes.
    pub fn new(nodes: usize) -> Self {
        BoundedBfs { distance: vec![UNSEEN; nodes], reached: Vec::new() }
    }

    /// Labels every node within `radius` hops of `source` with its hop distance.
    ///
    /// Returns the reached nodes in order of non-decreasing distance, `source` first at distance 0.
    /// Nodes in other components, or farther than `radius`, are absent.
    pub fn ball(&mut self, graph: &Graph, source: Node, radius: u32) -> &[(Node, u32)] {
        self.ball_within(graph, source, radius, |_| true)
    }

    /// As `ball`, but only expands through nodes for which `admit` holds.
    ///
    /// The source is always included. Nodes refused by `admit` are neither reported nor expanded,
    /// so distances are those of the subgraph induced by admitted nodes.
    pub fn ball_within<F>(&mut self, graph: &Graph, source: Node, radius: u32, mut admit: F) -> &[(Node, u32)]
    where
        F: FnMut(Node) -> bool,
    {
        self.clear();
        self.distance[source] = 0;
        self.reached.push((source, 0));

        // `reached` doubles as the queue; `head` marks the next node to expand.
        let mut head = 0;
        while head < self.reached.len() {
            let (node, dist) = self.reached[head];
            head += 1;
            if dist >= radius {
                continue;
            }
            for &next in graph.neighbors(node) {
                if self.distance[next] == UNSEEN && admit(next) {
                    self.distance[next] = dist + 1;
                    self.reached.push((next, dist + 1));
                }
            }
        }

        &self.reached
    }

    /// Nodes reached by the most recent search, with distances.
    pub fn reached(&self) -> &[(Node, u32)] {
        &self.reached
    }

    /// Distance of `node` in the most recent search, if it was reached.
    #[inline]
    pub fn distance(&self, node: Node) -> Option<u32> {
        match self.distance[node] {
            UNSEEN => None,
            dist => Some(dist),
        }
    }

    /// Largest distance from `source` to any node of its component.
    pub fn eccentricity(&mut self, graph: &Graph, source: Node) -> u32 {
        self.ball(graph, source, UNSEEN - 1);
        self.reached.last().map(|&(_, dist)| dist).unwrap_or(0)
    }

    fn clear(&mut self) {
        for &(node, _) in self.reached.iter() {
            self.distance[node] = UNSEEN;
        }
        self.reached.clear();
    }
}

/// One-shot bounded search: the nodes within `radius` hops of `source`, with distances.
pub fn bounded_bfs(graph: &Graph, source: Node, radius: u32) -> Vec<(Node, u32)> {
    let mut bfs = BoundedBfs::new(graph.nodes());
    bfs.ball(graph, source, radius).to_vec()
}

/// The largest eccentricity among one representative per connected component.
///
/// Every component has a node whose ball of this radius covers it, namely its representative.
/// Other nodes may need up to twice the radius.
pub fn component_bound(graph: &Graph) -> u32 {
    let mut bfs = BoundedBfs::new(graph.nodes());
    let mut seen = vec![false; graph.nodes()];
    let mut bound = 0;
    for node in 0 .. graph.nodes() {
        if !seen[node] {
            bound = bound.max(bfs.eccentricity(graph, node));
            for &(member, _) in bfs.reached() {
                seen[member] = true;
            }
        }
    }
    bound
}
