//! Undirected, unweighted graphs in compressed adjacency form.
//!
//! Nodes are dense integers `0 .. nodes()`. Each node's neighbors occupy a contiguous, sorted range
//! of `targets`, located through `offsets`, so neighbor iteration is a slice walk. Adjacency is
//! always symmetric: an edge `(u, v)` given to a constructor is stored in both directions, and
//! duplicate edges collapse to one. Self-loops are kept but play no role in any covering.

use crate::error::{Error, Result};

/// Node identifier.
pub type Node = usize;

/// An undirected graph with read-only adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    offsets: Vec<usize>,
    targets: Vec<Node>,
    edges: usize,
}

impl Graph {
    /// Builds a graph on `nodes` nodes, rejecting edges that name nodes outside `0 .. nodes`.
    pub fn new(nodes: usize, edges: &[(Node, Node)]) -> Result<Self> {
        for &(source, target) in edges {
            let node = source.max(target);
            if node >= nodes {
                return Err(Error::NodeOutOfRange { node, nodes });
            }
        }
        Ok(Self::build_sized(nodes, edges))
    }

    /// Builds a graph sized to the largest node mentioned by `edges`.
    pub fn from_edges(edges: &[(Node, Node)]) -> Self {
        let nodes = edges.iter().map(|&(s, t)| s.max(t) + 1).max().unwrap_or(0);
        Self::build_sized(nodes, edges)
    }

    /// A graph with `nodes` nodes and no edges.
    pub fn empty(nodes: usize) -> Self {
        Self::build_sized(nodes, &[])
    }

    /// Builds without checking ids; callers guarantee every endpoint is below `nodes`.
    pub(crate) fn build_sized(nodes: usize, edges: &[(Node, Node)]) -> Self {

        // orient every edge both ways, then sort and de-duplicate.
        let mut directed = Vec::with_capacity(2 * edges.len());
        for &(source, target) in edges {
            directed.push((source, target));
            if source != target {
                directed.push((target, source));
            }
        }
        directed.sort_unstable();
        directed.dedup();

        let mut offsets = vec![0; nodes + 1];
        for &(source, _) in directed.iter() {
            offsets[source + 1] += 1;
        }
        for index in 1 .. offsets.len() {
            offsets[index] += offsets[index - 1];
        }

        let edges = directed.iter().filter(|&&(s, t)| s <= t).count();
        let targets = directed.into_iter().map(|(_, t)| t).collect();

        Graph { offsets, targets, edges }
    }

    /// Number of nodes.
    #[inline]
    pub fn nodes(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of undirected edges, counting each self-loop once.
    #[inline]
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// True when the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes() == 0
    }

    /// Neighbors of `node`, in increasing order.
    #[inline]
    pub fn neighbors(&self, node: Node) -> &[Node] {
        &self.targets[self.offsets[node] .. self.offsets[node + 1]]
    }

    /// Number of neighbors of `node`.
    #[inline]
    pub fn degree(&self, node: Node) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    /// Each undirected edge once, as `(u, v)` with `u <= v`.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        (0 .. self.nodes()).flat_map(move |source| {
            self.neighbors(source)
                .iter()
                .filter(move |&&target| source <= target)
                .map(move |&target| (source, target))
        })
    }
}
