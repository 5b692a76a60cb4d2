//! Random box burning.

use crate::algorithms::bag::NodeBag;
use crate::algorithms::{BoundedBfs, Chooser, TieBreak};
use crate::cover::BoxCover;
use crate::graph::{Graph, Node};

/// Covers `graph` by repeatedly burning the ball around an uncovered node.
///
/// Each box is the set of nodes within `radius` hops of its center in the subgraph induced by the
/// nodes still uncovered when the box is formed, so later boxes may be fragmented by earlier ones.
pub fn random_burning(graph: &Graph, radius: u32, tie_break: TieBreak, seed: u64) -> BoxCover {
    let nodes = graph.nodes();
    let mut chooser = Chooser::new(tie_break, seed);
    let mut bfs = BoundedBfs::new(nodes);
    let mut unburned = NodeBag::full(nodes);
    let mut box_of: Vec<Node> = vec![0; nodes];
    let mut centers = Vec::new();

    while !unburned.is_empty() {
        let center = unburned.as_slice()[chooser.pick(unburned.as_slice())];
        let ball = bfs.ball_within(graph, center, radius, |node| unburned.contains(node));
        for &(node, _) in ball {
            box_of[node] = center;
            unburned.remove(node);
        }
        centers.push(center);
    }

    BoxCover::new(centers, box_of)
}
