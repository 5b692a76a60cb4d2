//! Compact box burning.
//!
//! CBB covers with boxes of bounded diameter rather than bounded radius: every pair of nodes in a
//! box is fewer than `diameter` hops apart in the full graph. A box starts as the uncovered part of
//! a random center's ball of radius `diameter - 1`, and is whittled down by intersecting it with
//! the same ball around each remaining candidate in turn.

use crate::algorithms::bag::NodeBag;
use crate::algorithms::{BoundedBfs, Chooser, TieBreak};
use crate::cover::BoxCover;
use crate::error::{Error, Result};
use crate::graph::{Graph, Node};

/// Covers `graph` with boxes whose members are pairwise less than `diameter` hops apart.
///
/// Fails with `InvalidArgument` when `diameter` is zero, as no box could hold even one node.
pub fn compact_box_burning(graph: &Graph, diameter: u32, tie_break: TieBreak, seed: u64) -> Result<BoxCover> {
    if diameter == 0 {
        return Err(Error::InvalidArgument("box diameter must be at least 1".to_owned()));
    }
    let reach = diameter - 1;

    let nodes = graph.nodes();
    let mut chooser = Chooser::new(tie_break, seed);
    let mut bfs = BoundedBfs::new(nodes);
    let mut uncovered = NodeBag::full(nodes);
    let mut box_of: Vec<Node> = vec![0; nodes];
    let mut centers = Vec::new();

    let mut members = Vec::new();
    let mut unchecked = Vec::new();
    while !uncovered.is_empty() {
        let center = uncovered.as_slice()[chooser.pick(uncovered.as_slice())];

        members.clear();
        members.extend(
            bfs.ball(graph, center, reach)
                .iter()
                .map(|&(node, _)| node)
                .filter(|&node| uncovered.contains(node)),
        );
        unchecked.clear();
        unchecked.extend(members.iter().copied().filter(|&node| node != center));

        while !unchecked.is_empty() {
            let candidate = unchecked.swap_remove(chooser.pick(&unchecked));
            bfs.ball(graph, candidate, reach);
            members.retain(|&node| bfs.distance(node).is_some());
            unchecked.retain(|&node| bfs.distance(node).is_some());
        }

        for &node in members.iter() {
            box_of[node] = center;
            uncovered.remove(node);
        }
        centers.push(center);
    }

    Ok(BoxCover::new(centers, box_of))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::bounded_bfs;
    use crate::generators;

    #[test]
    fn zero_diameter_is_rejected() {
        let graph = generators::path(3);
        assert!(matches!(
            compact_box_burning(&graph, 0, TieBreak::Random, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn diameter_one_is_singletons() {
        let graph = generators::complete(4);
        let cover = compact_box_burning(&graph, 1, TieBreak::Random, 0).unwrap();
        assert_eq!(cover.size(), 4);
    }

    #[test]
    fn boxes_are_compact() {
        let graph = generators::grid(5, 4);
        for seed in 0 .. 4 {
            let cover = compact_box_burning(&graph, 3, TieBreak::Random, seed).unwrap();
            assert!(cover.is_partition_of(&graph));
            for members in cover.boxes().values() {
                for &a in members {
                    let near = bounded_bfs(&graph, a, 2);
                    for &b in members {
                        assert!(near.iter().any(|&(node, _)| node == b), "{} and {} too far apart", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn clique_is_one_box() {
        let graph = generators::complete(6);
        let cover = compact_box_burning(&graph, 2, TieBreak::LowestId, 0).unwrap();
        assert_eq!(cover.size(), 1);
        assert_eq!(cover.centers(), &[0]);
    }
}
