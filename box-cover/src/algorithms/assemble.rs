//! Assigns covered nodes to boxes, outward from the centers.

use crate::algorithms::distance::CentralDistances;
use crate::algorithms::Chooser;
use crate::cover::BoxCover;
use crate::graph::{Graph, Node};

/// Builds the box partition from the confirmed centers and finalized central distances.
///
/// Nodes are visited level by level in increasing central distance. A node at distance `d > 0`
/// joins the box of a neighbor at a strictly smaller distance, chosen by `chooser`; such a
/// neighbor was assigned at an earlier level. Panics if a node has no such neighbor, which means
/// the distances do not come from shortest paths to the centers.
pub fn assemble(graph: &Graph, centers: &[Node], distances: &CentralDistances, chooser: &mut Chooser) -> BoxCover {
    const UNASSIGNED: Node = Node::MAX;

    let mut box_of = vec![UNASSIGNED; graph.nodes()];
    for &center in centers {
        box_of[center] = center;
    }

    let levels = distances.levels();
    let mut closer = Vec::new();
    for (level, nodes) in levels.iter().enumerate().skip(1) {
        let level = level as u32;
        for &node in nodes {
            closer.clear();
            closer.extend(
                graph
                    .neighbors(node)
                    .iter()
                    .copied()
                    .filter(|&next| distances.get(next).map_or(false, |d| d < level)),
            );
            assert!(!closer.is_empty(), "node {} at central distance {} has no closer neighbor", node, level);
            let via = closer[chooser.pick(&closer)];
            debug_assert!(box_of[via] != UNASSIGNED);
            box_of[node] = box_of[via];
        }
    }

    if let Some(zero) = levels.first() {
        debug_assert!(zero.iter().all(|&node| box_of[node] == node), "a node at distance zero is not a center");
    }

    BoxCover::new(centers.to_vec(), box_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::TieBreak;
    use crate::generators;

    #[test]
    fn path_splits_at_midpoint() {
        // centers at both ends of a five-node path
        let graph = generators::path(5);
        let mut distances = CentralDistances::new(5);
        for (node, distance) in [(0, 0), (1, 1), (2, 2), (3, 1), (4, 0)] {
            distances.observe(node, distance);
        }
        let mut chooser = Chooser::new(TieBreak::LowestId, 0);
        let cover = assemble(&graph, &[0, 4], &distances, &mut chooser);
        assert_eq!(cover.assignment(), &[0, 0, 0, 4, 4]);
    }

    #[test]
    #[should_panic]
    fn missing_closer_neighbor() {
        let graph = Graph::new(2, &[]).unwrap();
        let mut distances = CentralDistances::new(2);
        distances.observe(0, 0);
        distances.observe(1, 1);
        let mut chooser = Chooser::new(TieBreak::LowestId, 0);
        assemble(&graph, &[0], &distances, &mut chooser);
    }
}
