//! The result of one covering run: a partition of the nodes into boxes.

use std::collections::BTreeMap;

use differential_dataflow::consolidation::consolidate;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Node};

/// Boxes identified by their center node, and the box of every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCover {
    centers: Vec<Node>,
    box_of: Vec<Node>,
}

impl BoxCover {
    /// Assembles a cover from centers in order of confirmation and the center of each node's box.
    pub fn new(centers: Vec<Node>, box_of: Vec<Node>) -> Self {
        BoxCover { centers, box_of }
    }

    /// Number of boxes.
    #[inline]
    pub fn size(&self) -> usize {
        self.centers.len()
    }

    /// Box centers, in the order they were chosen.
    pub fn centers(&self) -> &[Node] {
        &self.centers
    }

    /// The center of the box holding `node`.
    #[inline]
    pub fn box_of(&self, node: Node) -> Node {
        self.box_of[node]
    }

    /// The center of each node's box, indexed by node.
    pub fn assignment(&self) -> &[Node] {
        &self.box_of
    }

    /// Members of each box, keyed by center. Members are listed in increasing order.
    pub fn boxes(&self) -> BTreeMap<Node, Vec<Node>> {
        let mut boxes: BTreeMap<Node, Vec<Node>> = self.centers.iter().map(|&center| (center, Vec::new())).collect();
        for (node, &center) in self.box_of.iter().enumerate() {
            boxes.entry(center).or_default().push(node);
        }
        boxes
    }

    /// Checks that this cover partitions the nodes of `graph` into boxes around distinct centers.
    pub fn is_partition_of(&self, graph: &Graph) -> bool {
        if self.box_of.len() != graph.nodes() {
            return false;
        }
        let mut is_center = vec![false; graph.nodes()];
        for &center in self.centers.iter() {
            if center >= graph.nodes() || is_center[center] || self.box_of[center] != center {
                return false;
            }
            is_center[center] = true;
        }
        self.box_of.iter().all(|&center| center < graph.nodes() && is_center[center])
    }

    /// Number of members of each box, in order of center.
    pub fn box_sizes(&self) -> Vec<(Node, usize)> {
        let mut counts: Vec<(Node, isize)> = self.box_of.iter().map(|&center| (center, 1)).collect();
        consolidate(&mut counts);
        counts.into_iter().map(|(center, count)| (center, count as usize)).collect()
    }

    /// Number of boxes of each size, in order of size.
    pub fn size_distribution(&self) -> Vec<(usize, usize)> {
        let mut histogram: Vec<(usize, isize)> = self.box_sizes().into_iter().map(|(_, size)| (size, 1)).collect();
        consolidate(&mut histogram);
        histogram.into_iter().map(|(size, boxes)| (size, boxes as usize)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoxCover {
        // boxes {0, 1, 2}, {3}, {4, 5}
        BoxCover::new(vec![1, 3, 5], vec![1, 1, 1, 3, 5, 5])
    }

    #[test]
    fn boxes_and_sizes() {
        let cover = sample();
        assert_eq!(cover.size(), 3);
        assert_eq!(cover.box_of(4), 5);

        let boxes = cover.boxes();
        assert_eq!(boxes[&1], vec![0, 1, 2]);
        assert_eq!(boxes[&3], vec![3]);
        assert_eq!(boxes[&5], vec![4, 5]);

        assert_eq!(cover.box_sizes(), vec![(1, 3), (3, 1), (5, 2)]);
        assert_eq!(cover.size_distribution(), vec![(1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn partition_checks() {
        let graph = Graph::empty(6);
        assert!(sample().is_partition_of(&graph));
        assert!(!sample().is_partition_of(&Graph::empty(7)));
        // node 3 claims a box whose center is not listed
        assert!(!BoxCover::new(vec![1, 5], vec![1, 1, 1, 3, 5, 5]).is_partition_of(&graph));
        // center 1 is assigned elsewhere
        assert!(!BoxCover::new(vec![1, 3, 5], vec![1, 3, 1, 3, 5, 5]).is_partition_of(&graph));
    }

    #[test]
    fn empty_cover() {
        let cover = BoxCover::new(Vec::new(), Vec::new());
        assert_eq!(cover.size(), 0);
        assert!(cover.is_partition_of(&Graph::empty(0)));
        assert!(cover.size_distribution().is_empty());
    }
}
