//! Distances from each node to its nearest confirmed center.

use crate::graph::Node;

const UNSET: u32 = u32::MAX;

/// Per-node minimum hop distance to any confirmed center, lowered as centers are confirmed.
#[derive(Debug, Clone)]
pub struct CentralDistances {
    distance: Vec<u32>,
}

impl CentralDistances {
    pub fn new(nodes: usize) -> Self {
        CentralDistances { distance: vec![UNSET; nodes] }
    }

    /// Records that `node` lies `distance` hops from some center.
    ///
    /// Returns true if this lowered the node's central distance.
    pub fn observe(&mut self, node: Node, distance: u32) -> bool {
        if distance < self.distance[node] {
            self.distance[node] = distance;
            true
        } else {
            false
        }
    }

    /// The central distance of `node`, if any center reaches it.
    #[inline]
    pub fn get(&self, node: Node) -> Option<u32> {
        match self.distance[node] {
            UNSET => None,
            distance => Some(distance),
        }
    }

    /// Nodes grouped by central distance: `levels()[d]` lists the nodes at distance `d`, in
    /// increasing order.
    ///
    /// Panics if some node has no central distance.
    pub fn levels(&self) -> Vec<Vec<Node>> {
        let mut levels: Vec<Vec<Node>> = Vec::new();
        for (node, &distance) in self.distance.iter().enumerate() {
            assert!(distance != UNSET, "node {} has no central distance", node);
            let distance = distance as usize;
            if levels.len() <= distance {
                levels.resize(distance + 1, Vec::new());
            }
            levels[distance].push(node);
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_lowers() {
        let mut distances = CentralDistances::new(3);
        assert!(distances.observe(0, 2));
        assert!(!distances.observe(0, 3));
        assert!(distances.observe(0, 1));
        assert_eq!(distances.get(0), Some(1));
        assert_eq!(distances.get(1), None);
    }

    #[test]
    fn grouped_by_level() {
        let mut distances = CentralDistances::new(4);
        distances.observe(0, 0);
        distances.observe(1, 2);
        distances.observe(2, 1);
        distances.observe(3, 2);
        assert_eq!(distances.levels(), vec![vec![0], vec![2], vec![1, 3]]);
    }

    #[test]
    #[should_panic]
    fn unreached_node_panics() {
        let mut distances = CentralDistances::new(2);
        distances.observe(0, 0);
        distances.levels();
    }
}
