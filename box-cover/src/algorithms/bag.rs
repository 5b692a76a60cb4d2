//! A set of nodes with constant-time removal and uniform sampling.

use crate::graph::Node;

const ABSENT: usize = usize::MAX;

/// A subset of `0 .. nodes`, stored densely so that members can be sampled by position.
///
/// Removal swaps the last member into the vacated position, so the order of `as_slice` changes as
/// members leave; it is nevertheless a deterministic function of the sequence of operations.
#[derive(Debug, Clone)]
pub struct NodeBag {
    members: Vec<Node>,
    position: Vec<usize>,
}

impl NodeBag {
    /// A bag holding every node of `0 .. nodes`.
    pub fn full(nodes: usize) -> Self {
        NodeBag { members: (0 .. nodes).collect(), position: (0 .. nodes).collect() }
    }

    /// Removes `node`, returning false if it was absent.
    pub fn remove(&mut self, node: Node) -> bool {
        let position = self.position[node];
        if position == ABSENT {
            return false;
        }
        self.members.swap_remove(position);
        if let Some(&moved) = self.members.get(position) {
            self.position[moved] = position;
        }
        self.position[node] = ABSENT;
        true
    }

    #[inline]
    pub fn contains(&self, node: Node) -> bool {
        self.position[node] != ABSENT
    }

    #[inline]
    pub fn as_slice(&self) -> &[Node] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_twice() {
        let mut bag = NodeBag::full(6);
        for node in [0, 2, 3] {
            assert!(bag.remove(node));
        }
        assert!(bag.remove(4));
        assert!(!bag.remove(4));
        assert!(!bag.contains(4));
        assert!(bag.contains(5));
        assert_eq!(bag.len(), 2);

        let mut rest = bag.as_slice().to_vec();
        rest.sort();
        assert_eq!(rest, vec![1, 5]);
    }

    #[test]
    fn drain_full_bag() {
        let mut bag = NodeBag::full(5);
        for node in [3, 0, 4, 1, 2] {
            assert!(bag.remove(node));
            assert!(bag.as_slice().iter().all(|&member| bag.contains(member)));
        }
        assert!(bag.is_empty());
    }
}
