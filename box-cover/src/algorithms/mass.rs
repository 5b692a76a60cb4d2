//! Candidate centers bucketed by an upper bound on their excluded mass.
//!
//! Keys are small integers (a mass never exceeds the number of nodes), so the index is a vector of
//! buckets addressed by key, plus a cursor at the largest key that may be occupied. Each node
//! remembers its key and its position inside its bucket, which makes removal and re-keying
//! constant time. Finding the maximum key walks the cursor downward past empty buckets; keys only
//! ever decrease during a covering run, so that walk is amortized across the run.

use crate::algorithms::Chooser;
use crate::graph::Node;

const ABSENT: usize = usize::MAX;

/// Buckets of candidate nodes keyed by claimed excluded mass.
#[derive(Debug, Clone)]
pub struct ExcludedMassIndex {
    buckets: Vec<Vec<Node>>,
    /// Key of each node, or `ABSENT`.
    key: Vec<usize>,
    /// Position of each node within `buckets[key]`.
    slot: Vec<usize>,
    /// No bucket above `top` is occupied.
    top: usize,
    len: usize,
}

impl ExcludedMassIndex {
    /// An empty index for nodes `0 .. nodes`, accepting keys up to `nodes`.
    pub fn new(nodes: usize) -> Self {
        ExcludedMassIndex {
            buckets: vec![Vec::new(); nodes + 1],
            key: vec![ABSENT; nodes],
            slot: vec![ABSENT; nodes],
            top: 0,
            len: 0,
        }
    }

    /// Places `node` in the bucket for `mass`, moving it if it is already indexed.
    pub fn insert(&mut self, node: Node, mass: usize) {
        self.remove(node);
        if mass >= self.buckets.len() {
            self.buckets.resize(mass + 1, Vec::new());
        }
        self.key[node] = mass;
        self.slot[node] = self.buckets[mass].len();
        self.buckets[mass].push(node);
        self.top = self.top.max(mass);
        self.len += 1;
    }

    /// Moves `node` to the bucket for `mass`.
    pub fn reinsert(&mut self, node: Node, mass: usize) {
        self.insert(node, mass);
    }

    /// Takes `node` out of the index, returning its key if it was present.
    pub fn remove(&mut self, node: Node) -> Option<usize> {
        let key = self.key[node];
        if key == ABSENT {
            return None;
        }
        let slot = self.slot[node];
        let bucket = &mut self.buckets[key];
        bucket.swap_remove(slot);
        if let Some(&moved) = bucket.get(slot) {
            self.slot[moved] = slot;
        }
        self.key[node] = ABSENT;
        self.slot[node] = ABSENT;
        self.len -= 1;
        Some(key)
    }

    /// The largest key with at least one node, or `None` if the index is empty.
    pub fn max_key(&mut self) -> Option<usize> {
        while self.top > 0 && self.buckets[self.top].is_empty() {
            self.top -= 1;
        }
        if self.buckets.get(self.top).map_or(true, |bucket| bucket.is_empty()) {
            None
        } else {
            Some(self.top)
        }
    }

    /// Removes and returns one node of the bucket for `key`, as chosen by `chooser`.
    pub fn pop_one(&mut self, key: usize, chooser: &mut Chooser) -> Option<Node> {
        let bucket = self.buckets.get(key)?;
        if bucket.is_empty() {
            return None;
        }
        let node = bucket[chooser.pick(bucket)];
        self.remove(node);
        Some(node)
    }

    #[cfg(test)]
    fn key_of(&self, node: Node) -> Option<usize> {
        match self.key[node] {
            ABSENT => None,
            key => Some(key),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
