//! Maximum excluded mass burning.
//!
//! The excluded mass of a node is the number of uncovered nodes within `radius` hops of it. MEMB
//! repeatedly confirms as a center the node of largest excluded mass and covers its ball, until
//! every node is covered. Masses only shrink as coverage grows, so the index holds upper bounds
//! and only the current best candidate is re-measured: if its true mass still matches its key it
//! is confirmed, otherwise it is filed again under the corrected mass.
//!
//! A run is exposed as a state machine, `Memb::step`, so that callers and tests can observe each
//! confirmation and requeue; `memb` drives it to completion.

use tracing::{debug, trace};

use crate::algorithms::assemble::assemble;
use crate::algorithms::distance::CentralDistances;
use crate::algorithms::{BoundedBfs, Chooser, ExcludedMassIndex, TieBreak};
use crate::cover::BoxCover;
use crate::graph::{Graph, Node};

/// The outcome of one call to `Memb::step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `center` became a box center, newly covering `mass` nodes.
    Confirmed { center: Node, mass: usize },
    /// `node` was filed under `claimed` but its true mass is the smaller `mass`.
    Requeued { node: Node, claimed: usize, mass: usize },
    /// A candidate that is already a center was discarded.
    Skipped { node: Node },
    /// Every node is covered.
    Done,
}

/// Counts of the work performed by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MembStats {
    pub confirmations: usize,
    pub requeues: usize,
}

/// The state of one MEMB covering run at a fixed radius.
pub struct Memb<'a> {
    graph: &'a Graph,
    radius: u32,
    bfs: BoundedBfs,
    index: ExcludedMassIndex,
    covered: Vec<bool>,
    uncovered: usize,
    is_center: Vec<bool>,
    centers: Vec<Node>,
    distances: CentralDistances,
    chooser: Chooser,
    stats: MembStats,
}

impl<'a> Memb<'a> {
    /// Prepares a run, indexing every node under the size of its radius-`radius` ball.
    pub fn new(graph: &'a Graph, radius: u32, tie_break: TieBreak, seed: u64) -> Self {
        let nodes = graph.nodes();
        let mut bfs = BoundedBfs::new(nodes);
        let mut index = ExcludedMassIndex::new(nodes);
        for node in 0 .. nodes {
            let mass = bfs.ball(graph, node, radius).len();
            index.insert(node, mass);
        }

        Memb {
            graph,
            radius,
            bfs,
            index,
            covered: vec![false; nodes],
            uncovered: nodes,
            is_center: vec![false; nodes],
            centers: Vec::new(),
            distances: CentralDistances::new(nodes),
            chooser: Chooser::new(tie_break, seed),
            stats: MembStats::default(),
        }
    }

    /// Takes one candidate of maximum claimed mass and either confirms or requeues it.
    ///
    /// Panics if the index runs dry while nodes remain uncovered, or if a candidate's true mass
    /// exceeds its key; either means the index no longer bounds the excluded masses.
    pub fn step(&mut self) -> Step {
        if self.uncovered == 0 {
            return Step::Done;
        }

        let claimed = self.index.max_key().unwrap_or_else(|| {
            panic!("excluded-mass index is empty with {} nodes uncovered", self.uncovered)
        });
        let node = self
            .index
            .pop_one(claimed, &mut self.chooser)
            .expect("maximum key names an empty bucket");

        if self.is_center[node] {
            return Step::Skipped { node };
        }

        let covered = &self.covered;
        let ball = self.bfs.ball(self.graph, node, self.radius);
        let mass = ball.iter().filter(|&&(member, _)| !covered[member]).count();
        assert!(
            mass <= claimed,
            "node {} has excluded mass {} above its key {}",
            node,
            mass,
            claimed
        );

        if mass < claimed {
            self.index.reinsert(node, mass);
            self.stats.requeues += 1;
            trace!(node, claimed, mass, "requeued candidate");
            return Step::Requeued { node, claimed, mass };
        }

        self.is_center[node] = true;
        self.centers.push(node);
        for &(member, distance) in ball {
            if !self.covered[member] {
                self.covered[member] = true;
                self.uncovered -= 1;
            }
            self.distances.observe(member, distance);
        }
        self.stats.confirmations += 1;
        debug!(center = node, mass, uncovered = self.uncovered, "confirmed center");
        Step::Confirmed { center: node, mass }
    }

    /// Runs to completion and assigns every node to a box.
    pub fn finish(mut self) -> BoxCover {
        while self.step() != Step::Done { }
        assemble(self.graph, &self.centers, &self.distances, &mut self.chooser)
    }

    /// Centers confirmed so far, in order.
    pub fn centers(&self) -> &[Node] {
        &self.centers
    }

    /// Number of nodes not yet covered.
    pub fn uncovered(&self) -> usize {
        self.uncovered
    }

    pub fn stats(&self) -> MembStats {
        self.stats
    }
}

/// Covers `graph` with boxes of radius `radius` by maximum excluded mass burning.
///
/// Ties among candidates of equal mass, and among neighbors during box assembly, are broken by
/// `tie_break`; with `TieBreak::Random` the result is a function of `seed`.
pub fn memb(graph: &Graph, radius: u32, tie_break: TieBreak, seed: u64) -> BoxCover {
    Memb::new(graph, radius, tie_break, seed).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;

    #[test]
    fn star_collapses_to_hub() {
        let graph = generators::star(6);
        let mut run = Memb::new(&graph, 1, TieBreak::Random, 3);
        assert_eq!(run.step(), Step::Confirmed { center: 0, mass: 6 });
        assert_eq!(run.step(), Step::Done);
        let cover = run.finish();
        assert_eq!(cover.centers(), &[0]);
        assert!(cover.assignment().iter().all(|&center| center == 0));
    }

    #[test]
    fn stale_keys_are_requeued() {
        // path 0-1-2-3-4-5-6: confirming 1 (lowest of the mass-3 nodes) leaves 2 claiming 3 but
        // holding 2 (node 3 alone is uncovered among its ball {1, 2, 3}).
        let graph = generators::path(7);
        let mut run = Memb::new(&graph, 1, TieBreak::LowestId, 0);
        assert_eq!(run.step(), Step::Confirmed { center: 1, mass: 3 });
        assert_eq!(run.step(), Step::Requeued { node: 2, claimed: 3, mass: 1 });
        assert_eq!(run.step(), Step::Requeued { node: 3, claimed: 3, mass: 2 });
        assert_eq!(run.step(), Step::Confirmed { center: 4, mass: 3 });
        let stats = run.stats();
        assert_eq!(stats.confirmations, 2);
        assert_eq!(stats.requeues, 2);
        assert_eq!(run.uncovered(), 1);

        let cover = run.finish();
        assert_eq!(cover.size(), 3);
        assert_eq!(cover.centers()[.. 2], [1, 4]);
    }

    #[test]
    fn radius_zero_is_identity() {
        let graph = generators::cycle(5);
        let cover = memb(&graph, 0, TieBreak::Random, 11);
        assert_eq!(cover.size(), 5);
        assert_eq!(cover.assignment(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::empty(0);
        let mut run = Memb::new(&graph, 2, TieBreak::Random, 0);
        assert_eq!(run.step(), Step::Done);
        assert_eq!(run.finish().size(), 0);
    }
}
