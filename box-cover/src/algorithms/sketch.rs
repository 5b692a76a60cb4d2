//! Covering by greedy selection over bottom-k reachability sketches.
//!
//! A pass ranks the nodes by a random permutation and summarizes the ball around every node by the
//! `k` smallest ranks of still uncovered nodes inside it. From these sketches the size of a union
//! of balls can be estimated without touching the balls themselves, so centers are picked
//! greedily: the next center is the node whose sketch adds the most ranks below the `k`-th
//! smallest rank of the running union. The pass ends once the union holds the `k` smallest
//! uncovered ranks. Whatever the chosen centers reach is then covered, and the next pass redraws
//! the ranks and works on the rest.
//!
//! Passes cover at least `k` nodes each, or everything left. Nodes still uncovered when the passes
//! run out are burned one ball at a time, so the result always covers the whole graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::algorithms::bag::NodeBag;
use crate::algorithms::coverage::nearest_centers;
use crate::algorithms::{BoundedBfs, Chooser, TieBreak};
use crate::cover::BoxCover;
use crate::error::{Error, Result};
use crate::graph::{Graph, Node};

/// Ranks kept per sketch unless configured otherwise.
pub const DEFAULT_SKETCH_SIZE: usize = 128;
/// Passes allowed unless configured otherwise.
pub const DEFAULT_PASSES: usize = 1000;

/// Covers `graph` with boxes of radius `radius`, selecting centers from sketches of `k` ranks.
///
/// Rank permutations are drawn from `seed`; `tie_break` picks among the nodes burned after the
/// last pass. Every node joins the box of a nearest center. Fails if `k` is zero.
pub fn sketch_cover(graph: &Graph, radius: u32, k: usize, passes: usize, tie_break: TieBreak, seed: u64) -> Result<BoxCover> {
    if k == 0 {
        return Err(Error::InvalidArgument("sketches must hold at least one rank".to_owned()));
    }

    let nodes = graph.nodes();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<Node> = (0 .. nodes).collect();
    let mut rank = vec![0; nodes];
    let mut centers = Vec::new();
    let mut nearest = vec![None; nodes];
    let mut uncovered = nodes;

    for pass in 0 .. passes {
        if uncovered == 0 {
            break;
        }
        order.shuffle(&mut rng);
        for (position, &node) in order.iter().enumerate() {
            rank[node] = position;
        }

        let open: Vec<bool> = nearest.iter().map(Option::is_none).collect();
        let sketches = build_sketches(graph, radius, k, &rank, &order, &open);
        let goal: Vec<usize> = order.iter().filter(|&&node| open[node]).take(k).map(|&node| rank[node]).collect();
        let chosen = select_greedily(&sketches, k, &goal);

        centers.extend(chosen);
        nearest = nearest_centers(graph, &centers, radius);
        uncovered = nearest.iter().filter(|center| center.is_none()).count();
        debug!(pass, centers = centers.len(), uncovered, "sketch pass complete");
    }

    if uncovered > 0 {
        let mut chooser = Chooser::new(tie_break, seed);
        let mut bfs = BoundedBfs::new(nodes);
        let mut open = NodeBag::full(nodes);
        for (node, center) in nearest.iter().enumerate() {
            if center.is_some() {
                open.remove(node);
            }
        }
        debug!(uncovered, "burning nodes left after the last pass");
        while !open.is_empty() {
            let center = open.as_slice()[chooser.pick(open.as_slice())];
            for &(node, _) in bfs.ball(graph, center, radius) {
                open.remove(node);
            }
            centers.push(center);
        }
        nearest = nearest_centers(graph, &centers, radius);
    }

    let box_of = nearest
        .into_iter()
        .map(|center| center.expect("every node lies within the radius of some center"))
        .collect();
    Ok(BoxCover::new(centers, box_of))
}

/// Adds `rank` to a sorted sketch of at most `k` ranks, returning whether it was kept.
fn insert_rank(sketch: &mut Vec<usize>, rank: usize, k: usize) -> bool {
    match sketch.binary_search(&rank) {
        Ok(_) => false,
        Err(position) if sketch.len() < k => {
            sketch.insert(position, rank);
            true
        }
        Err(position) if position < k => {
            sketch.pop();
            sketch.insert(position, rank);
            true
        }
        Err(_) => false,
    }
}

/// For each node, the `k` smallest ranks of `open` nodes within `radius` hops of it.
///
/// All open nodes advance their searches one hop per round, in rank order. A search only continues
/// through nodes whose sketch kept its rank, so a full sketch may cut off ranks its far side would
/// have kept. Sketches never hold a rank from outside the ball, and a node's own rank survives
/// whenever it is among the `k` smallest open ranks.
fn build_sketches(graph: &Graph, radius: u32, k: usize, rank: &[usize], order: &[Node], open: &[bool]) -> Vec<Vec<usize>> {
    let nodes = graph.nodes();
    let mut sketches: Vec<Vec<usize>> = vec![Vec::new(); nodes];
    let mut frontier: Vec<Vec<Node>> = vec![Vec::new(); nodes];
    for &source in order.iter().filter(|&&node| open[node]) {
        sketches[source].push(rank[source]);
        frontier[source].push(source);
    }

    for _ in 0 .. radius {
        let mut advanced = false;
        for &source in order {
            if frontier[source].is_empty() {
                continue;
            }
            let mut next = Vec::new();
            for &node in frontier[source].iter() {
                for &neighbor in graph.neighbors(node) {
                    if insert_rank(&mut sketches[neighbor], rank[source], k) {
                        next.push(neighbor);
                    }
                }
            }
            advanced |= !next.is_empty();
            frontier[source] = next;
        }
        if !advanced {
            break;
        }
    }

    sketches
}

/// The `k` smallest ranks among the balls of the centers chosen so far.
struct Union {
    ranks: Vec<usize>,
    k: usize,
}

impl Union {
    /// Ranks of `sketch` that merging it would add below the current `k`-th smallest rank.
    ///
    /// Never increases as the union grows, so a stale gain bounds the fresh one from above.
    fn gain(&self, sketch: &[usize]) -> usize {
        let threshold = if self.ranks.len() < self.k { usize::MAX } else { self.ranks[self.k - 1] };
        sketch
            .iter()
            .take_while(|&&rank| rank < threshold)
            .filter(|&&rank| self.ranks.binary_search(&rank).is_err())
            .count()
    }

    fn merge(&mut self, sketch: &[usize]) {
        for &rank in sketch {
            insert_rank(&mut self.ranks, rank, self.k);
        }
    }
}

/// Picks centers until their union holds `goal`, the `k` smallest open ranks.
///
/// Gains are evaluated lazily: a node is re-examined only when its last known gain tops the queue.
/// Equal gains go to the lower node id.
fn select_greedily(sketches: &[Vec<usize>], k: usize, goal: &[usize]) -> Vec<Node> {
    let mut union = Union { ranks: Vec::new(), k };
    let mut queue: BinaryHeap<(usize, Reverse<Node>)> = sketches
        .iter()
        .enumerate()
        .filter(|(_, sketch)| !sketch.is_empty())
        .map(|(node, sketch)| (sketch.len(), Reverse(node)))
        .collect();

    let mut chosen = Vec::new();
    while union.ranks != goal {
        let Some((_, Reverse(node))) = queue.pop() else { break };
        let gain = union.gain(&sketches[node]);
        if gain == 0 {
            continue;
        }
        if queue.peek().is_some_and(|&(top, _)| top > gain) {
            queue.push((gain, Reverse(node)));
            continue;
        }
        union.merge(&sketches[node]);
        chosen.push(node);
    }
    chosen
}
