//! Synthetic graphs, for tests, benchmarks and sanity checks of the covering methods.
//!
//! Random generators take an explicit seed and draw from `ChaCha8Rng`, so a given seed produces
//! the same graph on every platform.

use fnv::FnvHashSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::graph::{Graph, Node};

/// The path `0 - 1 - ... - (nodes - 1)`.
pub fn path(nodes: usize) -> Graph {
    let edges: Vec<_> = (1 .. nodes).map(|node| (node - 1, node)).collect();
    Graph::build_sized(nodes, &edges)
}

/// The cycle on `nodes` nodes. Fewer than three nodes give a path.
pub fn cycle(nodes: usize) -> Graph {
    let mut edges: Vec<_> = (1 .. nodes).map(|node| (node - 1, node)).collect();
    if nodes > 2 {
        edges.push((nodes - 1, 0));
    }
    Graph::build_sized(nodes, &edges)
}

/// A star on `nodes` nodes: node 0 joined to each of the others.
pub fn star(nodes: usize) -> Graph {
    let edges: Vec<_> = (1 .. nodes).map(|leaf| (0, leaf)).collect();
    Graph::build_sized(nodes, &edges)
}

/// A `rows` by `cols` lattice; node `(i, j)` is `i * cols + j`.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 0 .. rows {
        for j in 0 .. cols {
            let node = i * cols + j;
            if j + 1 < cols {
                edges.push((node, node + 1));
            }
            if i + 1 < rows {
                edges.push((node, node + cols));
            }
        }
    }
    Graph::build_sized(rows * cols, &edges)
}

/// The complete graph on `nodes` nodes.
pub fn complete(nodes: usize) -> Graph {
    Graph::build_sized(nodes, &clique(0, nodes))
}

/// Two cliques of `clique_size` nodes, with node 0 of the first joined to node 0 of the second.
pub fn barbell(clique_size: usize) -> Graph {
    let mut edges = clique(0, clique_size);
    edges.extend(clique(clique_size, clique_size));
    if clique_size > 0 {
        edges.push((0, clique_size));
    }
    Graph::build_sized(2 * clique_size, &edges)
}

fn clique(first: Node, size: usize) -> Vec<(Node, Node)> {
    let mut edges = Vec::with_capacity(size * size.saturating_sub(1) / 2);
    for v in 0 .. size {
        for u in 0 .. v {
            edges.push((first + u, first + v));
        }
    }
    edges
}

/// A uniformly random graph with `nodes` nodes and `edges` distinct edges, without self-loops.
///
/// Asking for more edges than the complete graph has yields the complete graph.
pub fn erdos_renyi(nodes: usize, edges: usize, seed: u64) -> Graph {
    let possible = nodes * nodes.saturating_sub(1) / 2;
    let target = edges.min(possible);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut chosen = FnvHashSet::default();
    let mut list = Vec::with_capacity(target);
    while list.len() < target {
        let u = rng.gen_range(0 .. nodes);
        let v = rng.gen_range(0 .. nodes);
        if u != v && chosen.insert((u.min(v), u.max(v))) {
            list.push((u.min(v), u.max(v)));
        }
    }
    Graph::build_sized(nodes, &list)
}

/// Preferential attachment: each new node links to `links` distinct earlier nodes, chosen with
/// probability proportional to their degree.
///
/// Growth starts from a clique on `links + 1` nodes; with `nodes <= links + 1` the result is that
/// clique, truncated to `nodes` nodes.
pub fn barabasi_albert(nodes: usize, links: usize, seed: u64) -> Graph {
    let initial = nodes.min(links + 1);
    let mut edges = clique(0, initial);

    // every edge endpoint, so that a uniform draw is degree-proportional
    let mut endpoints: Vec<Node> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut targets = Vec::with_capacity(links);
    for node in initial .. nodes {
        targets.clear();
        while targets.len() < links {
            let target = endpoints[rng.gen_range(0 .. endpoints.len())];
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
        for &target in targets.iter() {
            edges.push((target, node));
            endpoints.push(target);
            endpoints.push(node);
        }
    }
    Graph::build_sized(nodes, &edges)
}
