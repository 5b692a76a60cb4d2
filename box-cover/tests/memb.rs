use itertools::Itertools;

use box_cover::algorithms::bfs::bounded_bfs;
use box_cover::algorithms::{coverage, memb, Memb, Step};
use box_cover::{generators, Graph, TieBreak};

fn regular_graphs() -> Vec<(&'static str, Graph)> {
    vec![
        ("path", generators::path(23)),
        ("cycle", generators::cycle(18)),
        ("star", generators::star(12)),
        ("grid", generators::grid(7, 6)),
        ("barbell", generators::barbell(6)),
        ("disconnected", Graph::new(9, &[(0, 1), (1, 2), (2, 3), (5, 6), (6, 7)]).unwrap()),
    ]
}

fn sample_graphs() -> Vec<(&'static str, Graph)> {
    let mut graphs = regular_graphs();
    graphs.push(("erdos-renyi", generators::erdos_renyi(80, 120, 4)));
    graphs.push(("barabasi-albert", generators::barabasi_albert(120, 2, 8)));
    graphs
}

#[test]
fn boxes_partition_the_nodes() {
    for (name, graph) in sample_graphs() {
        for radius in 0 .. 5 {
            for tie_break in [TieBreak::Random, TieBreak::LowestId] {
                let cover = memb(&graph, radius, tie_break, 42);
                assert!(cover.is_partition_of(&graph), "{} at radius {}", name, radius);
                let members: usize = cover.boxes().values().map(|members| members.len()).sum();
                assert_eq!(members, graph.nodes());
            }
        }
    }
}

#[test]
fn members_lie_within_radius_of_their_center() {
    for (name, graph) in sample_graphs() {
        for radius in 1 .. 4 {
            let cover = memb(&graph, radius, TieBreak::Random, 7);
            for (center, members) in cover.boxes() {
                let ball = bounded_bfs(&graph, center, radius);
                for member in members {
                    assert!(
                        ball.iter().any(|&(node, _)| node == member),
                        "{}: node {} is farther than {} from center {}",
                        name,
                        member,
                        radius,
                        center
                    );
                }
            }
        }
    }
}

#[test]
fn radius_zero_gives_one_box_per_node() {
    for (_, graph) in sample_graphs() {
        assert_eq!(memb(&graph, 0, TieBreak::Random, 0).size(), graph.nodes());
    }
}

#[test]
fn sizes_do_not_increase_with_radius() {
    for (name, graph) in regular_graphs() {
        let sizes: Vec<usize> = (0 .. 8).map(|radius| memb(&graph, radius, TieBreak::LowestId, 0).size()).collect();
        for (smaller, larger) in sizes.iter().tuple_windows() {
            assert!(larger <= smaller, "{}: sizes {:?}", name, sizes);
        }
    }
}

#[test]
fn path_is_close_to_optimal() {
    let nodes = 101;
    let graph = generators::path(nodes);
    for radius in 0u32 .. 10 {
        let optimal = nodes.div_ceil(2 * radius as usize + 1);
        for seed in 0 .. 5 {
            let size = memb(&graph, radius, TieBreak::Random, seed).size();
            assert!(size >= optimal && size <= 2 * optimal + 1, "radius {}: {} boxes, optimum {}", radius, size, optimal);
        }
    }
    assert_eq!(memb(&graph, 50, TieBreak::Random, 0).size(), 1);
}

#[test]
fn four_cycle() {
    let graph = Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert_eq!(memb(&graph, 0, TieBreak::Random, 0).size(), 4);
    for seed in 0 .. 10 {
        let cover = memb(&graph, 1, TieBreak::Random, seed);
        assert_eq!(cover.size(), 2);
        assert!(cover.is_partition_of(&graph));
    }
}

#[test]
fn star_is_one_box() {
    for leaves in [2, 5, 40] {
        let graph = generators::star(leaves + 1);
        let cover = memb(&graph, 1, TieBreak::Random, 3);
        assert_eq!(cover.size(), 1);
        assert_eq!(cover.centers(), &[0]);
    }
}

#[test]
fn seeded_runs_are_identical() {
    let graph = generators::barabasi_albert(300, 2, 5);
    for radius in 1 .. 4 {
        let first = memb(&graph, radius, TieBreak::Random, 99);
        let second = memb(&graph, radius, TieBreak::Random, 99);
        assert_eq!(first, second);
    }
}

#[test]
fn disconnected_components_cover_separately() {
    let graph = Graph::new(7, &[(0, 1), (1, 2), (4, 5)]).unwrap();
    let cover = memb(&graph, 5, TieBreak::Random, 0);
    // {0, 1, 2}, {3}, {4, 5}, {6}
    assert_eq!(cover.size(), 4);
    assert_eq!(cover.box_of(0), cover.box_of(2));
    assert_ne!(cover.box_of(2), cover.box_of(3));
    assert_eq!(cover.size_distribution(), vec![(1, 2), (2, 1), (3, 1)]);
}

#[test]
fn empty_graph_has_no_boxes() {
    let graph = Graph::empty(0);
    let cover = memb(&graph, 3, TieBreak::Random, 0);
    assert_eq!(cover.size(), 0);
    assert!(cover.is_partition_of(&graph));
    assert_eq!(coverage(&graph, cover.centers(), 3), 1.0);
}

#[test]
fn centers_reach_every_node() {
    for (_, graph) in sample_graphs() {
        for radius in 0 .. 4 {
            let cover = memb(&graph, radius, TieBreak::Random, 1);
            assert_eq!(coverage(&graph, cover.centers(), radius), 1.0);
        }
    }
}

#[test]
fn every_confirmation_covers_new_nodes() {
    let graph = generators::erdos_renyi(60, 150, 2);
    let mut run = Memb::new(&graph, 2, TieBreak::Random, 6);
    let mut previous = usize::MAX;
    loop {
        match run.step() {
            Step::Confirmed { mass, .. } => {
                assert!(mass >= 1);
                assert!(mass <= previous, "masses must not increase between confirmations");
                previous = mass;
            }
            Step::Requeued { claimed, mass, .. } => assert!(mass < claimed),
            Step::Skipped { .. } => { },
            Step::Done => break,
        }
    }
    assert_eq!(run.uncovered(), 0);
    assert_eq!(run.stats().confirmations, run.centers().len());
}
