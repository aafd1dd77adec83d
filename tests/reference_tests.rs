use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use road_spt::graph::generators::{generate_grid, generate_random};
use road_spt::{
    shortest_path, shortest_paths_batch, BellmanFord, Dijkstra, DirectedGraph, Distance, Graph,
    PathResult, Query, ShortestPathAlgorithm,
};

// Checks that `result.path` walks real edges from start to end and that the
// cheapest edge on each hop adds up to the reported distance
fn assert_valid_path(graph: &DirectedGraph, start: usize, end: usize, result: &PathResult) {
    let distance = match result.distance {
        Distance::Finite(d) => d,
        Distance::Unreachable => {
            assert!(result.path.is_empty());
            return;
        }
    };

    assert_eq!(result.path.first(), Some(&start), "path should start at {}", start);
    assert_eq!(result.path.last(), Some(&end), "path should end at {}", end);

    let mut total = 0i64;
    for hop in result.path.windows(2) {
        let weight = graph
            .edge_weight(hop[0], hop[1])
            .unwrap_or_else(|| panic!("path uses missing edge {} -> {}", hop[0], hop[1]));
        total += i64::from(weight);
    }
    assert_eq!(total, distance, "path weight should equal reported distance");
}

#[test]
fn test_matches_bellman_ford_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let dijkstra = Dijkstra::new();
    let reference = BellmanFord::new();

    for round in 0..60 {
        let vertices = rng.gen_range(1..=12);
        let edges = rng.gen_range(0..=vertices * 3);
        let max_weight = if round % 3 == 0 { 2 } else { 20 };
        let graph = generate_random(vertices, edges, max_weight, &mut rng).unwrap();

        for start in 1..=vertices {
            for end in 1..=vertices {
                let fast = dijkstra.shortest_path(&graph, start, end).unwrap();
                let slow = reference.shortest_path(&graph, start, end).unwrap();

                assert_eq!(
                    fast.distance, slow.distance,
                    "distance mismatch {} -> {} on {:?}",
                    start, end, graph
                );
                assert_valid_path(&graph, start, end, &fast);
            }
        }
    }
}

#[test]
fn test_fast_path_agrees_with_general_loop() {
    // Whenever the start has no outgoing edges, the answer must match what a
    // full relaxation would find.
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..40 {
        let graph = generate_random(8, 10, 5, &mut rng).unwrap();
        for start in (1..=8).filter(|&v| !graph.has_outgoing_edges(v)) {
            for end in 1..=8 {
                let (fast, stats) = Dijkstra::new().search(&graph, start, end).unwrap();
                let slow = BellmanFord::new().shortest_path(&graph, start, end).unwrap();
                assert_eq!(fast, slow);
                assert_eq!(stats.vertices_settled, 0);
            }
        }
    }
}

#[test]
fn test_grid_paths_are_valid() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate_grid(12, 9, 10, &mut rng).unwrap();
    assert_eq!(graph.vertex_count(), 108);

    let corner = graph.vertex_count();
    let result = shortest_path(&graph, 1, corner).unwrap();
    assert!(result.is_reachable());
    assert!(result.path.len() >= 12 + 9 - 1);
    assert_valid_path(&graph, 1, corner, &result);

    let reference = BellmanFord::new().shortest_path(&graph, 1, corner).unwrap();
    assert_eq!(result.distance, reference.distance);
}

#[test]
fn test_early_exit_settles_fewer_vertices() {
    // A long chain: reaching the second vertex should not scan the rest
    let edges: Vec<(usize, usize, u32)> = (1..100).map(|v| (v, v + 1, 1)).collect();
    let graph = DirectedGraph::build(100, edges).unwrap();

    let (result, stats) = Dijkstra::new().search(&graph, 1, 2).unwrap();
    assert_eq!(result, PathResult::found(1, vec![1, 2]));
    assert_eq!(stats.vertices_settled, 2);
}

#[test]
fn test_batch_matches_individual_queries() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = generate_random(40, 160, 50, &mut rng).unwrap();

    let mut queries: Vec<Query> = (0..200)
        .map(|_| Query::new(rng.gen_range(1..=40), rng.gen_range(1..=40)))
        .collect();
    queries.push(Query::new(0, 3));

    let results = shortest_paths_batch(&graph, &queries);
    assert_eq!(results.len(), queries.len());

    for (query, result) in queries.iter().zip(&results) {
        match shortest_path(&graph, query.start, query.end) {
            Ok(expected) => assert_eq!(result.as_ref().unwrap(), &expected),
            Err(_) => assert!(result.is_err()),
        }
    }
    assert!(results.last().unwrap().is_err());
}

#[test]
fn test_concurrent_queries_share_one_graph() {
    let mut rng = StdRng::seed_from_u64(2024);
    let graph = Arc::new(generate_grid(20, 20, 9, &mut rng).unwrap());
    let expected = shortest_path(graph.as_ref(), 1, 400).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || shortest_path(graph.as_ref(), 1, 400).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
