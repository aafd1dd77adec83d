use rand::Rng;

use crate::graph::directed::{DirectedGraph, GraphBuilder};
use crate::graph::{Edge, Weight};
use crate::Result;

/// Generates a random directed graph with `edge_count` edges and weights in `0..=max_weight`.
///
/// Self-loops and parallel edges may occur. Pass a seeded RNG for reproducible graphs.
pub fn generate_random<R: Rng>(
    vertex_count: usize,
    edge_count: usize,
    max_weight: Weight,
    rng: &mut R,
) -> Result<DirectedGraph> {
    let mut builder = GraphBuilder::new(vertex_count)?;

    for _ in 0..edge_count {
        let from = rng.gen_range(1..=vertex_count);
        let to = rng.gen_range(1..=vertex_count);
        let weight = rng.gen_range(0..=max_weight);
        builder.add_edge(Edge::new(from, to, weight))?;
    }

    Ok(builder.build())
}

/// Generates a `width` x `height` grid with edges in both directions between
/// horizontal and vertical neighbours, weights drawn from `1..=max_weight`.
///
/// Vertex `(x, y)` has id `y * width + x + 1`.
pub fn generate_grid<R: Rng>(
    width: usize,
    height: usize,
    max_weight: Weight,
    rng: &mut R,
) -> Result<DirectedGraph> {
    let mut builder = GraphBuilder::new(width * height)?;
    let id = |x: usize, y: usize| y * width + x + 1;
    let max_weight = max_weight.max(1);

    for y in 0..height {
        for x in 0..width {
            let current = id(x, y);
            let mut neighbours = Vec::with_capacity(2);
            if x + 1 < width {
                neighbours.push(id(x + 1, y));
            }
            if y + 1 < height {
                neighbours.push(id(x, y + 1));
            }

            for next in neighbours {
                builder.add_edge(Edge::new(current, next, rng.gen_range(1..=max_weight)))?;
                builder.add_edge(Edge::new(next, current, rng.gen_range(1..=max_weight)))?;
            }
        }
    }

    Ok(builder.build())
}
