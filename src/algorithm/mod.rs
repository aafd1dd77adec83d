pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub use traits::{Distance, PathResult, SearchStats, ShortestPathAlgorithm};

use crate::graph::Graph;
use crate::{Error, Result};

/// Distance sentinel for vertices not yet reached. Larger than any sum of
/// edge weights along a simple path.
pub const INFINITY: i64 = i64::MAX;

/// A single `start -> end` request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub start: usize,
    pub end: usize,
}

impl Query {
    pub fn new(start: usize, end: usize) -> Self {
        Query { start, end }
    }
}

/// Shortest path from `start` to `end` with the default [`dijkstra::Dijkstra`] engine
pub fn shortest_path<G>(graph: &G, start: usize, end: usize) -> Result<PathResult>
where
    G: Graph + ?Sized,
{
    dijkstra::Dijkstra::new().shortest_path(graph, start, end)
}

/// Runs independent queries against one graph in parallel.
///
/// Results come back in the order of `queries`. A failing query does not
/// affect the others.
pub fn shortest_paths_batch<G>(graph: &G, queries: &[Query]) -> Vec<Result<PathResult>>
where
    G: Graph + ?Sized,
{
    queries
        .par_iter()
        .map(|query| shortest_path(graph, query.start, query.end))
        .collect()
}

pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if (1..=vertex_count).contains(&vertex) {
        Ok(())
    } else {
        Err(Error::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}
