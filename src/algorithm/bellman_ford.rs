use crate::algorithm::path::reconstruct_path;
use crate::algorithm::{check_vertex, PathResult, ShortestPathAlgorithm, INFINITY};
use crate::graph::Graph;
use crate::Result;

/// Bellman-Ford relaxation over every edge, used to cross-check [`Dijkstra`]
/// on small graphs. O(V * E).
///
/// [`Dijkstra`]: crate::algorithm::dijkstra::Dijkstra
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord;

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<G> ShortestPathAlgorithm<G> for BellmanFord
where
    G: Graph + ?Sized,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn shortest_path(&self, graph: &G, start: usize, end: usize) -> Result<PathResult> {
        let n = graph.vertex_count();
        check_vertex(start, n)?;
        check_vertex(end, n)?;

        let mut dist = vec![INFINITY; n + 1];
        let mut parent: Vec<Option<usize>> = vec![None; n + 1];
        dist[start] = 0;

        for _ in 1..n {
            let mut changed = false;
            for u in 1..=n {
                if dist[u] == INFINITY {
                    continue;
                }
                for (v, weight) in graph.neighbors(u) {
                    let candidate = dist[u].saturating_add(i64::from(weight));
                    if candidate < dist[v] {
                        dist[v] = candidate;
                        parent[v] = Some(u);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        if dist[end] == INFINITY {
            return Ok(PathResult::unreachable());
        }

        let path = reconstruct_path(&parent, start, end)?;
        Ok(PathResult::found(dist[end], path))
    }
}
