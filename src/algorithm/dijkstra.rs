use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};

use crate::algorithm::path::reconstruct_path;
use crate::algorithm::{check_vertex, PathResult, SearchStats, ShortestPathAlgorithm, INFINITY};
use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Point-to-point Dijkstra over an [`IndexedMinHeap`].
///
/// Every call allocates its own distance, predecessor and heap state, so one
/// `Dijkstra` and one graph can serve any number of concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    cancel: Option<Arc<AtomicBool>>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { cancel: None }
    }

    /// Makes searches stop with [`Error::Cancelled`] once `flag` is set.
    ///
    /// The flag is polled once per extracted vertex.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Runs a search from `start` to `end` and reports how much work it took.
    pub fn search<G>(
        &self,
        graph: &G,
        start: usize,
        end: usize,
    ) -> Result<(PathResult, SearchStats)>
    where
        G: Graph + ?Sized,
    {
        let n = graph.vertex_count();
        check_vertex(start, n)?;
        check_vertex(end, n)?;

        let mut stats = SearchStats::default();

        if start == end {
            return Ok((PathResult::found(0, vec![start]), stats));
        }

        // Same answer the loop would give after settling `start`
        if !graph.has_outgoing_edges(start) {
            warn!(
                "Start vertex {} has no outgoing edges, {} is unreachable",
                start, end
            );
            return Ok((PathResult::unreachable(), stats));
        }

        let mut dist = vec![INFINITY; n + 1];
        let mut parent: Vec<Option<usize>> = vec![None; n + 1];
        let mut heap = IndexedMinHeap::with_capacity(n);

        dist[start] = 0;
        heap.insert(start, 0)?;
        stats.heap_inserts += 1;

        while let Some((u, _)) = heap.extract_min() {
            stats.vertices_settled += 1;
            self.check_cancelled()?;

            if u == end {
                break;
            }

            // Nothing left in the heap can be closer than this
            let dist_u = dist[u];
            if dist_u == INFINITY {
                break;
            }

            for (v, weight) in graph.neighbors(u) {
                let candidate = dist_u.saturating_add(i64::from(weight));
                if candidate < dist[v] {
                    dist[v] = candidate;
                    parent[v] = Some(u);
                    stats.edges_relaxed += 1;

                    if heap.contains(v) {
                        heap.decrease_key(v, candidate)?;
                        stats.decrease_keys += 1;
                    } else {
                        heap.insert(v, candidate)?;
                        stats.heap_inserts += 1;
                    }
                }
            }
        }

        debug!(
            "Search {} -> {}: settled {} vertices, relaxed {} edges",
            start, end, stats.vertices_settled, stats.edges_relaxed
        );

        if dist[end] == INFINITY {
            return Ok((PathResult::unreachable(), stats));
        }

        let path = reconstruct_path(&parent, start, end)?;
        Ok((PathResult::found(dist[end], path), stats))
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path(&self, graph: &G, start: usize, end: usize) -> Result<PathResult> {
        self.search(graph, start, end).map(|(result, _)| result)
    }
}
