use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::Result;

/// Length of a shortest path, or the fact that none exists.
///
/// Serialises as a JSON number, or `null` when unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    Finite(i64),
    Unreachable,
}

impl Distance {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite distance, if any
    pub fn value(&self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Outcome of a point-to-point query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub distance: Distance,

    /// Vertices from start to end inclusive; empty iff unreachable
    pub path: Vec<usize>,
}

impl PathResult {
    pub fn unreachable() -> Self {
        PathResult {
            distance: Distance::Unreachable,
            path: Vec::new(),
        }
    }

    pub fn found(distance: i64, path: Vec<usize>) -> Self {
        PathResult {
            distance: Distance::Finite(distance),
            path,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_reachable()
    }
}

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Vertices extracted from the priority queue
    pub vertices_settled: usize,
    /// Successful relaxations
    pub edges_relaxed: usize,
    pub heap_inserts: usize,
    pub decrease_keys: usize,
}

/// Trait for point-to-point shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph + ?Sized,
{
    /// Compute the shortest path from `start` to `end`
    fn shortest_path(&self, graph: &G, start: usize, end: usize) -> Result<PathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
