pub mod traits;
pub mod directed;
pub mod loader;
pub mod dimacs;
pub mod generators;

pub use traits::Graph;
pub use directed::{DirectedGraph, GraphBuilder};

/// Edge weight. Negative weights are unrepresentable; ingestion rejects them.
pub type Weight = u32;

/// A directed edge `from -> to` with its weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: Weight) -> Self {
        Edge { from, to, weight }
    }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((from, to, weight): (usize, usize, Weight)) -> Self {
        Edge { from, to, weight }
    }
}
