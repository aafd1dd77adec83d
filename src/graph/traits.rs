use std::fmt::Debug;

use super::Weight;

/// Trait representing a read-only weighted directed graph over vertices `1..=V`
pub trait Graph: Debug + Sync {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex as `(target, weight)`.
    ///
    /// Edges come back in reverse insertion order (last added first). Calling
    /// this again restarts the sequence.
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, Weight)> + '_>;

    /// Returns true if the vertex has at least one outgoing edge
    fn has_outgoing_edges(&self, vertex: usize) -> bool;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        (1..=self.vertex_count()).contains(&vertex)
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among edges `from -> to`, if any exist
    fn edge_weight(&self, from: usize, to: usize) -> Option<Weight> {
        self.neighbors(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
