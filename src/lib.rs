//! Road SPT - point-to-point shortest paths on road networks
//!
//! Computes the shortest path between two vertices of a directed graph with
//! non-negative integer weights using Dijkstra's algorithm over an indexed
//! binary min-heap with in-place decrease-key. The search stops as soon as
//! the target is settled.
//!
//! Vertices are dense integers `1..=V`. Graphs are immutable once built and
//! can be shared between any number of concurrent queries.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod web;

// Re-export main types for convenient use
pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, shortest_path, shortest_paths_batch, Distance,
    PathResult, Query, SearchStats, ShortestPathAlgorithm,
};
pub use graph::directed::{DirectedGraph, GraphBuilder};
pub use graph::loader::{load_graph, parse_graph, EdgeRejection, LoadedGraph, RejectReason};
pub use graph::{Edge, Graph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Graph input is empty or missing the header line")]
    MissingHeader,

    #[error("Invalid header line {line:?}: {reason}")]
    InvalidHeader { line: String, reason: String },

    #[error("Number of vertices must be positive, got {0}")]
    InvalidVertexCount(i64),

    #[error("Invalid edge {from} -> {to}: vertices must lie in 1..={vertex_count}")]
    InvalidEdge {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("Vertex {vertex} is out of range 1..={vertex_count}")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("Heap capacity of {capacity} vertices exceeded")]
    HeapCapacityExceeded { capacity: usize },

    #[error("Vertex {0} is already in the heap")]
    AlreadyQueued(usize),

    #[error("Vertex {0} is not in the heap")]
    NotQueued(usize),

    #[error("Predecessor chain from {end} back to {start} is longer than the graph")]
    CorruptPredecessorChain { start: usize, end: usize },

    #[error("Search was cancelled")]
    Cancelled,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
