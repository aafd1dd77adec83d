use crate::graph::traits::Graph;
use crate::graph::{Edge, Weight};
use crate::{Error, Result};

/// An immutable directed graph stored as adjacency lists over vertices `1..=V`.
///
/// Slot 0 of the adjacency table is never used so vertex ids index it directly.
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Number of edges in the graph
    edge_count: usize,

    /// Outgoing edges for each vertex, in insertion order: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, Weight)>>,
}

impl DirectedGraph {
    /// Builds a graph from a vertex count and a list of accepted edges.
    ///
    /// Fails if `vertex_count` is zero or any edge endpoint lies outside `1..=vertex_count`.
    pub fn build<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut builder = GraphBuilder::new(vertex_count)?;
        for edge in edges {
            builder.add_edge(edge.into())?;
        }
        Ok(builder.build())
    }

    /// Iterates over every edge, grouped by source vertex in ascending order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.outgoing_edges
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| {
                edges
                    .iter()
                    .map(move |&(to, weight)| Edge::new(from, to, weight))
            })
    }
}

impl Graph for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, Weight)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().rev().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_outgoing_edges(&self, vertex: usize) -> bool {
        self.outgoing_edges
            .get(vertex)
            .map_or(false, |edges| !edges.is_empty())
    }
}

/// Accumulates validated edges for a [`DirectedGraph`].
///
/// The builder is the only way to add edges; once `build` is called the
/// graph can no longer change.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    vertex_count: usize,
    edge_count: usize,
    outgoing_edges: Vec<Vec<(usize, Weight)>>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with vertices `1..=vertex_count`
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidVertexCount(0));
        }

        let too_large =
            || Error::InvalidVertexCount(i64::try_from(vertex_count).unwrap_or(i64::MAX));
        let slots = vertex_count.checked_add(1).ok_or_else(too_large)?;
        let mut outgoing_edges = Vec::new();
        outgoing_edges.try_reserve_exact(slots).map_err(|_| too_large())?;
        outgoing_edges.resize_with(slots, Vec::new);

        Ok(GraphBuilder {
            vertex_count,
            edge_count: 0,
            outgoing_edges,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds a directed edge. Parallel edges and self-loops are kept as given.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let in_range = |v: usize| (1..=self.vertex_count).contains(&v);
        if !in_range(edge.from) || !in_range(edge.to) {
            return Err(Error::InvalidEdge {
                from: edge.from,
                to: edge.to,
                vertex_count: self.vertex_count,
            });
        }

        self.outgoing_edges[edge.from].push((edge.to, edge.weight));
        self.edge_count += 1;
        Ok(())
    }

    pub fn build(self) -> DirectedGraph {
        DirectedGraph {
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
            outgoing_edges: self.outgoing_edges,
        }
    }
}
