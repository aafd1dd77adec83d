//! Reads the plain-text graph format:
//!
//! ```text
//! V E        <- vertex count and edge-count hint
//! u v w      <- one directed edge per line, 1-based ids, weight >= 0
//! ```
//!
//! Bad edge lines are dropped with a warning. A missing or unparseable header
//! is fatal.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::graph::directed::{DirectedGraph, GraphBuilder};
use crate::graph::{Edge, Graph, Weight};
use crate::{Error, Result};

/// Why an edge line was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Fewer than three tokens on a non-blank line
    Incomplete,
    /// A token was not an integer, or the weight does not fit a [`Weight`]
    Malformed(String),
    /// An endpoint lies outside `1..=V`
    VertexOutOfRange,
    /// The weight is below zero
    NegativeWeight,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Incomplete => write!(f, "incomplete edge line"),
            RejectReason::Malformed(detail) => write!(f, "malformed edge line ({})", detail),
            RejectReason::VertexOutOfRange => write!(f, "vertex id out of range"),
            RejectReason::NegativeWeight => write!(f, "negative weight"),
        }
    }
}

/// A dropped edge line and the reason it was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRejection {
    /// 1-based line number in the input
    pub line_number: usize,
    pub line: String,
    pub reason: RejectReason,
}

/// A graph together with what happened while reading it
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: DirectedGraph,
    /// Edge count announced by the header. Not authoritative.
    pub declared_edges: usize,
    pub rejected: Vec<EdgeRejection>,
}

/// Reads a graph file from disk
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<LoadedGraph> {
    let path = path.as_ref();
    let started = Instant::now();
    info!("Reading graph file {}", path.display());

    let file = File::open(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    let loaded = read_graph(BufReader::new(file), &path.display().to_string())?;

    info!(
        "Graph construction complete: {} vertices, {} edges in {:?}",
        loaded.graph.vertex_count(),
        loaded.graph.edge_count(),
        started.elapsed()
    );
    Ok(loaded)
}

/// Reads a graph from any buffered reader
pub fn parse_graph<R: BufRead>(reader: R) -> Result<LoadedGraph> {
    read_graph(reader, "<input>")
}

fn read_graph<R: BufRead>(reader: R, source_name: &str) -> Result<LoadedGraph> {
    let io_error = |source| Error::Io {
        path: source_name.to_string(),
        source,
    };
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line.map_err(io_error)?,
        None => return Err(Error::MissingHeader),
    };
    let (vertex_count, declared_edges) = parse_header(&header)?;
    info!(
        "Vertices (from header): {}, edges (from header): {}",
        vertex_count, declared_edges
    );

    let mut builder = GraphBuilder::new(vertex_count)?;
    let mut rejected = Vec::new();

    for (index, line) in lines.enumerate() {
        let line = line.map_err(io_error)?;
        let line_number = index + 2;

        match parse_edge(&line, vertex_count) {
            Ok(Some(edge)) => builder.add_edge(edge)?,
            Ok(None) => {}
            Err(reason) => {
                warn!("Skipping line {} ({}): {}", line_number, reason, line.trim());
                rejected.push(EdgeRejection {
                    line_number,
                    line,
                    reason,
                });
            }
        }
    }

    if builder.edge_count() != declared_edges {
        warn!(
            "Header announced {} edges but {} were accepted",
            declared_edges,
            builder.edge_count()
        );
    }

    Ok(LoadedGraph {
        graph: builder.build(),
        declared_edges,
        rejected,
    })
}

/// Largest vertex count a header may declare. Vertex ids must fit in `u32`.
pub const MAX_VERTICES: i64 = u32::MAX as i64;

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let invalid = |reason: String| Error::InvalidHeader {
        line: line.to_string(),
        reason,
    };

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(invalid("expected <numVertices> <numEdges>".to_string()));
    }

    let vertices: i64 = parts[0]
        .parse()
        .map_err(|e| invalid(format!("vertex count {:?}: {}", parts[0], e)))?;
    let edges: i64 = parts[1]
        .parse()
        .map_err(|e| invalid(format!("edge count {:?}: {}", parts[1], e)))?;

    if vertices <= 0 {
        return Err(Error::InvalidVertexCount(vertices));
    }
    if vertices > MAX_VERTICES {
        return Err(invalid(format!(
            "vertex count {} exceeds the limit of {}",
            vertices, MAX_VERTICES
        )));
    }
    let vertices = usize::try_from(vertices)
        .map_err(|_| invalid(format!("vertex count {} is too large", vertices)))?;
    let edges = usize::try_from(edges)
        .map_err(|_| invalid(format!("edge count {} is negative", edges)))?;

    Ok((vertices, edges))
}

/// Parses one edge line. Blank lines yield `Ok(None)`.
fn parse_edge(line: &str, vertex_count: usize) -> std::result::Result<Option<Edge>, RejectReason> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(None);
    }
    if parts.len() < 3 {
        return Err(RejectReason::Incomplete);
    }

    let number = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|e| RejectReason::Malformed(format!("{:?}: {}", token, e)))
    };
    let from = number(parts[0])?;
    let to = number(parts[1])?;
    let weight = number(parts[2])?;

    let vertex = |id: i64| {
        usize::try_from(id)
            .ok()
            .filter(|v| (1..=vertex_count).contains(v))
            .ok_or(RejectReason::VertexOutOfRange)
    };
    let from = vertex(from)?;
    let to = vertex(to)?;

    if weight < 0 {
        return Err(RejectReason::NegativeWeight);
    }
    let weight = Weight::try_from(weight)
        .map_err(|_| RejectReason::Malformed(format!("weight {} is too large", weight)))?;

    Ok(Some(Edge::new(from, to, weight)))
}
