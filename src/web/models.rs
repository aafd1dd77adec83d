use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::{Distance, PathResult, Query, SearchStats};

/// Response for a single path query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub query_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub start: usize,
    pub end: usize,
    pub distance: Distance,
    pub path: Vec<usize>,
    pub elapsed_ms: f64,
    pub vertices_settled: usize,
    pub edges_relaxed: usize,
}

impl QueryResponse {
    pub fn new(query: Query, result: PathResult, stats: SearchStats, elapsed_ms: f64) -> Self {
        Self {
            query_id: Uuid::new_v4(),
            computed_at: Utc::now(),
            start: query.start,
            end: query.end,
            distance: result.distance,
            path: result.path,
            elapsed_ms,
            vertices_settled: stats.vertices_settled,
            edges_relaxed: stats.edges_relaxed,
        }
    }
}

/// One entry of a batch response: either a result or the reason the query failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PathResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Vertex and edge counts of the loaded graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub declared_edges: usize,
    pub rejected_lines: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
