use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{shortest_paths_batch, Query};
use crate::graph::directed::DirectedGraph;
use crate::graph::loader::LoadedGraph;
use crate::graph::traits::Graph;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state. The graph is read-only, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<DirectedGraph>,
    pub declared_edges: usize,
    pub rejected_lines: usize,
    pub dijkstra: Dijkstra,
}

impl AppState {
    pub fn new(loaded: LoadedGraph) -> Self {
        Self {
            graph: Arc::new(loaded.graph),
            declared_edges: loaded.declared_edges,
            rejected_lines: loaded.rejected.len(),
            dijkstra: Dijkstra::new(),
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/graph", get(graph_summary))
        .route("/api/path", post(find_path))
        .route("/api/paths", post(find_paths))
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        vertex_count: state.graph.vertex_count(),
        edge_count: state.graph.edge_count(),
    })
}

pub async fn graph_summary(State(state): State<AppState>) -> Json<GraphSummary> {
    Json(GraphSummary {
        vertex_count: state.graph.vertex_count(),
        edge_count: state.graph.edge_count(),
        declared_edges: state.declared_edges,
        rejected_lines: state.rejected_lines,
    })
}

/// Run one shortest path query
pub async fn find_path(
    State(state): State<AppState>,
    Json(query): Json<Query>,
) -> Result<Json<QueryResponse>, ApiError> {
    let graph = Arc::clone(&state.graph);
    let dijkstra = state.dijkstra.clone();

    let outcome = tokio::task::spawn_blocking(move || {
        let started = Instant::now();
        dijkstra
            .search(graph.as_ref(), query.start, query.end)
            .map(|(result, stats)| (result, stats, started.elapsed()))
    })
    .await
    .map_err(|e| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "search_failed",
            format!("Search task failed: {}", e),
        )
    })?;

    match outcome {
        Ok((result, stats, elapsed)) => Ok(Json(QueryResponse::new(
            query,
            result,
            stats,
            elapsed.as_secs_f64() * 1000.0,
        ))),
        Err(e) => Err(map_error(e)),
    }
}

/// Run several independent queries in parallel
pub async fn find_paths(
    State(state): State<AppState>,
    Json(queries): Json<Vec<Query>>,
) -> Result<Json<Vec<BatchEntry>>, ApiError> {
    let graph = Arc::clone(&state.graph);

    let entries = tokio::task::spawn_blocking(move || {
        let results = shortest_paths_batch(graph.as_ref(), &queries);
        queries
            .iter()
            .zip(results)
            .map(|(query, result)| match result {
                Ok(result) => BatchEntry {
                    start: query.start,
                    end: query.end,
                    result: Some(result),
                    error: None,
                },
                Err(e) => BatchEntry {
                    start: query.start,
                    end: query.end,
                    result: None,
                    error: Some(e.to_string()),
                },
            })
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "search_failed",
            format!("Batch task failed: {}", e),
        )
    })?;

    Ok(Json(entries))
}

fn map_error(err: Error) -> ApiError {
    match err {
        Error::VertexOutOfRange {
            vertex,
            vertex_count,
        } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "vertex_out_of_range".to_string(),
                message: err.to_string(),
                details: Some(serde_json::json!({
                    "vertex": vertex,
                    "vertex_count": vertex_count,
                })),
            }),
        ),
        Error::Cancelled => error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "search_cancelled",
            err.to_string(),
        ),
        _ => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "search_failed",
            err.to_string(),
        ),
    }
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}
