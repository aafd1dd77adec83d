use std::io::Cursor;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use road_spt::web::api::{find_path, find_paths, graph_summary, health_check, AppState};
use road_spt::web::build_app;
use road_spt::{parse_graph, Distance, Query};

fn state() -> AppState {
    let text = "5 6\n1 2 1\n2 3 2\n1 3 5\n3 4 1\n4 1 -3\n5 5 1\n";
    AppState::new(parse_graph(Cursor::new(text)).unwrap())
}

#[tokio::test]
async fn test_health_and_summary() {
    let state = state();

    let Json(health) = health_check(State(state.clone())).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.vertex_count, 5);
    assert_eq!(health.edge_count, 5);

    let Json(summary) = graph_summary(State(state)).await;
    assert_eq!(summary.declared_edges, 6);
    assert_eq!(summary.rejected_lines, 1);
}

#[tokio::test]
async fn test_find_path_returns_route() {
    let Json(response) = find_path(State(state()), Json(Query::new(1, 4)))
        .await
        .unwrap();

    assert_eq!(response.start, 1);
    assert_eq!(response.end, 4);
    assert_eq!(response.distance, Distance::Finite(4));
    assert_eq!(response.path, vec![1, 2, 3, 4]);
    assert!(response.vertices_settled >= 1);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["distance"], 4);
    assert_eq!(json["path"], serde_json::json!([1, 2, 3, 4]));
}

#[tokio::test]
async fn test_unreachable_serialises_as_null() {
    let Json(response) = find_path(State(state()), Json(Query::new(4, 5)))
        .await
        .unwrap();

    assert_eq!(response.distance, Distance::Unreachable);
    assert!(response.path.is_empty());

    let json = serde_json::to_value(&response).unwrap();
    assert!(json["distance"].is_null());
}

#[tokio::test]
async fn test_out_of_range_query_is_bad_request() {
    let (status, Json(error)) = find_path(State(state()), Json(Query::new(1, 9)))
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "vertex_out_of_range");
    assert_eq!(error.details.unwrap()["vertex"], 9);
}

#[tokio::test]
async fn test_batch_reports_each_query() {
    let queries = vec![Query::new(1, 4), Query::new(0, 1), Query::new(2, 2)];
    let Json(entries) = find_paths(State(state()), Json(queries)).await.unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].result.as_ref().unwrap().distance, Distance::Finite(4));
    assert!(entries[1].result.is_none());
    assert!(entries[1].error.is_some());
    assert_eq!(entries[2].result.as_ref().unwrap().path, vec![2]);
}

#[test]
fn test_app_builds_with_and_without_cors() {
    let _with_cors = build_app(state(), true);
    let _without_cors = build_app(state(), false);
}
