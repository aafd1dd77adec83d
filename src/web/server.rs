use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::graph::loader::load_graph;
use crate::graph::traits::Graph;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_address: IpAddr,
    pub graph_path: PathBuf,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            graph_path: PathBuf::from("graph.txt"),
            enable_cors: true,
        }
    }
}

/// Build the application router around already loaded state
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let app = Router::new().merge(create_router()).with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Load the configured graph and serve queries against it until the process stops
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_graph(&config.graph_path)?;
    info!(
        "Loaded {} ({} vertices, {} edges, {} lines rejected)",
        config.graph_path.display(),
        loaded.graph.vertex_count(),
        loaded.graph.edge_count(),
        loaded.rejected.len()
    );

    let app = build_app(AppState::new(loaded), config.enable_cors);

    let addr = SocketAddr::new(config.bind_address, config.port);
    info!("Road SPT server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
