use log::info;
use road_spt::web::server::{start_server, ServerConfig};
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments: <graph-file> [port]
    let args: Vec<String> = env::args().collect();
    let mut config = ServerConfig::default();
    match args.get(1) {
        Some(path) => config.graph_path = PathBuf::from(path),
        None => {
            let program = args.first().map(String::as_str).unwrap_or("web_server");
            eprintln!("Usage: {} <graph-file> [port]", program);
            std::process::exit(2);
        }
    }
    if let Some(port) = args.get(2) {
        config.port = port.parse()?;
    }

    info!("Starting Road SPT web server");
    info!("  Graph file: {}", config.graph_path.display());
    info!("  Address: {}:{}", config.bind_address, config.port);
    info!("  CORS enabled: {}", config.enable_cors);

    start_server(config).await
}
