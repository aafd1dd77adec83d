use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process;
use std::time::Instant;

use log::{error, info};
use road_spt::graph::dimacs::convert_dimacs;
use road_spt::{load_graph, Dijkstra, Graph};

/// Longest path prefix printed before eliding the rest
const MAX_PRINTED_VERTICES: usize = 50;

fn usage(program: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("  {} query <graph-file> <start> <end>", program);
    eprintln!("  {} convert <dimacs-file> <edge-list-file>", program);
    process::exit(2);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("road_spt");

    let outcome = match args.get(1).map(String::as_str) {
        Some("query") if args.len() == 5 => run_query(&args[2], &args[3], &args[4]),
        Some("convert") if args.len() == 4 => run_convert(&args[2], &args[3]),
        _ => usage(program),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}

fn run_query(graph_file: &str, start: &str, end: &str) -> Result<(), Box<dyn std::error::Error>> {
    let start: usize = start
        .parse()
        .map_err(|e| format!("invalid start vertex {:?}: {}", start, e))?;
    let end: usize = end
        .parse()
        .map_err(|e| format!("invalid end vertex {:?}: {}", end, e))?;

    let started = Instant::now();
    let loaded = load_graph(graph_file)?;
    let graph = loaded.graph;

    let (result, stats) = Dijkstra::new().search(&graph, start, end)?;
    let elapsed = started.elapsed();

    println!("--- Results ---");
    match result.distance.value() {
        Some(distance) => {
            println!("Shortest distance from {} to {}: {}", start, end, distance);
            println!("Path ({} nodes):", result.path.len());
            let shown: Vec<String> = result
                .path
                .iter()
                .take(MAX_PRINTED_VERTICES)
                .map(|v| v.to_string())
                .collect();
            let elided = if result.path.len() > MAX_PRINTED_VERTICES {
                " ..."
            } else {
                ""
            };
            println!("{}{}", shown.join(" -> "), elided);
        }
        None => println!("No path found between {} and {}", start, end),
    }

    println!("--- Performance ---");
    println!("Vertices settled: {}", stats.vertices_settled);
    println!("Graph: {} vertices, {} edges", graph.vertex_count(), graph.edge_count());
    println!("Total execution time: {} ms", elapsed.as_millis());

    Ok(())
}

fn run_convert(input: &str, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);

    let report = convert_dimacs(reader, writer)?;
    info!(
        "Wrote {} vertices and {} edges to {}",
        report.vertex_count, report.edges_written, output
    );
    if report.errors > 0 {
        println!("Errors encountered: {}", report.errors);
    } else {
        println!("Data cleaned successfully.");
    }

    Ok(())
}
