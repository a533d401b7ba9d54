use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser};
use pathviz_core::{
    bellman_ford, bfs, dfs, dijkstra, undirected, Algorithm, BellmanFordOutcome, Discard, Distance,
    EdgeRecord, Graph, GraphGenerator, OperationCounter, Result, RunReport,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod demo;

use config::{BenchConfig, BenchMode, Mode, DEFAULT_SOURCE};

/// Time BFS, DFS, Dijkstra and Bellman-Ford on large random graphs.
#[derive(Parser)]
#[command(name = "pathviz-bench")]
#[command(version)]
#[command(about = "Benchmark the pathviz-core traversal and shortest-path engine")]
struct Cli {
    /// What to run
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Node count; prompted for when omitted
    node_count: Option<String>,

    /// Seed the graph generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Source node for every algorithm
    #[arg(long, default_value_t = DEFAULT_SOURCE)]
    source: usize,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let outcome = match cli.mode.bench_mode() {
        None => demo::run(),
        Some(mode) => {
            let fallback = mode.default_node_count();
            let node_count = match cli.node_count.as_deref() {
                Some(raw) => config::parse_node_count(raw, fallback),
                None => config::prompt_node_count(mode, io::stdin().lock(), io::stdout()),
            };
            run_benchmark(&BenchConfig {
                mode,
                node_count,
                seed: cli.seed,
                source: cli.source,
            })
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "benchmark failed");
            eprintln!("pathviz-bench: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_benchmark(config: &BenchConfig) -> Result<()> {
    let n = config.node_count;
    println!("pathviz-bench");
    println!("=============");
    println!();

    println!("Generating raw graph for {} nodes...", n);
    let mut generator = match config.seed {
        Some(seed) => GraphGenerator::seeded(seed),
        None => GraphGenerator::new(),
    };
    let t = Instant::now();
    let raw = generator.generate(n)?;
    println!(
        "Generated in {:.2}s: {} spanning + {} extra edges",
        t.elapsed().as_secs_f64(),
        n - 1,
        raw.len() - (n - 1)
    );

    // Both engines treat edges as directed; double them so node 0 can reach everything.
    let edges = undirected(&raw);
    println!("Total edges to process: {}", edges.len());
    println!();
    info!(nodes = n, edges = edges.len(), mode = ?config.mode, "graph ready");

    match config.mode {
        BenchMode::Dijkstra => {
            run_dijkstra(n, &edges, config.source)?;
        }
        BenchMode::BellmanFord => {
            run_bellman_ford(n, &edges, config.source)?;
        }
        BenchMode::All => {
            let d = run_dijkstra(n, &edges, config.source)?;
            let b = run_bellman_ford(n, &edges, config.source)?;
            let agree = matches!(&b, BellmanFordOutcome::Distances(bd) if *bd == d);
            println!("Dijkstra and Bellman-Ford agree: {}", if agree { "yes" } else { "NO" });
        }
        BenchMode::Bfs | BenchMode::Dfs => {
            // Register 0..n up front so a one-node graph still has its source.
            let graph = Graph::from_edge_records_sized(n, &edges);
            run_traversal(config.mode, &graph, config.source)?;
        }
    }
    Ok(())
}

fn print_summary(algorithm: Algorithm, counter: &OperationCounter) {
    println!("{:-<30}", "");
    println!("Algorithm Finished.");
    println!(
        "{}",
        RunReport {
            algorithm,
            metrics: counter.metrics(),
        }
    );
    println!("{:-<30}", "");
}

fn print_distances(dist: &[Distance]) {
    let reachable = dist.iter().filter(|d| d.is_finite()).count();
    let sample: Vec<String> = dist.iter().take(5).map(|d| d.to_string()).collect();
    println!("Reachable: {} / {}", reachable, dist.len());
    println!("Sample output: [{}]", sample.join(", "));
    println!();
}

fn run_dijkstra(n: usize, edges: &[EdgeRecord], source: usize) -> Result<Vec<Distance>> {
    println!("Running {}...", Algorithm::Dijkstra);
    let mut counter = OperationCounter::new();
    let dist = dijkstra(n, edges, source, &mut counter)?;
    print_summary(Algorithm::Dijkstra, &counter);
    print_distances(&dist);
    Ok(dist)
}

fn run_bellman_ford(
    n: usize,
    edges: &[EdgeRecord],
    source: usize,
) -> Result<BellmanFordOutcome<Vec<Distance>>> {
    println!("Running {}...", Algorithm::BellmanFord);
    let mut counter = OperationCounter::new();
    let outcome = bellman_ford(n, edges, source, &mut counter)?;
    print_summary(Algorithm::BellmanFord, &counter);
    match &outcome {
        BellmanFordOutcome::Distances(dist) => print_distances(dist),
        BellmanFordOutcome::NegativeCycle => println!("Negative cycle detected.\n"),
    }
    Ok(outcome)
}

fn run_traversal(mode: BenchMode, graph: &Graph<usize>, source: usize) -> Result<()> {
    let algorithm = if mode == BenchMode::Bfs {
        Algorithm::Bfs
    } else {
        Algorithm::Dfs
    };
    println!("Running {}...", algorithm);

    let mut counter = OperationCounter::new();
    let order = if mode == BenchMode::Bfs {
        bfs(graph, &source, &mut counter, &mut Discard)?
    } else {
        dfs(graph, &source, &mut counter, &mut Discard)?
    };
    print_summary(algorithm, &counter);
    println!("Visited: {} / {}", order.len(), graph.node_count());
    println!(
        "First visited: {:?}",
        order.iter().take(10).collect::<Vec<_>>()
    );
    println!();
    Ok(())
}
