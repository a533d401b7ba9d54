use std::io::{BufRead, Write};

use clap::ValueEnum;
use tracing::warn;

/// Bellman-Ford is O(V·E); a few thousand nodes is already a stress test.
pub const DEFAULT_BELLMAN_FORD_NODES: usize = 2_000;
pub const DEFAULT_DIJKSTRA_NODES: usize = 1_000;
pub const DEFAULT_TRAVERSAL_NODES: usize = 1_000;

/// Source node used when `--source` is not given.
pub const DEFAULT_SOURCE: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Dijkstra and Bellman-Ford on the same graph, checked for agreement
    All,
    Dijkstra,
    BellmanFord,
    Bfs,
    Dfs,
    /// Event-by-event runs on the built-in sample graphs
    Demo,
}

impl Mode {
    /// The benchmark this mode runs, or `None` for the demo, which needs no
    /// generated graph.
    pub fn bench_mode(self) -> Option<BenchMode> {
        match self {
            Mode::All => Some(BenchMode::All),
            Mode::Dijkstra => Some(BenchMode::Dijkstra),
            Mode::BellmanFord => Some(BenchMode::BellmanFord),
            Mode::Bfs => Some(BenchMode::Bfs),
            Mode::Dfs => Some(BenchMode::Dfs),
            Mode::Demo => None,
        }
    }
}

/// Modes that run on a generated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchMode {
    All,
    Dijkstra,
    BellmanFord,
    Bfs,
    Dfs,
}

impl BenchMode {
    pub fn default_node_count(self) -> usize {
        match self {
            BenchMode::All | BenchMode::BellmanFord => DEFAULT_BELLMAN_FORD_NODES,
            BenchMode::Dijkstra => DEFAULT_DIJKSTRA_NODES,
            BenchMode::Bfs | BenchMode::Dfs => DEFAULT_TRAVERSAL_NODES,
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            BenchMode::All | BenchMode::BellmanFord => "Enter nodes (Recommended: 2000): ",
            _ => "Enter number of nodes (e.g. 50000): ",
        }
    }
}

/// Resolved settings for one benchmark invocation.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub mode: BenchMode,
    pub node_count: usize,
    pub seed: Option<u64>,
    pub source: usize,
}

/// Parse a node count, substituting `fallback` for anything that is not a
/// positive integer.
pub fn parse_node_count(input: &str, fallback: usize) -> usize {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            warn!(input = input.trim(), fallback, "invalid node count, using default");
            fallback
        }
    }
}

/// Ask for a node count on `output`, read one line from `input`.
///
/// A read failure is treated like bad input.
pub fn prompt_node_count<R: BufRead, W: Write>(mode: BenchMode, mut input: R, mut output: W) -> usize {
    let fallback = mode.default_node_count();
    // Prompt is best-effort; a closed stdout still gets the default.
    let _ = write!(output, "{}", mode.prompt());
    let _ = output.flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => parse_node_count(&line, fallback),
        Err(e) => {
            warn!(error = %e, fallback, "could not read node count");
            fallback
        }
    }
}
