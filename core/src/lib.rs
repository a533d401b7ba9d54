//! pathviz-core: instrumented graph traversal and shortest-path engine.
//!
//! Four algorithms (BFS, DFS, Dijkstra, Bellman-Ford), a step/time counter
//! threaded through every run, and a random graph generator for stress tests.
//!
//! Each shortest-path algorithm comes in two forms:
//! - index form (`dijkstra`, `bellman_ford`): `usize` edge list in, distance
//!   vector out, no events. Used for benchmarking.
//! - keyed form (`*_events`, `bfs`, `dfs`): generic node ids, every step
//!   reported to an [`EventSink`] for a visualizer or logger to consume.

mod counter;
mod error;
mod event;
mod generator;
mod graph;
mod shortest_path;
mod traversal;

pub use counter::{Algorithm, OperationCounter, RunMetrics, RunReport};
pub use error::{GraphError, Result};
pub use event::{Discard, Distance, EventLog, EventSink, NodeState, TraversalEvent};
pub use generator::{effective_node_count, undirected, GraphGenerator, MAX_WEIGHT, MIN_WEIGHT};
pub use graph::{sample_graph, traversal_sample, Edge, EdgeRecord, Graph, NodeKey, Weight};
pub use shortest_path::{
    bellman_ford, bellman_ford_events, dijkstra, dijkstra_events, BellmanFordOutcome, DistanceMap,
};
pub use traversal::{bfs, dfs};
