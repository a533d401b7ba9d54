use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace, warn};

use crate::counter::OperationCounter;
use crate::error::{GraphError, Result};
use crate::event::{Distance, EventSink, NodeState, TraversalEvent};
use crate::generator::effective_node_count;
use crate::graph::{EdgeRecord, Graph, NodeKey, Weight};

/// Result of Bellman-Ford: distances, or the marker for a reachable
/// negative-weight cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BellmanFordOutcome<D> {
    Distances(D),
    NegativeCycle,
}

impl<D> BellmanFordOutcome<D> {
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, BellmanFordOutcome::NegativeCycle)
    }

    pub fn distances(&self) -> Option<&D> {
        match self {
            BellmanFordOutcome::Distances(d) => Some(d),
            BellmanFordOutcome::NegativeCycle => None,
        }
    }

    pub fn into_distances(self) -> Option<D> {
        match self {
            BellmanFordOutcome::Distances(d) => Some(d),
            BellmanFordOutcome::NegativeCycle => None,
        }
    }
}

/// Keyed distance map returned by the event-emitting variants.
pub type DistanceMap<N> = HashMap<N, Distance>;

/// Widen the declared count to cover every index the edges name, and check
/// the source fits.
fn sized_for(node_count: usize, edges: &[EdgeRecord], source: usize) -> Result<usize> {
    let v = effective_node_count(node_count, edges);
    if v > node_count {
        warn!(declared = node_count, effective = v, "edges reference nodes past declared count, widening");
    }
    if source >= v {
        return Err(GraphError::SourceOutOfRange {
            index: source,
            node_count: v,
        });
    }
    Ok(v)
}

fn missing<N: NodeKey>(node: &N) -> GraphError {
    GraphError::NodeNotFound(format!("{:?}", node))
}

// ---------------------------------------------------------------------------
// Index form: edge list in, distance vector out. No events, used for benchmarks.
// ---------------------------------------------------------------------------

/// Dijkstra over a directed edge list.
///
/// Builds the adjacency list (counted in the timing), then relaxes with a
/// binary heap keyed by `(distance, node)`. There is no decrease-key: improved
/// nodes are pushed again and outdated entries are skipped when popped.
/// Weights must be non-negative; this is not checked.
///
/// Steps: one per heap pop, one per relaxation attempt.
pub fn dijkstra(
    node_count: usize,
    edges: &[EdgeRecord],
    source: usize,
    counter: &mut OperationCounter,
) -> Result<Vec<Distance>> {
    counter.start();
    let v = match sized_for(node_count, edges, source) {
        Ok(v) => v,
        Err(e) => {
            counter.stop();
            return Err(e);
        }
    };

    let mut adj: Vec<Vec<(usize, Weight)>> = vec![Vec::new(); v];
    for e in edges {
        adj[e.from].push((e.to, e.weight));
    }

    let mut dist = vec![Distance::Infinite; v];
    dist[source] = Distance::Finite(0);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0 as Weight, source)));
    let mut stale = 0u64;

    while let Some(Reverse((d, u))) = heap.pop() {
        counter.increment();
        if Distance::Finite(d) > dist[u] {
            stale += 1;
            continue;
        }

        for &(target, weight) in &adj[u] {
            counter.increment();
            let candidate = d.saturating_add(weight);
            if Distance::Finite(candidate) < dist[target] {
                dist[target] = Distance::Finite(candidate);
                heap.push(Reverse((candidate, target)));
            }
        }
    }

    counter.stop();
    trace!(stale, "dijkstra stale pops skipped");
    debug!(
        nodes = v,
        edges = edges.len(),
        steps = counter.steps(),
        elapsed_ms = counter.elapsed().as_secs_f64() * 1000.0,
        "dijkstra complete"
    );
    Ok(dist)
}

/// Bellman-Ford over a directed edge list.
///
/// At most `V - 1` passes over every edge, stopping after the first pass
/// that changes nothing. If all passes still made progress, one more scan
/// looks for an edge that can still be relaxed; finding one means a negative
/// cycle is reachable from `source`.
///
/// Steps: one per edge check, including the final scan.
pub fn bellman_ford(
    node_count: usize,
    edges: &[EdgeRecord],
    source: usize,
    counter: &mut OperationCounter,
) -> Result<BellmanFordOutcome<Vec<Distance>>> {
    counter.start();
    let v = match sized_for(node_count, edges, source) {
        Ok(v) => v,
        Err(e) => {
            counter.stop();
            return Err(e);
        }
    };

    let mut dist = vec![Distance::Infinite; v];
    dist[source] = Distance::Finite(0);

    let mut converged = false;
    for pass in 0..v.saturating_sub(1) {
        let mut changed = false;
        for e in edges {
            counter.increment();
            if let Distance::Finite(du) = dist[e.from] {
                let candidate = Distance::Finite(du.saturating_add(e.weight));
                if candidate < dist[e.to] {
                    dist[e.to] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            trace!(pass, "bellman-ford converged early");
            converged = true;
            break;
        }
    }

    if !converged && has_relaxable_edge(&dist, edges, counter) {
        counter.stop();
        warn!(nodes = v, edges = edges.len(), "negative cycle reachable from source");
        return Ok(BellmanFordOutcome::NegativeCycle);
    }

    counter.stop();
    debug!(
        nodes = v,
        edges = edges.len(),
        steps = counter.steps(),
        elapsed_ms = counter.elapsed().as_secs_f64() * 1000.0,
        "bellman-ford complete"
    );
    Ok(BellmanFordOutcome::Distances(dist))
}

fn has_relaxable_edge(dist: &[Distance], edges: &[EdgeRecord], counter: &mut OperationCounter) -> bool {
    edges.iter().any(|e| {
        counter.increment();
        dist[e.from].is_finite() && dist[e.from].through(e.weight) < dist[e.to]
    })
}

// ---------------------------------------------------------------------------
// Keyed form: generic node ids, every step reported to an EventSink.
// ---------------------------------------------------------------------------

fn announce_start<N: NodeKey, S: EventSink<N> + ?Sized>(graph: &Graph<N>, start: &N, sink: &mut S) {
    for node in graph.nodes() {
        sink.emit(TraversalEvent::Distance {
            node: node.clone(),
            distance: Distance::Infinite,
        });
    }
    sink.emit(TraversalEvent::Distance {
        node: start.clone(),
        distance: Distance::Finite(0),
    });
    sink.emit(TraversalEvent::State {
        node: start.clone(),
        state: NodeState::Start,
    });
}

fn state<N: NodeKey, S: EventSink<N> + ?Sized>(sink: &mut S, node: &N, state: NodeState) {
    sink.emit(TraversalEvent::State {
        node: node.clone(),
        state,
    });
}

/// Dijkstra over a keyed graph, reporting each step.
///
/// A popped node already finalized is skipped. For each edge out of a newly
/// finalized node the target is marked `Updating`; if the edge improves it,
/// a `Distance` event and `Frontier` follow, otherwise the target reverts to
/// `Default` unless it is already finalized. Ends with `Complete`.
pub fn dijkstra_events<N, S>(
    graph: &Graph<N>,
    start: &N,
    counter: &mut OperationCounter,
    sink: &mut S,
) -> Result<DistanceMap<N>>
where
    N: NodeKey,
    S: EventSink<N> + ?Sized,
{
    if !graph.contains(start) {
        return Err(missing(start));
    }
    counter.start();

    let mut dist: DistanceMap<N> = graph
        .nodes()
        .iter()
        .map(|n| (n.clone(), Distance::Infinite))
        .collect();
    dist.insert(start.clone(), Distance::Finite(0));
    announce_start(graph, start, sink);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0 as Weight, start.clone())));
    let mut finalized: HashSet<N> = HashSet::with_capacity(graph.node_count());

    while let Some(Reverse((d, u))) = heap.pop() {
        counter.increment();
        if !finalized.insert(u.clone()) {
            continue;
        }
        state(sink, &u, NodeState::Visited);

        for edge in graph.neighbors_out(&u) {
            counter.increment();
            let candidate = d.saturating_add(edge.weight);
            state(sink, &edge.target, NodeState::Updating);

            let best = dist.get(&edge.target).copied().unwrap_or(Distance::Infinite);
            if Distance::Finite(candidate) < best {
                dist.insert(edge.target.clone(), Distance::Finite(candidate));
                sink.emit(TraversalEvent::Distance {
                    node: edge.target.clone(),
                    distance: Distance::Finite(candidate),
                });
                heap.push(Reverse((candidate, edge.target.clone())));
                state(sink, &edge.target, NodeState::Frontier);
            } else if !finalized.contains(&edge.target) {
                state(sink, &edge.target, NodeState::Default);
            }
        }
    }

    counter.stop();
    debug!(start = ?start, steps = counter.steps(), "dijkstra run complete");
    sink.emit(TraversalEvent::Complete(counter.metrics()));
    Ok(dist)
}

/// Bellman-Ford over a keyed graph, reporting each edge check.
///
/// Each check marks the source `Visited` and the target `Updating`. An
/// improvement emits the new `Distance` and `Frontier`; otherwise the target
/// reverts to `Default`. The source reverts to `Default` after the check.
/// The start node never reverts. The negative-cycle scan is silent.
pub fn bellman_ford_events<N, S>(
    graph: &Graph<N>,
    start: &N,
    counter: &mut OperationCounter,
    sink: &mut S,
) -> Result<BellmanFordOutcome<DistanceMap<N>>>
where
    N: NodeKey,
    S: EventSink<N> + ?Sized,
{
    if !graph.contains(start) {
        return Err(missing(start));
    }
    counter.start();

    let mut dist: DistanceMap<N> = graph
        .nodes()
        .iter()
        .map(|n| (n.clone(), Distance::Infinite))
        .collect();
    dist.insert(start.clone(), Distance::Finite(0));
    announce_start(graph, start, sink);

    let lookup = |dist: &DistanceMap<N>, n: &N| dist.get(n).copied().unwrap_or(Distance::Infinite);

    let mut converged = false;
    for _ in 0..graph.node_count().saturating_sub(1) {
        let mut changed = false;
        for (u, edge) in graph.edges() {
            counter.increment();
            state(sink, u, NodeState::Visited);
            state(sink, &edge.target, NodeState::Updating);

            let du = lookup(&dist, u);
            let candidate = du.through(edge.weight);
            if du.is_finite() && candidate < lookup(&dist, &edge.target) {
                dist.insert(edge.target.clone(), candidate);
                sink.emit(TraversalEvent::Distance {
                    node: edge.target.clone(),
                    distance: candidate,
                });
                state(sink, &edge.target, NodeState::Frontier);
                changed = true;
            } else if &edge.target != start {
                state(sink, &edge.target, NodeState::Default);
            }

            if u != start {
                state(sink, u, NodeState::Default);
            }
        }
        if !changed {
            converged = true;
            break;
        }
    }

    let negative_cycle = !converged
        && graph.edges().any(|(u, edge)| {
            counter.increment();
            let du = lookup(&dist, u);
            du.is_finite() && du.through(edge.weight) < lookup(&dist, &edge.target)
        });

    counter.stop();
    sink.emit(TraversalEvent::Complete(counter.metrics()));

    if negative_cycle {
        warn!(start = ?start, "negative cycle reachable from start");
        return Ok(BellmanFordOutcome::NegativeCycle);
    }
    debug!(start = ?start, steps = counter.steps(), "bellman-ford run complete");
    Ok(BellmanFordOutcome::Distances(dist))
}
