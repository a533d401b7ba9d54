use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::counter::OperationCounter;
use crate::error::{GraphError, Result};
use crate::event::{EventSink, NodeState, TraversalEvent};
use crate::graph::{Graph, NodeKey};

fn emit_state<N: NodeKey, S: EventSink<N> + ?Sized>(sink: &mut S, node: &N, state: NodeState) {
    sink.emit(TraversalEvent::State {
        node: node.clone(),
        state,
    });
}

/// Breadth-first traversal from `start`, following outgoing edges.
///
/// Nodes are marked seen when enqueued, so each is dequeued once. Emits
/// `Start` for `start`, `Visited` on every dequeue and `Frontier` for each
/// newly discovered neighbor, then `Complete`.
///
/// Returns nodes in dequeue order. Unreachable nodes never appear.
/// Steps: one per dequeue, one per neighbor inspected.
pub fn bfs<N, S>(
    graph: &Graph<N>,
    start: &N,
    counter: &mut OperationCounter,
    sink: &mut S,
) -> Result<Vec<N>>
where
    N: NodeKey,
    S: EventSink<N> + ?Sized,
{
    if !graph.contains(start) {
        return Err(GraphError::NodeNotFound(format!("{:?}", start)));
    }
    counter.start();

    let mut seen: HashSet<N> = HashSet::new();
    let mut queue: VecDeque<N> = VecDeque::new();
    let mut order = Vec::new();

    seen.insert(start.clone());
    queue.push_back(start.clone());
    emit_state(sink, start, NodeState::Start);

    while let Some(current) = queue.pop_front() {
        counter.increment();
        emit_state(sink, &current, NodeState::Visited);

        for edge in graph.neighbors_out(&current) {
            counter.increment();
            if seen.insert(edge.target.clone()) {
                queue.push_back(edge.target.clone());
                emit_state(sink, &edge.target, NodeState::Frontier);
            }
        }
        order.push(current);
    }

    counter.stop();
    debug!(start = ?start, visited = order.len(), steps = counter.steps(), "bfs complete");
    sink.emit(TraversalEvent::Complete(counter.metrics()));
    Ok(order)
}

/// Depth-first pre-order traversal from `start`.
///
/// Visits exactly the order a recursive DFS would: enter a node, then
/// descend into each unvisited neighbor in listed order. Runs on an explicit
/// stack of `(node, next neighbor index)` frames, so deep graphs cannot
/// overflow the call stack. The run ends when the root frame is popped.
///
/// Emits `Start` for the root and `Visited` for every later node, then
/// `Complete`. Steps: one per node entered, one per neighbor inspected.
pub fn dfs<N, S>(
    graph: &Graph<N>,
    start: &N,
    counter: &mut OperationCounter,
    sink: &mut S,
) -> Result<Vec<N>>
where
    N: NodeKey,
    S: EventSink<N> + ?Sized,
{
    if !graph.contains(start) {
        return Err(GraphError::NodeNotFound(format!("{:?}", start)));
    }
    counter.start();

    let mut visited: HashSet<N> = HashSet::new();
    let mut order = Vec::new();

    visited.insert(start.clone());
    counter.increment();
    emit_state(sink, start, NodeState::Start);
    order.push(start.clone());

    let mut stack: Vec<(N, usize)> = vec![(start.clone(), 0)];
    while let Some((node, cursor)) = stack.last_mut() {
        let neighbors = graph.neighbors_out(node);
        if *cursor >= neighbors.len() {
            stack.pop();
            continue;
        }
        let next = &neighbors[*cursor].target;
        *cursor += 1;

        counter.increment();
        if visited.insert(next.clone()) {
            counter.increment();
            emit_state(sink, next, NodeState::Visited);
            order.push(next.clone());
            stack.push((next.clone(), 0));
        }
    }

    counter.stop();
    debug!(start = ?start, visited = order.len(), steps = counter.steps(), "dfs complete");
    sink.emit(TraversalEvent::Complete(counter.metrics()));
    Ok(order)
}
