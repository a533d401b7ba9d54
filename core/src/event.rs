use std::fmt;

use crate::counter::RunMetrics;
use crate::graph::Weight;

/// Visual state of a node during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeState {
    Start,
    Visited,
    Frontier,
    /// Edge into this node is being checked.
    Updating,
    Default,
}

impl NodeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeState::Start => "start",
            NodeState::Visited => "visited",
            NodeState::Frontier => "frontier",
            NodeState::Updating => "updating",
            NodeState::Default => "default",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best known distance from the source.
///
/// Variant order matters: every `Finite` value sorts below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }

    /// Distance after following an edge of `weight`. Infinity absorbs.
    pub fn through(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl From<Weight> for Distance {
    fn from(d: Weight) -> Self {
        Distance::Finite(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

/// One step reported by an algorithm to its sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent<N> {
    State { node: N, state: NodeState },
    Distance { node: N, distance: Distance },
    Complete(RunMetrics),
}

/// Consumer of traversal events.
///
/// Events arrive synchronously, in production order. Closures taking a
/// `TraversalEvent<N>` are sinks.
pub trait EventSink<N> {
    fn emit(&mut self, event: TraversalEvent<N>);
}

impl<N, F> EventSink<N> for F
where
    F: FnMut(TraversalEvent<N>),
{
    fn emit(&mut self, event: TraversalEvent<N>) {
        self(event)
    }
}

/// Sink that keeps every event in order.
#[derive(Debug, Clone)]
pub struct EventLog<N> {
    events: Vec<TraversalEvent<N>>,
}

impl<N> EventLog<N> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[TraversalEvent<N>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraversalEvent<N>> {
        self.events
    }

    /// Only the state changes, as `(node, state)` pairs.
    pub fn states(&self) -> Vec<(&N, NodeState)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::State { node, state } => Some((node, *state)),
                _ => None,
            })
            .collect()
    }

    /// The run-complete metrics, if the run finished.
    pub fn completion(&self) -> Option<RunMetrics> {
        self.events.iter().rev().find_map(|e| match e {
            TraversalEvent::Complete(m) => Some(*m),
            _ => None,
        })
    }
}

impl<N> Default for EventLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> EventSink<N> for EventLog<N> {
    fn emit(&mut self, event: TraversalEvent<N>) {
        self.events.push(event);
    }
}

/// Sink that drops everything; for batch runs that only want results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl<N> EventSink<N> for Discard {
    fn emit(&mut self, _event: TraversalEvent<N>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(i64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(-3) < Distance::Finite(2));
        assert_eq!(Distance::Infinite.through(-100), Distance::Infinite);
        assert_eq!(Distance::Finite(4).through(-6), Distance::Finite(-2));
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::Finite(7).to_string(), "7");
        assert_eq!(Distance::Infinite.to_string(), "inf");
    }

    #[test]
    fn test_closure_is_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |e: TraversalEvent<u8>| seen.push(e);
            sink.emit(TraversalEvent::State {
                node: 1,
                state: NodeState::Start,
            });
        }
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_event_log_filters() {
        let mut log = EventLog::new();
        log.emit(TraversalEvent::Distance {
            node: 'a',
            distance: Distance::Finite(0),
        });
        log.emit(TraversalEvent::State {
            node: 'a',
            state: NodeState::Visited,
        });
        log.emit(TraversalEvent::Complete(RunMetrics::default()));
        assert_eq!(log.states(), vec![(&'a', NodeState::Visited)]);
        assert_eq!(log.completion(), Some(RunMetrics::default()));
        assert_eq!(log.into_events().len(), 3);
    }
}
