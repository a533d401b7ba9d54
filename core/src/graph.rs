use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Edge weight. Signed so Bellman-Ford can carry negative weights.
pub type Weight = i64;

/// Anything usable as a node identifier in the keyed engine.
///
/// Blanket-implemented: integers, `&'static str` and `String` all qualify.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> NodeKey for T {}

/// A directed, weighted edge in the adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N> {
    pub target: N,
    pub weight: Weight,
}

/// One row of an index-based edge list: `from → to` with `weight`.
///
/// This is the generator's output format and the input of the
/// index-form Dijkstra and Bellman-Ford.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// The same edge pointing the other way.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

/// In-memory directed graph keyed by `N`.
///
/// Nodes keep insertion order and each node's outgoing edges keep the order
/// they were added in, so traversal event sequences are deterministic.
/// Adding an edge registers both endpoints, so every neighbor referenced by
/// an edge is a node of the graph.
///
/// Unweighted adjacency lists (BFS/DFS input) are graphs whose edges carry
/// unit weight; the traversals never look at weights.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeKey> {
    order: Vec<N>,
    members: HashSet<N>,
    outgoing: HashMap<N, Vec<Edge<N>>>,
}

impl<N: NodeKey> Graph<N> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
            outgoing: HashMap::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            order: Vec::with_capacity(node_count),
            members: HashSet::with_capacity(node_count),
            outgoing: HashMap::with_capacity(node_count),
        }
    }

    /// Build an unweighted graph from `node → [neighbors]` rows.
    pub fn from_adjacency<I, A>(rows: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in rows {
            graph.add_node(node.clone());
            for neighbor in neighbors {
                graph.add_edge(node.clone(), neighbor, 1);
            }
        }
        graph
    }

    /// Build a weighted graph from `node → [(neighbor, weight)]` rows.
    pub fn from_weighted<I, A>(rows: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = (N, Weight)>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in rows {
            graph.add_node(node.clone());
            for (neighbor, weight) in neighbors {
                graph.add_edge(node.clone(), neighbor, weight);
            }
        }
        graph
    }

    /// Register a node. Re-adding an existing node is a no-op.
    pub fn add_node(&mut self, id: N) {
        if self.members.insert(id.clone()) {
            self.order.push(id);
        }
    }

    /// Add a directed edge, registering both endpoints.
    pub fn add_edge(&mut self, from: N, to: N, weight: Weight) {
        self.add_node(from.clone());
        self.add_node(to.clone());
        self.outgoing
            .entry(from)
            .or_default()
            .push(Edge { target: to, weight });
    }

    pub fn contains(&self, id: &N) -> bool {
        self.members.contains(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    /// Get outgoing edges for a node, in insertion order.
    pub fn neighbors_out(&self, id: &N) -> &[Edge<N>] {
        self.outgoing.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Every edge as `(from, edge)`, grouped by source in node order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &Edge<N>)> {
        self.order
            .iter()
            .flat_map(move |node| self.neighbors_out(node).iter().map(move |e| (node, e)))
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(|v| v.len()).sum()
    }
}

impl Graph<usize> {
    /// Load an index-based edge list. Isolated indices below the largest
    /// referenced one are not registered.
    pub fn from_edge_records(edges: &[EdgeRecord]) -> Self {
        let mut graph = Self::with_capacity(edges.len());
        for e in edges {
            graph.add_edge(e.from, e.to, e.weight);
        }
        graph
    }

    /// Load an edge list over nodes `0..node_count`, registering every index
    /// in order first so isolated nodes (and a one-node graph) are present.
    /// Indices past `node_count` named by edges are added as they appear.
    pub fn from_edge_records_sized(node_count: usize, edges: &[EdgeRecord]) -> Self {
        let mut graph = Self::with_capacity(node_count);
        for id in 0..node_count {
            graph.add_node(id);
        }
        for e in edges {
            graph.add_edge(e.from, e.to, e.weight);
        }
        graph
    }
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// The weighted demo graph: `A:{B:1,C:4}, B:{C:2,D:5}, C:{D:1}, D:{}`.
pub fn sample_graph() -> Graph<&'static str> {
    Graph::from_weighted([
        ("A", vec![("B", 1), ("C", 4)]),
        ("B", vec![("C", 2), ("D", 5)]),
        ("C", vec![("D", 1)]),
        ("D", vec![]),
    ])
}

/// Nine-node directed adjacency list used to check traversal order.
pub fn traversal_sample() -> Graph<u32> {
    Graph::from_adjacency([
        (1, vec![2, 4]),
        (2, vec![3, 4]),
        (3, vec![5]),
        (4, vec![6, 3]),
        (5, vec![6, 9]),
        (6, vec![7]),
        (7, vec![9]),
        (8, vec![1]),
        (9, vec![8]),
    ])
}
