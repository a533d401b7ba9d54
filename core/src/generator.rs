//! Random weighted graphs with guaranteed connectivity.
//!
//! Output is an index-based edge list made of two parts:
//!
//! 1. A spanning structure: every node `i` in `1..n` links back to a random
//!    node `floor(r * i)` strictly below it, so every node reaches node 0.
//! 2. Between `n/2` and `n - 1` extra uniformly random edges, with
//!    self-loops discarded.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{EdgeRecord, Weight};

/// Smallest generated edge weight.
pub const MIN_WEIGHT: Weight = 1;
/// Largest generated edge weight.
pub const MAX_WEIGHT: Weight = 19;

/// Edge-list generator over an injectable random source.
pub struct GraphGenerator<R> {
    rng: R,
}

impl GraphGenerator<ChaCha8Rng> {
    /// Fresh entropy each time: consecutive generators produce different graphs.
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for GraphGenerator<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GraphGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate the edge list for `node_count` nodes.
    ///
    /// The first `node_count - 1` records are the spanning edges, in source
    /// order `1, 2, ...`; the rest are the extra edges.
    pub fn generate(&mut self, node_count: usize) -> Result<Vec<EdgeRecord>> {
        if node_count == 0 {
            return Err(GraphError::InvalidNodeCount(node_count));
        }

        let n = node_count;
        let extra_count = self.rng.random_range(n / 2..n);
        let mut edges = Vec::with_capacity(n - 1 + extra_count);

        for source in 1..n {
            let r: f64 = self.rng.random();
            // r < 1 so the floor is below `source`; the min guards float rounding.
            let target = ((r * source as f64) as usize).min(source - 1);
            edges.push(EdgeRecord::new(source, target, self.weight()));
        }

        let mut self_loops = 0usize;
        for _ in 0..extra_count {
            let from = self.rng.random_range(0..n);
            let to = self.rng.random_range(0..n);
            let weight = self.weight();
            if from == to {
                self_loops += 1;
                continue;
            }
            edges.push(EdgeRecord::new(from, to, weight));
        }

        debug!(
            node_count = n,
            spanning = n - 1,
            extra = extra_count - self_loops,
            self_loops,
            "generated graph"
        );
        Ok(edges)
    }

    fn weight(&mut self) -> Weight {
        self.rng.random_range(MIN_WEIGHT..=MAX_WEIGHT)
    }
}

/// Duplicate every edge in both directions.
pub fn undirected(edges: &[EdgeRecord]) -> Vec<EdgeRecord> {
    let mut out = Vec::with_capacity(edges.len() * 2);
    for &e in edges {
        out.push(e);
        out.push(e.reversed());
    }
    out
}

/// `max(declared, largest index referenced + 1)`.
///
/// Every distance array is sized with this so that an edge list naming a
/// node beyond the declared count never indexes out of bounds.
pub fn effective_node_count(declared: usize, edges: &[EdgeRecord]) -> usize {
    edges
        .iter()
        .map(|e| e.from.max(e.to) + 1)
        .fold(declared, usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reaches_zero_via_spanning(edges: &[EdgeRecord], n: usize) -> bool {
        // Spanning edges point strictly backwards, so walking parents ends at 0.
        let mut parent = vec![usize::MAX; n];
        for e in &edges[..n - 1] {
            parent[e.from] = e.to;
        }
        (1..n).all(|mut node| {
            let mut hops = 0;
            while node != 0 && hops <= n {
                node = parent[node];
                hops += 1;
            }
            node == 0
        })
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let mut g = GraphGenerator::seeded(1);
        assert_eq!(g.generate(0), Err(GraphError::InvalidNodeCount(0)));
    }

    #[test]
    fn test_single_node_has_no_edges() {
        let mut g = GraphGenerator::seeded(1);
        assert!(g.generate(1).unwrap().is_empty());
    }

    #[test]
    fn test_two_nodes() {
        let mut g = GraphGenerator::seeded(3);
        let edges = g.generate(2).unwrap();
        assert_eq!(edges[0].from, 1);
        assert_eq!(edges[0].to, 0);
        // One extra slot at most, and it is dropped if it is a self-loop.
        assert!(edges.len() <= 2);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = GraphGenerator::seeded(99).generate(500).unwrap();
        let b = GraphGenerator::seeded(99).generate(500).unwrap();
        let c = GraphGenerator::seeded(100).generate(500).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_with_custom_rng() {
        let mut g = GraphGenerator::with_rng(rand::rngs::StdRng::seed_from_u64(5));
        let edges = g.generate(64).unwrap();
        assert!(edges.len() >= 63);
    }

    #[test]
    fn test_undirected_doubles() {
        let edges = vec![EdgeRecord::new(0, 1, 3), EdgeRecord::new(2, 1, 4)];
        let both = undirected(&edges);
        assert_eq!(
            both,
            vec![
                EdgeRecord::new(0, 1, 3),
                EdgeRecord::new(1, 0, 3),
                EdgeRecord::new(2, 1, 4),
                EdgeRecord::new(1, 2, 4),
            ]
        );
    }

    #[test]
    fn test_effective_node_count_widens() {
        let edges = vec![EdgeRecord::new(0, 7, 1)];
        assert_eq!(effective_node_count(3, &edges), 8);
        assert_eq!(effective_node_count(20, &edges), 20);
        assert_eq!(effective_node_count(5, &[]), 5);
    }

    proptest! {
        #[test]
        fn prop_generator_shape(n in 2usize..400, seed in any::<u64>()) {
            let edges = GraphGenerator::seeded(seed).generate(n).unwrap();
            let spanning = &edges[..n - 1];
            let extra = &edges[n - 1..];

            for (i, e) in spanning.iter().enumerate() {
                prop_assert_eq!(e.from, i + 1);
                prop_assert!(e.to < e.from);
            }
            prop_assert!(extra.len() <= n - 1);
            for e in &edges {
                prop_assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&e.weight));
                prop_assert!(e.from < n && e.to < n);
            }
            for e in extra {
                prop_assert_ne!(e.from, e.to);
            }
            prop_assert!(reaches_zero_via_spanning(&edges, n));
        }
    }
}
