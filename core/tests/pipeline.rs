use pathviz_core::{
    bellman_ford, bfs, dfs, dijkstra, undirected, BellmanFordOutcome, Discard, Distance,
    GraphGenerator, Graph, OperationCounter,
};

#[test]
fn test_generated_graph_engines_agree() {
    let n = 2_000;
    let edges = undirected(&GraphGenerator::seeded(2024).generate(n).unwrap());

    let mut counter = OperationCounter::new();
    let d = dijkstra(n, &edges, 0, &mut counter).unwrap();
    let dijkstra_steps = counter.steps();
    let b = bellman_ford(n, &edges, 0, &mut counter).unwrap();

    assert!(dijkstra_steps > 0);
    assert!(counter.steps() > 0);
    assert_eq!(b, BellmanFordOutcome::Distances(d.clone()));
    // Spanning edges made undirected connect every node to 0.
    assert!(d.iter().all(Distance::is_finite));
}

#[test]
fn test_generated_graph_fully_traversed() {
    let n = 500;
    let edges = undirected(&GraphGenerator::seeded(7).generate(n).unwrap());
    let graph = Graph::from_edge_records(&edges);

    let mut counter = OperationCounter::new();
    let by_bfs = bfs(&graph, &0, &mut counter, &mut Discard).unwrap();
    let by_dfs = dfs(&graph, &0, &mut counter, &mut Discard).unwrap();
    assert_eq!(by_bfs.len(), n);
    assert_eq!(by_dfs.len(), n);
    assert_eq!(by_bfs[0], 0);
    assert_eq!(by_dfs[0], 0);
}

#[test]
fn test_separate_counters_do_not_mix() {
    let edges = undirected(&GraphGenerator::seeded(1).generate(100).unwrap());
    let mut first = OperationCounter::new();
    let mut second = OperationCounter::new();
    dijkstra(100, &edges, 0, &mut first).unwrap();
    let before = first.steps();
    bellman_ford(100, &edges, 0, &mut second).unwrap();
    assert_eq!(first.steps(), before);
}

#[test]
fn test_one_node_generated_graph_traverses() {
    let edges = undirected(&GraphGenerator::seeded(3).generate(1).unwrap());
    assert!(edges.is_empty());
    let graph = Graph::from_edge_records_sized(1, &edges);

    let mut counter = OperationCounter::new();
    assert_eq!(bfs(&graph, &0, &mut counter, &mut Discard).unwrap(), vec![0]);
    assert_eq!(dfs(&graph, &0, &mut counter, &mut Discard).unwrap(), vec![0]);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_sized_graph_counts_every_generated_node() {
    let n = 300;
    let edges = undirected(&GraphGenerator::seeded(11).generate(n).unwrap());
    let graph = Graph::from_edge_records_sized(n, &edges);
    assert_eq!(graph.node_count(), n);
    assert_eq!(graph.nodes()[..3], [0, 1, 2]);
}
