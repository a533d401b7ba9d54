//! Console stand-in for the visualizer: runs every algorithm on the sample
//! graphs and prints each event as it arrives.

use std::fmt::Debug;

use pathviz_core::{
    bellman_ford_events, bfs, dfs, dijkstra_events, sample_graph, traversal_sample, Algorithm,
    BellmanFordOutcome, OperationCounter, Result, RunReport, TraversalEvent,
};

fn print_event<N: Debug>(event: TraversalEvent<N>) {
    match event {
        TraversalEvent::State { node, state } => println!("  {:?} -> {}", node, state),
        TraversalEvent::Distance { node, distance } => println!("  {:?} dist = {}", node, distance),
        TraversalEvent::Complete(metrics) => {
            println!("  done: {} steps in {:.4}s", metrics.steps, metrics.elapsed_secs())
        }
    }
}

fn report(algorithm: Algorithm, counter: &OperationCounter) {
    println!(
        "{}",
        RunReport {
            algorithm,
            metrics: counter.metrics(),
        }
    );
    println!();
}

pub fn run() -> Result<()> {
    let weighted = sample_graph();
    let mut counter = OperationCounter::new();

    println!("--- {} from A ---", Algorithm::Dijkstra);
    let dist = dijkstra_events(&weighted, &"A", &mut counter, &mut print_event::<&str>)?;
    for node in weighted.nodes() {
        println!("  {} = {}", node, dist[node]);
    }
    report(Algorithm::Dijkstra, &counter);

    println!("--- {} from A ---", Algorithm::BellmanFord);
    match bellman_ford_events(&weighted, &"A", &mut counter, &mut print_event::<&str>)? {
        BellmanFordOutcome::Distances(dist) => {
            for node in weighted.nodes() {
                println!("  {} = {}", node, dist[node]);
            }
        }
        BellmanFordOutcome::NegativeCycle => println!("  negative cycle detected"),
    }
    report(Algorithm::BellmanFord, &counter);

    let unweighted = traversal_sample();

    println!("--- {} from 1 ---", Algorithm::Bfs);
    let order = bfs(&unweighted, &1, &mut counter, &mut print_event::<u32>)?;
    println!("  order: {:?}", order);
    report(Algorithm::Bfs, &counter);

    println!("--- {} from 1 ---", Algorithm::Dfs);
    let order = dfs(&unweighted, &1, &mut counter, &mut print_event::<u32>)?;
    println!("  order: {:?}", order);
    report(Algorithm::Dfs, &counter);

    Ok(())
}
