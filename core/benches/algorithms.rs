use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathviz_core::{
    bellman_ford, bfs, dfs, dijkstra, undirected, Discard, Graph, GraphGenerator, OperationCounter,
};

fn shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for n in [1_000usize, 5_000] {
        let edges = undirected(&GraphGenerator::seeded(42).generate(n).unwrap());
        group.bench_with_input(BenchmarkId::new("dijkstra", n), &edges, |b, edges| {
            let mut counter = OperationCounter::new();
            b.iter(|| dijkstra(n, black_box(edges), 0, &mut counter))
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &edges, |b, edges| {
            let mut counter = OperationCounter::new();
            b.iter(|| bellman_ford(n, black_box(edges), 0, &mut counter))
        });
    }
    group.finish();
}

fn traversals(c: &mut Criterion) {
    let n = 20_000;
    let edges = undirected(&GraphGenerator::seeded(42).generate(n).unwrap());
    let graph = Graph::from_edge_records(&edges);
    c.bench_function("bfs_20000", |b| {
        let mut counter = OperationCounter::new();
        b.iter(|| bfs(black_box(&graph), &0, &mut counter, &mut Discard))
    });
    c.bench_function("dfs_20000", |b| {
        let mut counter = OperationCounter::new();
        b.iter(|| dfs(black_box(&graph), &0, &mut counter, &mut Discard))
    });
}

fn generation(c: &mut Criterion) {
    c.bench_function("generate_10000", |b| {
        let mut generator = GraphGenerator::seeded(42);
        b.iter(|| generator.generate(black_box(10_000)))
    });
}

criterion_group!(benches, shortest_paths, traversals, generation);
criterion_main!(benches);
