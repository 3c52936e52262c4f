//! Solver benchmarks with confidence intervals.
//!
//! Measures tour-construction throughput for the sequential and parallel
//! variants over generated sparse graphs.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hormiga::colony::{AntColonyParameters, AntColonySolver};
use hormiga::graph::generate::generate_dot;
use hormiga::graph::Graph;

fn bench_params() -> AntColonyParameters {
    AntColonyParameters {
        ants: 32,
        iterations: 5,
        ..AntColonyParameters::default()
    }
}

fn generated_graph(vertices: usize) -> Graph {
    let text = generate_dot(vertices, 42, 8).unwrap_or_default();
    Graph::from_dot_str(&text)
}

/// Sequential iteration cost across graph sizes.
fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("ACO_sequential");
    group.sample_size(30);
    group.confidence_level(0.95);

    for n in [50, 100, 200].iter() {
        let graph = generated_graph(*n);
        let solver = AntColonySolver::new(&graph);
        let params = bench_params();
        group.bench_with_input(BenchmarkId::new("run", n), n, |b, _| {
            b.iter(|| black_box(solver.run_sequential(&params)).best_length);
        });
    }

    group.finish();
}

/// Parallel iteration cost across worker counts on one graph size.
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("ACO_parallel");
    group.sample_size(30);
    group.confidence_level(0.95);

    let graph = generated_graph(100);
    let solver = AntColonySolver::new(&graph);
    let params = bench_params();

    for threads in [1, 2, 4].iter() {
        group.bench_with_input(BenchmarkId::new("workers", threads), threads, |b, &t| {
            b.iter(|| black_box(solver.run_parallel(&params, t)).best_length);
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
