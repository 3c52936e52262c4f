//! CLI output formatting.

use crate::colony::{AntColonyParameters, TourResult};
use crate::graph::Graph;

/// Print version information.
pub fn print_version() {
    println!("hormiga {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"hormiga - Parallel ant colony optimization for shortest Hamiltonian cycles

USAGE:
    hormiga [--key=value ...]

OPTIONS:
    --graph=PATH          Graph description file          [default: data/sample.dot]
    --config=PATH         YAML file with parameter defaults
    --ants=N              Ants per iteration              [default: 128]
    --iterations=N        Iteration count                 [default: 150]
    --threads=N           Worker threads for the parallel run
                          [default: available parallelism]
    --seed=N              Master seed                     [default: 42]
    --only-seq            Run only the sequential variant
    --only-par            Run only the parallel variant
    --print-paths=BOOL    Print the tied optimal routes   [default: true]
    -h, --help            Show this help
    -V, --version         Show version information

EXAMPLES:
    hormiga --graph=routes.dot --ants=64 --iterations=200
    hormiga --graph=routes.dot --only-par --threads=8
    hormiga --config=colony.yaml --seed=2024
"
    );
}

/// Print the run header: graph size and effective settings.
pub fn print_run_header(graph: &Graph, params: &AntColonyParameters, threads: usize) {
    println!("Graph vertices: {}", graph.vertex_count());
    println!(
        "Settings: ants={}, iterations={}, threads={}, seed={}",
        params.ants, params.iterations, threads, params.seed
    );
    println!();
}

/// Print one variant's result.
pub fn print_result(title: &str, result: &TourResult, graph: &Graph, print_paths: bool) {
    println!("== {title} ==");
    if !result.has_tour() {
        println!("No feasible tour was constructed.");
        println!();
        return;
    }
    println!("Best tour length: {:.3}", result.best_length);
    println!("Routes at the optimum: {}", result.best_paths.len());
    println!("Elapsed: {:.2} ms", result.elapsed_ms);
    if print_paths {
        for (index, path) in result.best_paths.iter().enumerate() {
            let route = path
                .iter()
                .map(|&vertex| graph.label(vertex))
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("Route {}: {route}", index + 1);
        }
    }
    println!();
}
