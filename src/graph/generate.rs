//! Synthetic graph generation for benchmarking.
//!
//! Produces sparse directed graphs in the same Graphviz-like text format
//! the ingestion path consumes. Every generated graph contains the ring
//! `v0 -> v1 -> ... -> v0`, so at least one Hamiltonian cycle always exists.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::{ColonyError, ColonyResult};
use crate::rng::ColonyRng;

/// Generate Graphviz-like text for a random sparse digraph.
///
/// Each vertex receives the guaranteed ring edge plus extra random
/// out-edges up to a per-vertex target drawn from `1 + uniform[0,
/// max_out_degree)`, capped at both `max_out_degree` and `vertices - 1`.
/// Weights are uniform in `[1, 100)`. Output is deterministic in
/// `(vertices, seed, max_out_degree)`.
///
/// # Errors
///
/// Returns a configuration error when `vertices < 2`.
pub fn generate_dot(
    vertices: usize,
    seed: u32,
    max_out_degree: usize,
) -> ColonyResult<String> {
    if vertices < 2 {
        return Err(ColonyError::config(
            "graph generation requires at least two vertices",
        ));
    }
    let max_out_degree = max_out_degree.max(1);
    let mut rng = ColonyRng::new(u64::from(seed));

    let mut adjacency: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); vertices];

    // Ring first, so a Hamiltonian cycle is always present.
    for from in 0..vertices {
        let to = (from + 1) % vertices;
        let weight = rng.gen_range_f64(1.0, 100.0);
        adjacency[from].insert(to, weight);
    }

    for from in 0..vertices {
        let mut desired = 1;
        if max_out_degree > 1 {
            desired += rng.gen_index(max_out_degree);
            desired = desired.min(max_out_degree);
        }
        // An out-degree beyond n-1 is unsatisfiable without self-loops.
        desired = desired.min(vertices - 1);
        while adjacency[from].len() < desired {
            let candidate = rng.gen_index(vertices);
            if candidate == from || adjacency[from].contains_key(&candidate) {
                continue;
            }
            let weight = rng.gen_range_f64(1.0, 100.0);
            adjacency[from].insert(candidate, weight);
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "digraph G {{");
    for vertex in 0..vertices {
        let _ = writeln!(out, "  v{vertex};");
    }
    for (from, targets) in adjacency.iter().enumerate() {
        for (to, weight) in targets {
            let _ = writeln!(out, "  v{from} -> v{to} [weight={weight:.6}];");
        }
    }
    let _ = writeln!(out, "}}");
    Ok(out)
}
