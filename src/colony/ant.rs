//! Stochastic tour construction.
//!
//! One ant builds one closed walk: pick a random start, repeatedly choose
//! the next unvisited vertex with probability proportional to
//! `tau^alpha * eta^beta`, then close the cycle back to the start. A vertex
//! with no remaining candidates fails the ant; a non-finite closing edge
//! does too. Failures are expected on sparse graphs and carry no effect.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::rng::ColonyRng;

use super::pheromone::PheromoneField;
use super::AntColonyParameters;

/// One constructed tour, or a failure marker.
///
/// A completed path visits every vertex exactly once and repeats the start
/// at the end, so it holds `n + 1` indices. A failed construction is an
/// empty path with infinite length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntPath {
    /// Vertex indices along the walk, closing vertex included.
    pub path: Vec<usize>,
    /// Sum of edge weights, or `+∞` when failed.
    pub length: f64,
}

impl AntPath {
    /// The failure marker: empty path, infinite length.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            path: Vec::new(),
            length: f64::INFINITY,
        }
    }

    /// Whether this path represents a completed cycle.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Fixed per-edge preference: `1 / weight`, or 0 when no edge exists.
fn heuristic(weight: f64) -> f64 {
    if weight <= 0.0 || !weight.is_finite() {
        return 0.0;
    }
    1.0 / weight
}

/// Sum of edge weights along a walk; `+∞` if any edge is absent.
pub(crate) fn tour_length(graph: &Graph, path: &[usize]) -> f64 {
    if path.len() < 2 {
        return f64::INFINITY;
    }
    let mut length = 0.0;
    for step in path.windows(2) {
        let weight = graph.weight(step[0], step[1]);
        if !weight.is_finite() {
            return f64::INFINITY;
        }
        length += weight;
    }
    length
}

/// Construct one tour against a fixed pheromone snapshot.
///
/// Deterministic given the RNG state, graph, parameters, and snapshot. The
/// roulette scan over prefix sums uses strict `>`, so a sample landing
/// exactly on a cumulative boundary selects the earlier candidate.
pub(crate) fn construct_tour(
    rng: &mut ColonyRng,
    params: &AntColonyParameters,
    graph: &Graph,
    pheromone: &PheromoneField,
) -> AntPath {
    let n = graph.vertex_count();
    if n == 0 {
        return AntPath::failed();
    }

    let start = rng.gen_index(n);
    let mut visited = vec![false; n];
    visited[start] = true;
    let mut path = Vec::with_capacity(n + 1);
    path.push(start);
    let mut current = start;

    let mut candidates: Vec<usize> = Vec::with_capacity(n);
    let mut values: Vec<f64> = Vec::with_capacity(n);
    for _ in 1..n {
        candidates.clear();
        values.clear();
        let mut sum = 0.0;
        for next in 0..n {
            if visited[next] {
                continue;
            }
            let tau = pheromone.level(current, next).powf(params.alpha);
            let eta = heuristic(graph.weight(current, next)).powf(params.beta);
            let value = tau * eta;
            if value <= 0.0 {
                continue;
            }
            candidates.push(next);
            values.push(value);
            sum += value;
        }
        if candidates.is_empty() {
            return AntPath::failed();
        }

        let choice = rng.gen_range_f64(0.0, sum);
        let mut index = 0;
        let mut cumulative = values[0];
        while choice > cumulative && index + 1 < values.len() {
            index += 1;
            cumulative += values[index];
        }

        current = candidates[index];
        visited[current] = true;
        path.push(current);
    }

    path.push(start);
    let length = tour_length(graph, &path);
    if !length.is_finite() {
        return AntPath::failed();
    }
    AntPath { path, length }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn complete_graph(n: usize) -> Graph {
        let mut text = String::new();
        for from in 0..n {
            for to in 0..n {
                if from != to {
                    text.push_str(&format!(
                        "n{from} -> n{to} [weight={}];\n",
                        1 + (from + to) % 5
                    ));
                }
            }
        }
        Graph::from_dot_str(&text)
    }

    pub(super) fn is_hamiltonian(path: &[usize], n: usize) -> bool {
        if path.len() != n + 1 || path.first() != path.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &vertex in &path[..n] {
            if seen[vertex] {
                return false;
            }
            seen[vertex] = true;
        }
        seen.iter().all(|&s| s)
    }

    #[test]
    fn test_heuristic() {
        assert!((heuristic(2.0) - 0.5).abs() < 1e-12);
        assert!((heuristic(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((heuristic(-3.0) - 0.0).abs() < f64::EPSILON);
        assert!((heuristic(f64::INFINITY) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tour_length_sums_edges() {
        let graph = Graph::from_dot_str(
            "A -> B [weight=1];\nB -> C [weight=2];\nC -> A [weight=5];",
        );
        assert!((tour_length(&graph, &[0, 1, 2, 0]) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_missing_edge_is_infinite() {
        let graph = Graph::from_dot_str("A -> B [weight=1];\nB -> C [weight=2];");
        assert!(tour_length(&graph, &[0, 1, 2, 0]).is_infinite());
        assert!(tour_length(&graph, &[0]).is_infinite());
    }

    #[test]
    fn test_construct_tour_is_hamiltonian() {
        let graph = complete_graph(6);
        let pheromone = PheromoneField::new(6);
        let params = AntColonyParameters::default();
        let mut rng = ColonyRng::new(42);

        for _ in 0..50 {
            let path = construct_tour(&mut rng, &params, &graph, &pheromone);
            assert!(path.is_complete());
            assert!(is_hamiltonian(&path.path, 6));
            assert!((path.length - tour_length(&graph, &path.path)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_construct_tour_deterministic() {
        let graph = complete_graph(5);
        let pheromone = PheromoneField::new(5);
        let params = AntColonyParameters::default();

        let mut rng1 = ColonyRng::new(7);
        let mut rng2 = ColonyRng::new(7);
        let path1 = construct_tour(&mut rng1, &params, &graph, &pheromone);
        let path2 = construct_tour(&mut rng2, &params, &graph, &pheromone);
        assert_eq!(path1, path2);
    }

    #[test]
    fn test_construct_tour_fails_without_candidates() {
        // B is a dead end, so every walk eventually fails.
        let graph = Graph::from_dot_str("A -> B [weight=1];\nC -> A [weight=1];");
        let pheromone = PheromoneField::new(3);
        let params = AntColonyParameters::default();
        let mut rng = ColonyRng::new(42);

        for _ in 0..20 {
            let path = construct_tour(&mut rng, &params, &graph, &pheromone);
            assert!(!path.is_complete());
            assert!(path.length.is_infinite());
        }
    }

    #[test]
    fn test_construct_tour_empty_graph() {
        let graph = Graph::default();
        let pheromone = PheromoneField::new(0);
        let params = AntColonyParameters::default();
        let mut rng = ColonyRng::new(42);
        let path = construct_tour(&mut rng, &params, &graph, &pheromone);
        assert!(!path.is_complete());
    }

    /// Mutation test: a zero-beta run must still refuse absent edges at
    /// closure (eta^0 == 1 hides them during selection).
    #[test]
    fn test_zero_beta_still_fails_on_missing_closing_edge() {
        // Chain without the closing edge: C -> A is missing.
        let graph = Graph::from_dot_str(
            "A -> B [weight=1];\nB -> C [weight=1];\nC -> B [weight=1];",
        );
        let pheromone = PheromoneField::new(3);
        let params = AntColonyParameters {
            beta: 0.0,
            ..AntColonyParameters::default()
        };
        let mut rng = ColonyRng::new(42);
        for _ in 0..30 {
            let path = construct_tour(&mut rng, &params, &graph, &pheromone);
            assert!(!path.is_complete());
        }
    }
}
