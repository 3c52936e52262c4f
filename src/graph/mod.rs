//! Dense weighted directed graph with string-labelled vertices.
//!
//! The graph is built once during ingestion and stays read-only for the
//! lifetime of a solver. Vertex indices are assigned in sorted label order,
//! so the same input text always produces the same indexing.

mod parse;

pub mod generate;

use std::collections::HashMap;

/// Immutable weighted directed graph.
///
/// `weight(i, j)` is `0.0` on the diagonal, a finite positive value where an
/// edge exists, and `+∞` where none does. The diagonal is never traversed;
/// a Hamiltonian tour only revisits a vertex at closure.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex labels in index order (sorted at ingestion).
    labels: Vec<String>,
    /// Reverse lookup from label to index.
    index_by_label: HashMap<String, usize>,
    /// Dense adjacency matrix.
    adjacency: Vec<Vec<f64>>,
}

impl Graph {
    /// Marker weight for an absent edge.
    pub const NO_EDGE: f64 = f64::INFINITY;

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Weight of the directed edge `from -> to`, or `+∞` if absent.
    #[must_use]
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.adjacency[from][to]
    }

    /// Label of the vertex at `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Index of the vertex carrying `label`, if present.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index_by_label.get(label).copied()
    }

    /// Reduce a closed cycle to the canonical representative of its
    /// rotation-and-reflection equivalence class.
    ///
    /// Two tours that differ only in starting vertex or direction describe
    /// the same cycle; both map to the candidate whose label-joined key is
    /// lexicographically smallest among all `2n` rotations and reflections.
    /// Inputs of length 0 or 1 are returned unchanged.
    #[must_use]
    pub fn canonicalize_tour(&self, tour: &[usize]) -> Vec<usize> {
        if tour.len() <= 1 {
            return tour.to_vec();
        }
        let mut cycle = tour.to_vec();
        if cycle.first() == cycle.last() {
            cycle.pop();
        }
        if cycle.is_empty() {
            return tour.to_vec();
        }
        let n = cycle.len();

        // The '>' separator cannot appear in labels, so joined keys compare
        // the same way the label sequences do.
        let build_key = |start: usize, reverse: bool| -> String {
            let mut key = String::with_capacity(n * 4);
            for offset in 0..n {
                let position = if reverse {
                    (start + n - offset) % n
                } else {
                    (start + offset) % n
                };
                if !key.is_empty() {
                    key.push('>');
                }
                key.push_str(self.label(cycle[position]));
            }
            key
        };

        let mut best_shift = 0;
        let mut best_reverse = false;
        let mut best_key = build_key(0, false);
        for shift in 0..n {
            let forward_key = build_key(shift, false);
            if forward_key < best_key {
                best_key = forward_key;
                best_shift = shift;
                best_reverse = false;
            }
            let reverse_key = build_key(shift, true);
            if reverse_key < best_key {
                best_key = reverse_key;
                best_shift = shift;
                best_reverse = true;
            }
        }

        let mut result = Vec::with_capacity(n + 1);
        for offset in 0..n {
            let position = if best_reverse {
                (best_shift + n - offset) % n
            } else {
                (best_shift + offset) % n
            };
            result.push(cycle[position]);
        }
        if let Some(&front) = result.first() {
            result.push(front);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring4() -> Graph {
        Graph::from_dot_str(
            "A -- B [weight=1];\n\
             B -- C [weight=1];\n\
             C -- D [weight=1];\n\
             D -- A [weight=1];",
        )
    }

    #[test]
    fn test_lookups() {
        let graph = ring4();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.label(0), "A");
        assert_eq!(graph.index_of("D"), Some(3));
        assert_eq!(graph.index_of("Z"), None);
        assert!((graph.weight(0, 1) - 1.0).abs() < 1e-12);
        assert!(graph.weight(0, 2).is_infinite());
        assert!((graph.weight(2, 2) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_canonicalize_rotations_and_reflections_collapse() {
        let graph = ring4();
        let canonical = graph.canonicalize_tour(&[0, 1, 2, 3, 0]);
        assert_eq!(canonical, graph.canonicalize_tour(&[2, 3, 0, 1, 2]));
        assert_eq!(canonical, graph.canonicalize_tour(&[0, 3, 2, 1, 0]));
        assert_eq!(canonical, graph.canonicalize_tour(&[3, 2, 1, 0, 3]));
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let graph = ring4();
        let once = graph.canonicalize_tour(&[2, 1, 0, 3, 2]);
        let twice = graph.canonicalize_tour(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_canonicalize_is_closed_cycle_starting_smallest() {
        let graph = ring4();
        let canonical = graph.canonicalize_tour(&[2, 3, 0, 1, 2]);
        assert_eq!(canonical.len(), 5);
        assert_eq!(canonical.first(), canonical.last());
        // "A" sorts first, so the canonical key starts there.
        assert_eq!(canonical[0], 0);
    }

    #[test]
    fn test_canonicalize_degenerate_inputs() {
        let graph = ring4();
        assert!(graph.canonicalize_tour(&[]).is_empty());
        assert_eq!(graph.canonicalize_tour(&[2]), vec![2]);
        // A two-entry closed walk strips to a single vertex.
        assert_eq!(graph.canonicalize_tour(&[1, 1]), vec![1, 1]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::default();
        assert_eq!(graph.vertex_count(), 0);
    }
}
