//! Best-tour tracking with canonical deduplication.
//!
//! Floating-point lengths of the same integer-weighted cycle can differ by
//! rounding, so lengths within `LENGTH_EPS` of the current best count as
//! ties. Ties are deduplicated by the canonical label key, which is a pure
//! function of the cycle's rotation-and-reflection class.

use crate::graph::Graph;

use super::ant::AntPath;

/// Tolerance under which two tour lengths count as equal.
pub(crate) const LENGTH_EPS: f64 = 1e-9;

fn near_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= LENGTH_EPS
}

/// Join a path's labels into its deduplication key, e.g. `A->B->C->A`.
fn label_key(graph: &Graph, path: &[usize]) -> String {
    let mut key = String::new();
    for &vertex in path {
        if !key.is_empty() {
            key.push_str("->");
        }
        key.push_str(graph.label(vertex));
    }
    key
}

/// The set of canonically-distinct tours tied at the best length seen.
#[derive(Debug, Clone)]
pub struct BestTracker {
    best_length: f64,
    paths: Vec<Vec<usize>>,
    labels: Vec<String>,
}

impl Default for BestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BestTracker {
    /// Create an empty tracker (`best_length == +∞`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            best_length: f64::INFINITY,
            paths: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Feed one candidate into the tracker.
    ///
    /// Strict improvements replace the tie set; near-equal lengths join it
    /// unless an equivalent cycle is already present; everything else is
    /// discarded. Stored paths are always canonical.
    pub fn offer(&mut self, candidate: &AntPath, graph: &Graph) {
        if !candidate.is_complete() || !candidate.length.is_finite() {
            return;
        }
        let canonical = graph.canonicalize_tour(&candidate.path);
        let key = label_key(graph, &canonical);
        if self.paths.is_empty() || candidate.length + LENGTH_EPS < self.best_length {
            self.best_length = candidate.length;
            self.paths.clear();
            self.labels.clear();
            self.paths.push(canonical);
            self.labels.push(key);
        } else if near_equal(candidate.length, self.best_length)
            && !self.labels.contains(&key)
        {
            self.paths.push(canonical);
            self.labels.push(key);
        }
    }

    /// Best tour length seen so far, `+∞` when none.
    #[must_use]
    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    /// Canonical tours tied at the best length.
    #[must_use]
    pub fn paths(&self) -> &[Vec<usize>] {
        &self.paths
    }

    /// Label keys of the tied tours, parallel to [`Self::paths`].
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub(crate) fn into_parts(self) -> (f64, Vec<Vec<usize>>, Vec<String>) {
        (self.best_length, self.paths, self.labels)
    }
}

/// Per-worker staging set: candidates survive by the same epsilon rules,
/// but canonicalization and deduplication are deferred to the merge into
/// the shared tracker.
#[derive(Debug)]
pub(crate) struct BestStage {
    best_length: f64,
    paths: Vec<AntPath>,
}

impl BestStage {
    pub(crate) fn new() -> Self {
        Self {
            best_length: f64::INFINITY,
            paths: Vec::new(),
        }
    }

    pub(crate) fn offer(&mut self, candidate: &AntPath) {
        if !candidate.is_complete() || !candidate.length.is_finite() {
            return;
        }
        if candidate.length + LENGTH_EPS < self.best_length {
            self.best_length = candidate.length;
            self.paths.clear();
            self.paths.push(candidate.clone());
        } else if near_equal(candidate.length, self.best_length) {
            self.paths.push(candidate.clone());
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub(crate) fn into_paths(self) -> Vec<AntPath> {
        self.paths
    }
}
