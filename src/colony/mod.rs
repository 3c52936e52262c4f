//! Ant colony solver: iteration loop, worker fan-out, result assembly.
//!
//! Each iteration runs every ant against the pheromone snapshot taken at
//! iteration start, accumulates deposits into a delta matrix, then applies
//! evaporation and the summed delta in one serial step. Parallel mode
//! shards the ants across scoped worker threads with private deltas and
//! private random streams, so results are reproducible for a fixed worker
//! count.

pub mod ant;
pub mod best;
pub mod pheromone;

use std::sync::Mutex;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::rng::ColonyRng;

pub use ant::AntPath;
pub use best::BestTracker;
pub use pheromone::{DeltaMatrix, PheromoneField};

use best::BestStage;

/// Tunable parameters of one solver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntColonyParameters {
    /// Ants per iteration.
    pub ants: usize,
    /// Iteration count.
    pub iterations: usize,
    /// Pheromone exponent (exploitation of learned preference).
    pub alpha: f64,
    /// Heuristic exponent (exploitation of short edges).
    pub beta: f64,
    /// Fraction of pheromone lost per iteration, in [0, 1].
    pub evaporation: f64,
    /// Deposit scale: a tour of length `L` deposits `q / L` per edge.
    pub q: f64,
    /// Master seed for reproducible runs.
    pub seed: u32,
}

impl Default for AntColonyParameters {
    fn default() -> Self {
        Self {
            ants: 64,
            iterations: 100,
            alpha: 1.0,
            beta: 3.0,
            evaporation: 0.5,
            q: 100.0,
            seed: 42,
        }
    }
}

/// Outcome of one solver run.
///
/// `best_length` stays `+∞` and the tie set empty when no ant ever closed
/// a cycle; that is a legitimate result on sparse graphs, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourResult {
    /// Length of the shortest tour found.
    pub best_length: f64,
    /// Canonically-distinct tours tied at `best_length`.
    pub best_paths: Vec<Vec<usize>>,
    /// Label-joined key per tour, parallel to `best_paths`.
    pub best_paths_labels: Vec<String>,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: f64,
}

impl Default for TourResult {
    fn default() -> Self {
        Self::empty()
    }
}

impl TourResult {
    /// The no-tour result.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            best_length: f64::INFINITY,
            best_paths: Vec::new(),
            best_paths_labels: Vec::new(),
            elapsed_ms: 0.0,
        }
    }

    /// Whether any feasible tour was found.
    #[must_use]
    pub fn has_tour(&self) -> bool {
        self.best_length.is_finite()
    }

    fn from_tracker(tracker: BestTracker, started: Instant) -> Self {
        let (best_length, best_paths, best_paths_labels) = tracker.into_parts();
        Self {
            best_length,
            best_paths,
            best_paths_labels,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        }
    }
}

/// Approximates shortest Hamiltonian cycles over an immutable graph.
#[derive(Debug, Clone, Copy)]
pub struct AntColonySolver<'a> {
    graph: &'a Graph,
}

impl<'a> AntColonySolver<'a> {
    /// Bind a solver to a graph.
    #[must_use]
    pub const fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Run the colony on the calling thread.
    ///
    /// Deterministic in `(seed, params, graph)`.
    #[must_use]
    pub fn run_sequential(&self, params: &AntColonyParameters) -> TourResult {
        let n = self.graph.vertex_count();
        let mut pheromone = PheromoneField::new(n);
        let mut tracker = BestTracker::new();
        let mut rng = ColonyRng::new(u64::from(params.seed));
        let started = Instant::now();

        for _ in 0..params.iterations {
            let mut delta = DeltaMatrix::new(n);
            for _ in 0..params.ants {
                let path = ant::construct_tour(&mut rng, params, self.graph, &pheromone);
                if !path.is_complete() {
                    continue;
                }
                delta.deposit(&path, params.q);
                tracker.offer(&path, self.graph);
            }
            pheromone.absorb(&delta, params.evaporation);
        }

        TourResult::from_tracker(tracker, started)
    }

    /// Run the colony across `thread_count` scoped worker threads.
    ///
    /// Ants are split into contiguous shards; each worker owns a private
    /// delta matrix and a private random stream derived from the master
    /// seed, its worker index, and the iteration. Workers join at the end
    /// of every iteration before the pheromone field absorbs the merged
    /// deltas, so all ants of an iteration observe the same snapshot.
    ///
    /// `thread_count == 0` returns the empty result immediately.
    /// Deterministic in `(seed, params, graph, thread_count)`.
    #[must_use]
    pub fn run_parallel(&self, params: &AntColonyParameters, thread_count: usize) -> TourResult {
        if thread_count == 0 {
            return TourResult::empty();
        }
        let n = self.graph.vertex_count();
        let mut pheromone = PheromoneField::new(n);
        let tracker = Mutex::new(BestTracker::new());
        let started = Instant::now();

        let base = params.ants / thread_count;
        let remainder = params.ants % thread_count;

        for iteration in 0..params.iterations {
            let mut local_deltas: Vec<DeltaMatrix> =
                (0..thread_count).map(|_| DeltaMatrix::new(n)).collect();

            let snapshot = &pheromone;
            let shared_tracker = &tracker;
            std::thread::scope(|scope| {
                for (worker, local_delta) in local_deltas.iter_mut().enumerate() {
                    let assigned = base + usize::from(worker < remainder);
                    scope.spawn(move || {
                        if assigned == 0 {
                            return;
                        }
                        let mut rng = ColonyRng::for_worker(params.seed, worker, iteration);
                        let mut stage = BestStage::new();
                        for _ in 0..assigned {
                            let path =
                                ant::construct_tour(&mut rng, params, self.graph, snapshot);
                            if !path.is_complete() {
                                continue;
                            }
                            local_delta.deposit(&path, params.q);
                            stage.offer(&path);
                        }
                        if !stage.is_empty() {
                            if let Ok(mut tracker) = shared_tracker.lock() {
                                for path in stage.into_paths() {
                                    tracker.offer(&path, self.graph);
                                }
                            }
                        }
                    });
                }
            });

            let mut merged = DeltaMatrix::new(n);
            for local_delta in &local_deltas {
                merged.merge(local_delta);
            }
            pheromone.absorb(&merged, params.evaporation);
        }

        match tracker.into_inner() {
            Ok(tracker) => TourResult::from_tracker(tracker, started),
            Err(_) => TourResult::empty(),
        }
    }
}
