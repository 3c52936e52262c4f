//! Pheromone field with evaporation, deposit deltas, and a lower clamp.
//!
//! Deposits never touch the live field directly. Each iteration accumulates
//! into a [`DeltaMatrix`] (one per worker in parallel mode) so that every
//! ant of the iteration reads the same pheromone snapshot; the field then
//! absorbs the summed delta in a single update between iterations.

use super::ant::AntPath;

/// Matrix of learned per-edge preferences.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    tau: Vec<Vec<f64>>,
}

impl PheromoneField {
    /// Lower clamp applied after every update.
    pub const FLOOR: f64 = 1e-12;
    /// Uniform starting level.
    pub const INITIAL: f64 = 1.0;

    /// Create a field for `n` vertices, initialized to [`Self::INITIAL`]
    /// everywhere (the diagonal included; it is never read).
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            tau: vec![vec![Self::INITIAL; n]; n],
        }
    }

    /// Current level on the directed edge `from -> to`.
    #[must_use]
    pub fn level(&self, from: usize, to: usize) -> f64 {
        self.tau[from][to]
    }

    /// Apply one iteration update: evaporate, absorb the delta, clamp.
    ///
    /// `tau <- (1 - evaporation) * tau + delta`, then `tau >= FLOOR`.
    pub fn absorb(&mut self, delta: &DeltaMatrix, evaporation: f64) {
        let keep = 1.0 - evaporation;
        for (row, delta_row) in self.tau.iter_mut().zip(&delta.cells) {
            for (cell, added) in row.iter_mut().zip(delta_row) {
                *cell = (keep * *cell + added).max(Self::FLOOR);
            }
        }
    }
}

/// Per-iteration deposit accumulator, disjoint from the live field.
#[derive(Debug, Clone)]
pub struct DeltaMatrix {
    cells: Vec<Vec<f64>>,
}

impl DeltaMatrix {
    /// Create a zeroed accumulator for `n` vertices.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            cells: vec![vec![0.0; n]; n],
        }
    }

    /// Deposit `q / length` on every directed edge of a completed path.
    ///
    /// Failed paths (shorter than one edge or with non-finite length)
    /// contribute nothing.
    pub fn deposit(&mut self, path: &AntPath, q: f64) {
        if path.path.len() < 2 || !path.length.is_finite() {
            return;
        }
        let deposit = q / path.length;
        for step in path.path.windows(2) {
            self.cells[step[0]][step[1]] += deposit;
        }
    }

    /// Element-wise sum another accumulator into this one.
    pub fn merge(&mut self, other: &Self) {
        for (row, other_row) in self.cells.iter_mut().zip(&other.cells) {
            for (cell, added) in row.iter_mut().zip(other_row) {
                *cell += added;
            }
        }
    }

    /// Accumulated deposit on the directed edge `from -> to`.
    #[must_use]
    pub fn cell(&self, from: usize, to: usize) -> f64 {
        self.cells[from][to]
    }
}
