//! # hormiga
//!
//! Parallel Ant Colony Optimization for shortest Hamiltonian cycles.
//!
//! The solver approximates Traveling Salesman tours over weighted directed
//! graphs with string-labelled vertices. Runs are reproducible: sequential
//! execution is a pure function of `(seed, parameters, graph)`, and parallel
//! execution additionally of the worker count, because every worker derives
//! its random stream from the master seed.
//!
//! ## Example
//!
//! ```rust
//! use hormiga::prelude::*;
//!
//! let graph = Graph::from_dot_str(
//!     "A -- B [weight=1];\n\
//!      B -- C [weight=2];\n\
//!      C -- A [weight=5];",
//! );
//! let solver = AntColonySolver::new(&graph);
//! let params = AntColonyParameters {
//!     ants: 20,
//!     iterations: 30,
//!     ..AntColonyParameters::default()
//! };
//! let result = solver.run_sequential(&params);
//! assert!(result.best_length.is_finite());
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::too_many_lines,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
    clippy::needless_range_loop   // Sometimes range loops are clearer
)]

pub mod cli;
pub mod colony;
pub mod config;
pub mod error;
pub mod graph;
pub mod rng;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::colony::{AntColonyParameters, AntColonySolver, AntPath, TourResult};
    pub use crate::config::{ColonyConfig, ColonyConfigBuilder};
    pub use crate::error::{ColonyError, ColonyResult};
    pub use crate::graph::Graph;
    pub use crate::rng::ColonyRng;
}

/// Re-export for public API
pub use error::{ColonyError, ColonyResult};
