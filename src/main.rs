//! hormiga CLI - Parallel Ant Colony Optimization
//!
//! Command-line interface for solving shortest-Hamiltonian-cycle instances.

use std::process::ExitCode;

fn main() -> ExitCode {
    match hormiga::cli::Options::parse() {
        Ok(options) => hormiga::cli::run_cli(&options),
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(1)
        }
    }
}
