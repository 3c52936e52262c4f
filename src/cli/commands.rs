//! CLI command handlers.

use std::process::ExitCode;

use crate::colony::{AntColonyParameters, AntColonySolver};
use crate::config::ColonyConfig;
use crate::error::{ColonyError, ColonyResult};
use crate::graph::Graph;

use super::output::{print_help, print_result, print_run_header, print_version};
use super::Options;

/// Main CLI entry point.
#[must_use]
pub fn run_cli(options: &Options) -> ExitCode {
    if options.show_help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if options.show_version {
        print_version();
        return ExitCode::SUCCESS;
    }
    match execute(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(1)
        }
    }
}

/// Ingest the graph, run the requested variants, print the results.
pub(super) fn execute(options: &Options) -> ColonyResult<()> {
    let graph = Graph::from_dot_file(&options.graph_path)?;
    if graph.vertex_count() == 0 {
        return Err(ColonyError::graph_format(format!(
            "no edges found in {}",
            options.graph_path.display()
        )));
    }

    let params = resolve_parameters(options)?;
    let threads = resolve_threads(options);
    let solver = AntColonySolver::new(&graph);

    print_run_header(&graph, &params, threads);
    if !options.only_parallel {
        let result = solver.run_sequential(&params);
        print_result("Sequential solver", &result, &graph, options.print_paths);
    }
    if !options.only_sequential {
        let result = solver.run_parallel(&params, threads);
        print_result("Parallel solver", &result, &graph, options.print_paths);
    }
    Ok(())
}

/// Layer parameters: configuration file under explicit flags, with the
/// historical CLI defaults when neither says otherwise. Zero counts are
/// clamped up rather than rejected.
pub(super) fn resolve_parameters(options: &Options) -> ColonyResult<AntColonyParameters> {
    let mut params = match &options.config_path {
        Some(path) => ColonyConfig::load(path)?.to_parameters(),
        None => AntColonyParameters {
            ants: 128,
            iterations: 150,
            ..AntColonyParameters::default()
        },
    };
    if let Some(ants) = options.ants {
        params.ants = ants.max(1);
    }
    if let Some(iterations) = options.iterations {
        params.iterations = iterations.max(1);
    }
    if let Some(seed) = options.seed {
        params.seed = seed;
    }
    Ok(params)
}

/// Worker count: the explicit flag (zero clamped to one) or the machine's
/// available parallelism.
pub(super) fn resolve_threads(options: &Options) -> usize {
    options.threads.map_or_else(
        || {
            std::thread::available_parallelism()
                .map(std::num::NonZero::get)
                .unwrap_or(1)
        },
        |threads| threads.max(1),
    )
}
