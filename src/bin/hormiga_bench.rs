//! Scaling benchmark for the ant colony solver.
//!
//! Generates synthetic sparse digraphs of increasing size, times repeated
//! sequential and parallel runs, and emits a CSV with the header
//! `vertices,variant,threads,average_ms`.

use std::fs::File;
use std::io::Write;
use std::process::ExitCode;

use hormiga::colony::{AntColonyParameters, AntColonySolver};
use hormiga::error::{ColonyError, ColonyResult};
use hormiga::graph::generate::generate_dot;
use hormiga::graph::Graph;

/// Parsed options for the benchmark binary, `--key=value` style.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    sizes: Vec<usize>,
    runs: usize,
    output: String,
    ants: usize,
    iterations: usize,
    alpha: f64,
    beta: f64,
    evaporation: f64,
    q: f64,
    seed: u32,
    max_out_degree: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sizes: vec![3000, 3500, 4000, 4500, 5000, 5500, 6000, 6500, 7000],
            runs: 100,
            output: "benchmark_results.csv".to_string(),
            ants: 128,
            iterations: 150,
            alpha: 1.0,
            beta: 3.0,
            evaporation: 0.5,
            q: 100.0,
            seed: 42,
            max_out_degree: 15,
        }
    }
}

impl Options {
    fn parse_from<I, S>(args: I) -> ColonyResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = match arg.find('=') {
                Some(position) => (&arg[..position], Some(&arg[position + 1..])),
                None => (arg, None),
            };
            match key {
                "--sizes" => {
                    let parsed = parse_sizes(required(key, value)?)?;
                    if !parsed.is_empty() {
                        options.sizes = parsed;
                    }
                }
                "--runs" => options.runs = parse_value::<usize>(key, value)?.max(1),
                "--output" => options.output = required(key, value)?.to_string(),
                "--ants" => options.ants = parse_value::<usize>(key, value)?.max(1),
                "--iterations" => options.iterations = parse_value::<usize>(key, value)?.max(1),
                "--alpha" => options.alpha = parse_value(key, value)?,
                "--beta" => options.beta = parse_value(key, value)?,
                "--evaporation" => options.evaporation = parse_value(key, value)?,
                "--q" => options.q = parse_value(key, value)?,
                "--seed" => options.seed = parse_value(key, value)?,
                "--max-out-degree" => {
                    options.max_out_degree = parse_value::<usize>(key, value)?.max(1);
                }
                _ => {}
            }
        }
        Ok(options)
    }

    fn parameters(&self) -> AntColonyParameters {
        AntColonyParameters {
            ants: self.ants,
            iterations: self.iterations,
            alpha: self.alpha,
            beta: self.beta,
            evaporation: self.evaporation,
            q: self.q,
            seed: self.seed,
        }
    }
}

fn required<'a>(key: &str, value: Option<&'a str>) -> ColonyResult<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ColonyError::config(format!("{key} requires a value")))
}

fn parse_value<T: std::str::FromStr>(key: &str, value: Option<&str>) -> ColonyResult<T> {
    let value = required(key, value)?;
    value
        .parse()
        .map_err(|_| ColonyError::config(format!("invalid value for {key}: {value}")))
}

fn parse_sizes(text: &str) -> ColonyResult<Vec<usize>> {
    text.split(',')
        .filter(|token| !token.is_empty())
        .map(|token| parse_value("--sizes", Some(token)))
        .collect()
}

/// One CSV row.
struct Measurement {
    vertices: usize,
    variant: &'static str,
    threads: usize,
    average_ms: f64,
}

/// Worker counts to benchmark: 1, 2, 4, and an oversubscribed 8x the
/// hardware, sorted and deduplicated.
fn thread_counts() -> Vec<usize> {
    let hardware = std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1);
    let mut counts = vec![1, 2, 4, hardware * 8];
    counts.sort_unstable();
    counts.dedup();
    counts
}

fn average_sequential(
    solver: &AntColonySolver<'_>,
    base: &AntColonyParameters,
    runs: usize,
) -> f64 {
    let mut total = 0.0;
    for run in 0..runs {
        let mut params = base.clone();
        params.seed = params.seed.wrapping_add(run as u32);
        total += solver.run_sequential(&params).elapsed_ms;
    }
    total / runs as f64
}

fn average_parallel(
    solver: &AntColonySolver<'_>,
    base: &AntColonyParameters,
    runs: usize,
    threads: usize,
) -> f64 {
    let mut total = 0.0;
    for run in 0..runs {
        let mut params = base.clone();
        params.seed = params.seed.wrapping_add(run as u32);
        total += solver.run_parallel(&params, threads).elapsed_ms;
    }
    total / runs as f64
}

fn write_csv(path: &str, measurements: &[Measurement]) -> ColonyResult<()> {
    let mut file = File::create(path)?;
    writeln!(file, "vertices,variant,threads,average_ms")?;
    for m in measurements {
        writeln!(
            file,
            "{},{},{},{:.6}",
            m.vertices, m.variant, m.threads, m.average_ms
        )?;
    }
    Ok(())
}

fn run(options: &Options) -> ColonyResult<()> {
    let counts = thread_counts();
    println!(
        "Hardware threads: {}",
        std::thread::available_parallelism()
            .map(std::num::NonZero::get)
            .unwrap_or(1)
    );
    println!(
        "Benchmarking worker counts: {}",
        counts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    let base = options.parameters();
    let mut measurements = Vec::with_capacity(options.sizes.len() * (counts.len() + 1));

    for (index, &vertices) in options.sizes.iter().enumerate() {
        let graph_seed = options.seed.wrapping_add((index as u32).wrapping_mul(9973));
        println!("Preparing graph with {vertices} vertices...");
        let text = generate_dot(vertices, graph_seed, options.max_out_degree)?;
        let graph = Graph::from_dot_str(&text);
        let solver = AntColonySolver::new(&graph);

        let sequential_avg = average_sequential(&solver, &base, options.runs);
        println!("  sequential: average {sequential_avg:.4} ms");
        measurements.push(Measurement {
            vertices,
            variant: "sequential",
            threads: 1,
            average_ms: sequential_avg,
        });

        for &threads in &counts {
            let parallel_avg = average_parallel(&solver, &base, options.runs, threads);
            println!("  parallel ({threads} threads): average {parallel_avg:.4} ms");
            measurements.push(Measurement {
                vertices,
                variant: "parallel",
                threads,
                average_ms: parallel_avg,
            });
        }
        println!();
    }

    write_csv(&options.output, &measurements)?;
    println!("Results written to {}", options.output);
    Ok(())
}

fn main() -> ExitCode {
    let options = match Options::parse_from(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::from(1);
        }
    };
    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(1)
        }
    }
}
