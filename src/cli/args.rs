//! CLI argument parsing.
//!
//! Flags come in `--key=value` form; a bare `--key` means `true`. Parsing
//! accepts any iterator of strings, not just `std::env::args()`, so it is
//! fully testable.

use std::path::PathBuf;

use crate::error::{ColonyError, ColonyResult};

/// Parsed CLI options for the solver binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Path to the graph description.
    pub graph_path: PathBuf,
    /// Optional YAML configuration supplying parameter defaults.
    pub config_path: Option<PathBuf>,
    /// Override for the ant count.
    pub ants: Option<usize>,
    /// Override for the iteration count.
    pub iterations: Option<usize>,
    /// Override for the worker thread count.
    pub threads: Option<usize>,
    /// Override for the master seed.
    pub seed: Option<u32>,
    /// Run only the sequential variant.
    pub only_sequential: bool,
    /// Run only the parallel variant.
    pub only_parallel: bool,
    /// Print the tied optimal routes.
    pub print_paths: bool,
    /// Show help and exit.
    pub show_help: bool,
    /// Show version and exit.
    pub show_version: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from("data/sample.dot"),
            config_path: None,
            ants: None,
            iterations: None,
            threads: None,
            seed: None,
            only_sequential: false,
            only_parallel: false,
            print_paths: true,
            show_help: false,
            show_version: false,
        }
    }
}

impl Options {
    /// Parse command-line arguments from the environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed values.
    pub fn parse() -> ColonyResult<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse command-line arguments from an iterator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed values. Unknown keys are
    /// ignored.
    pub fn parse_from<I, S>(args: I) -> ColonyResult<Self>
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
                "--graph" => options.graph_path = PathBuf::from(required(key, value)?),
                "--config" => options.config_path = Some(PathBuf::from(required(key, value)?)),
                "--ants" => options.ants = Some(parse_value(key, value)?),
                "--iterations" => options.iterations = Some(parse_value(key, value)?),
                "--threads" => options.threads = Some(parse_value(key, value)?),
                "--seed" => options.seed = Some(parse_value(key, value)?),
                "--only-seq" => options.only_sequential = flag_enabled(value),
                "--only-par" => options.only_parallel = flag_enabled(value),
                "--print-paths" => options.print_paths = value != Some("false"),
                "--help" | "-h" => options.show_help = true,
                "--version" | "-V" => options.show_version = true,
                _ => {}
            }
        }
        Ok(options)
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

fn flag_enabled(value: Option<&str>) -> bool {
    value.map_or(true, |v| v == "true")
}
