//! Tests for CLI argument parsing and command execution.

use std::io::Write;
use std::path::PathBuf;

use super::args::Options;
use super::commands::{execute, resolve_parameters, resolve_threads};

#[test]
fn test_defaults() {
    let options = Options::parse_from(Vec::<String>::new()).unwrap();
    assert_eq!(options.graph_path, PathBuf::from("data/sample.dot"));
    assert_eq!(options.ants, None);
    assert_eq!(options.iterations, None);
    assert_eq!(options.threads, None);
    assert_eq!(options.seed, None);
    assert!(!options.only_sequential);
    assert!(!options.only_parallel);
    assert!(options.print_paths);
    assert!(!options.show_help);
}

#[test]
fn test_parse_key_value_flags() {
    let options = Options::parse_from([
        "--graph=routes.dot",
        "--ants=40",
        "--iterations=80",
        "--threads=4",
        "--seed=1337",
    ])
    .unwrap();
    assert_eq!(options.graph_path, PathBuf::from("routes.dot"));
    assert_eq!(options.ants, Some(40));
    assert_eq!(options.iterations, Some(80));
    assert_eq!(options.threads, Some(4));
    assert_eq!(options.seed, Some(1337));
}

#[test]
fn test_parse_bare_boolean_flags() {
    let options = Options::parse_from(["--only-seq", "--print-paths=false"]).unwrap();
    assert!(options.only_sequential);
    assert!(!options.only_parallel);
    assert!(!options.print_paths);

    let options = Options::parse_from(["--only-par=true"]).unwrap();
    assert!(options.only_parallel);

    let options = Options::parse_from(["--only-seq=false"]).unwrap();
    assert!(!options.only_sequential);
}

#[test]
fn test_parse_help_and_version() {
    assert!(Options::parse_from(["--help"]).unwrap().show_help);
    assert!(Options::parse_from(["-h"]).unwrap().show_help);
    assert!(Options::parse_from(["--version"]).unwrap().show_version);
    assert!(Options::parse_from(["-V"]).unwrap().show_version);
}

#[test]
fn test_parse_unknown_keys_ignored() {
    let options = Options::parse_from(["--colour=red", "--graph=g.dot"]).unwrap();
    assert_eq!(options.graph_path, PathBuf::from("g.dot"));
}

#[test]
fn test_parse_rejects_malformed_numbers() {
    assert!(Options::parse_from(["--ants=many"]).is_err());
    assert!(Options::parse_from(["--seed=-1"]).is_err());
    assert!(Options::parse_from(["--threads"]).is_err());
    assert!(Options::parse_from(["--graph="]).is_err());
}

#[test]
fn test_resolve_parameters_cli_defaults() {
    let options = Options::parse_from(Vec::<String>::new()).unwrap();
    let params = resolve_parameters(&options).unwrap();
    assert_eq!(params.ants, 128);
    assert_eq!(params.iterations, 150);
    assert_eq!(params.seed, 42);
}

#[test]
fn test_resolve_parameters_flags_override() {
    let options = Options::parse_from(["--ants=0", "--iterations=0", "--seed=9"]).unwrap();
    let params = resolve_parameters(&options).unwrap();
    // Zero counts clamp up to one instead of failing.
    assert_eq!(params.ants, 1);
    assert_eq!(params.iterations, 1);
    assert_eq!(params.seed, 9);
}

#[test]
fn test_resolve_parameters_config_file_under_flags() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "ants: 10\niterations: 20\nseed: 5").unwrap();

    let config_flag = format!("--config={}", config.path().display());
    let options = Options::parse_from([config_flag.as_str(), "--ants=33"]).unwrap();
    let params = resolve_parameters(&options).unwrap();
    assert_eq!(params.ants, 33, "flag wins over config file");
    assert_eq!(params.iterations, 20, "config file wins over defaults");
    assert_eq!(params.seed, 5);
}

#[test]
fn test_resolve_parameters_bad_config_file() {
    let options = Options::parse_from(["--config=missing.yaml"]).unwrap();
    assert!(resolve_parameters(&options).is_err());
}

#[test]
fn test_resolve_threads() {
    let explicit = Options::parse_from(["--threads=6"]).unwrap();
    assert_eq!(resolve_threads(&explicit), 6);

    let zero = Options::parse_from(["--threads=0"]).unwrap();
    assert_eq!(resolve_threads(&zero), 1);

    let default = Options::parse_from(Vec::<String>::new()).unwrap();
    assert!(resolve_threads(&default) >= 1);
}

#[test]
fn test_execute_runs_both_variants() {
    let mut graph = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        graph,
        "A -- B [weight=1];\nB -- C [weight=2];\nC -- A [weight=5];"
    )
    .unwrap();

    let graph_flag = format!("--graph={}", graph.path().display());
    let options = Options::parse_from([
        graph_flag.as_str(),
        "--ants=10",
        "--iterations=10",
        "--threads=2",
        "--print-paths=false",
    ])
    .unwrap();
    assert!(execute(&options).is_ok());
}

#[test]
fn test_execute_missing_graph_fails() {
    let options = Options::parse_from(["--graph=definitely/missing.dot"]).unwrap();
    assert!(execute(&options).is_err());
}

#[test]
fn test_execute_edgeless_graph_fails() {
    let mut graph = tempfile::NamedTempFile::new().unwrap();
    writeln!(graph, "digraph G {{\n}}").unwrap();

    let graph_flag = format!("--graph={}", graph.path().display());
    let options = Options::parse_from([graph_flag.as_str()]).unwrap();
    assert!(execute(&options).is_err());
}
