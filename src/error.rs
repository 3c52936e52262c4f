//! Error types for hormiga.
//!
//! All fallible operations return `Result<T, ColonyError>` instead of
//! panicking. Data-dependent conditions inside a run (an ant failing to
//! close a cycle, an unreachable optimum) are not errors; they surface
//! through [`crate::colony::TourResult`] instead.

use thiserror::Error;

/// Result type alias for hormiga operations.
pub type ColonyResult<T> = Result<T, ColonyError>;

/// Unified error type for all hormiga operations.
#[derive(Debug, Error)]
pub enum ColonyError {
    /// Graph description could not be turned into a usable graph.
    #[error("Graph format error: {message}")]
    GraphFormat {
        /// Description of what was wrong with the input.
        message: String,
    },

    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ColonyError {
    /// Create a graph format error with a message.
    #[must_use]
    pub fn graph_format(message: impl Into<String>) -> Self {
        Self::GraphFormat {
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
