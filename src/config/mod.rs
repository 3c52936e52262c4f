//! Solver configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers:
//! - Type-safe configuration structs
//! - Compile-time validation via serde
//! - Runtime semantic validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::colony::AntColonyParameters;
use crate::error::{ColonyError, ColonyResult};

/// Solver configuration, loadable from YAML.
///
/// Field defaults match [`AntColonyParameters::default`], so a partial
/// file only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ColonyConfig {
    /// Ants per iteration.
    #[validate(range(min = 1))]
    #[serde(default = "default_ants")]
    pub ants: usize,

    /// Iteration count.
    #[validate(range(min = 1))]
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Pheromone exponent.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Heuristic exponent.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_beta")]
    pub beta: f64,

    /// Pheromone fraction lost per iteration.
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_evaporation")]
    pub evaporation: f64,

    /// Deposit scale. Must be positive (checked semantically; the range
    /// validator cannot express an open bound).
    #[serde(default = "default_q")]
    pub q: f64,

    /// Master seed for reproducible runs.
    #[serde(default = "default_seed")]
    pub seed: u32,
}

const fn default_ants() -> usize {
    64
}

const fn default_iterations() -> usize {
    100
}

const fn default_alpha() -> f64 {
    1.0
}

const fn default_beta() -> f64 {
    3.0
}

const fn default_evaporation() -> f64 {
    0.5
}

const fn default_q() -> f64 {
    100.0
}

const fn default_seed() -> u32 {
    42
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            ants: default_ants(),
            iterations: default_iterations(),
            alpha: default_alpha(),
            beta: default_beta(),
            evaporation: default_evaporation(),
            q: default_q(),
            seed: default_seed(),
        }
    }
}

impl ColonyConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> ColonyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> ColonyResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> ColonyConfigBuilder {
        ColonyConfigBuilder::default()
    }

    /// Validate semantic constraints beyond the schema.
    fn validate_semantic(&self) -> ColonyResult<()> {
        if self.q <= 0.0 || !self.q.is_finite() {
            return Err(ColonyError::config(format!(
                "Deposit scale q must be positive and finite, got {}",
                self.q
            )));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(ColonyError::config("Exponents must be finite"));
        }
        Ok(())
    }

    /// Convert into the solver's parameter struct.
    #[must_use]
    pub fn to_parameters(&self) -> AntColonyParameters {
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

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct ColonyConfigBuilder {
    ants: Option<usize>,
    iterations: Option<usize>,
    alpha: Option<f64>,
    beta: Option<f64>,
    evaporation: Option<f64>,
    q: Option<f64>,
    seed: Option<u32>,
}

impl ColonyConfigBuilder {
    /// Set the ant count per iteration.
    #[must_use]
    pub const fn ants(mut self, ants: usize) -> Self {
        self.ants = Some(ants);
        self
    }

    /// Set the iteration count.
    #[must_use]
    pub const fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Set the pheromone exponent.
    #[must_use]
    pub const fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Set the heuristic exponent.
    #[must_use]
    pub const fn beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Set the evaporation fraction.
    #[must_use]
    pub const fn evaporation(mut self, evaporation: f64) -> Self {
        self.evaporation = Some(evaporation);
        self
    }

    /// Set the deposit scale.
    #[must_use]
    pub const fn q(mut self, q: f64) -> Self {
        self.q = Some(q);
        self
    }

    /// Set the master seed.
    #[must_use]
    pub const fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ColonyConfig {
        let mut config = ColonyConfig::default();
        if let Some(ants) = self.ants {
            config.ants = ants;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(beta) = self.beta {
            config.beta = beta;
        }
        if let Some(evaporation) = self.evaporation {
            config.evaporation = evaporation;
        }
        if let Some(q) = self.q {
            config.q = q;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}
