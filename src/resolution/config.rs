//! Prover configuration.

use serde::{Deserialize, Serialize};

/// Configuration for refutation search.
///
/// First-order resolution does not terminate in general; the two caps turn a
/// run that would go on forever into an `Unknown` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProverConfig {
    /// Maximum number of clauses held in the working set (None for unlimited)
    pub max_clauses: Option<usize>,
    /// Maximum number of given-clause iterations (None for unlimited)
    pub max_iterations: Option<usize>,
    /// Derive factors of each given clause
    pub factoring: bool,
    /// Discard resolvents containing a literal and its complement
    pub drop_tautologies: bool,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_clauses: Some(20_000),
            max_iterations: Some(10_000),
            factoring: true,
            drop_tautologies: true,
        }
    }
}

impl ProverConfig {
    /// No resource bound at all. Only safe on inputs known to saturate, such as
    /// propositional or function-free clause sets.
    pub fn unbounded() -> Self {
        ProverConfig {
            max_clauses: None,
            max_iterations: None,
            ..ProverConfig::default()
        }
    }

    pub fn with_max_clauses(mut self, max: usize) -> Self {
        self.max_clauses = Some(max);
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    pub fn with_factoring(mut self, enabled: bool) -> Self {
        self.factoring = enabled;
        self
    }

    pub fn with_tautology_deletion(mut self, enabled: bool) -> Self {
        self.drop_tautologies = enabled;
        self
    }
}
