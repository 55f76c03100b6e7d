//! Level-saturation loop over a growing clause set.

use indexmap::IndexSet;
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use super::inference::{canonicalize, factors, is_refutation, resolvents};
use super::ProverConfig;
use crate::syntax::Clause;

/// How a saturation run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaturationResult {
    /// A refutation was derived: the empty clause, or a clause of answer
    /// literals only.
    Refuted(Clause),
    /// No new clause can be derived; the input is satisfiable.
    Saturated,
    /// A resource bound stopped the search.
    Exhausted(ResourceBound),
}

/// The bound that stopped a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceBound {
    Clauses,
    Iterations,
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStats {
    /// Given clauses processed
    pub iterations: usize,
    /// Deepest saturation level entered; level 0 is the input clause set
    pub depth: usize,
    /// Resolvents and factors produced
    pub generated: usize,
    /// Produced clauses that were new and kept
    pub retained: usize,
}

/// A single given-clause iteration.
#[derive(Debug, Clone)]
pub struct SaturationStep {
    pub given: Clause,
    pub level: usize,
    pub generated: usize,
    pub retained: usize,
}

/// Mutable saturation state for step-by-step execution.
///
/// Clauses are processed in insertion order. Each given clause is resolved
/// against every clause before it and against itself, so once the cursor
/// passes the end of a level every pair within that level has been tried.
/// Clauses are stored under canonical variable names; a derived clause that is
/// already present is discarded.
pub struct SaturationState {
    clauses: IndexSet<Clause>,
    given: usize,
    level_end: usize,
    level: usize,
    config: ProverConfig,
    stats: ProofStats,
    done: Option<SaturationResult>,
}

impl SaturationState {
    /// Initialize from an input clause set.
    pub fn new(input: impl IntoIterator<Item = Clause>, config: ProverConfig) -> Self {
        let mut state = SaturationState {
            clauses: IndexSet::new(),
            given: 0,
            level_end: 0,
            level: 0,
            config,
            stats: ProofStats::default(),
            done: None,
        };
        for clause in input {
            if let Some(result) = state.admit(clause) {
                state.finish(result);
                break;
            }
        }
        state.level_end = state.clauses.len();
        state.stats = ProofStats::default();
        debug!("saturation starts with {} clause(s)", state.clauses.len());
        state
    }

    /// Perform one given-clause iteration. Returns `None` once the run is
    /// finished; the outcome is then available from [`Self::result`].
    pub fn step(&mut self) -> Option<SaturationStep> {
        if self.done.is_some() {
            return None;
        }
        if self.given >= self.clauses.len() {
            self.finish(SaturationResult::Saturated);
            return None;
        }
        if let Some(max) = self.config.max_iterations {
            if self.stats.iterations >= max {
                self.finish(SaturationResult::Exhausted(ResourceBound::Iterations));
                return None;
            }
        }
        if self.given == self.level_end {
            self.level += 1;
            self.level_end = self.clauses.len();
            self.stats.depth = self.level;
            debug!(
                "entering level {} with {} clause(s)",
                self.level,
                self.clauses.len()
            );
        }

        let given = self.clauses[self.given].clone();
        self.stats.iterations += 1;
        let generated_before = self.stats.generated;
        let retained_before = self.stats.retained;

        let mut derived = Vec::new();
        if self.config.factoring {
            derived.extend(factors(&given));
        }
        for j in 0..=self.given {
            derived.extend(resolvents(&given, &self.clauses[j]));
        }
        for clause in derived {
            self.stats.generated += 1;
            if let Some(result) = self.admit(clause) {
                self.finish(result);
                break;
            }
        }

        self.given += 1;
        Some(SaturationStep {
            given,
            level: self.level,
            generated: self.stats.generated - generated_before,
            retained: self.stats.retained - retained_before,
        })
    }

    /// Step until the run finishes.
    pub fn run(&mut self) -> &SaturationResult {
        while self.step().is_some() {}
        // step() only returns None after recording a result
        self.done.get_or_insert(SaturationResult::Saturated)
    }

    /// Current result, if the run is finished.
    pub fn result(&self) -> Option<&SaturationResult> {
        self.done.as_ref()
    }

    /// Clauses held so far, in insertion order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn stats(&self) -> ProofStats {
        self.stats
    }

    /// Canonicalize and store a clause. Returns a result when the clause ends
    /// the run.
    fn admit(&mut self, clause: Clause) -> Option<SaturationResult> {
        let clause = canonicalize(&clause);
        if is_refutation(&clause) {
            return Some(SaturationResult::Refuted(clause));
        }
        if self.config.drop_tautologies && clause.is_tautology() {
            return None;
        }
        if self.clauses.contains(&clause) {
            return None;
        }
        trace!("retained {}", clause);
        self.clauses.insert(clause);
        self.stats.retained += 1;
        match self.config.max_clauses {
            Some(max) if self.clauses.len() > max => {
                Some(SaturationResult::Exhausted(ResourceBound::Clauses))
            }
            _ => None,
        }
    }

    fn finish(&mut self, result: SaturationResult) {
        match &result {
            SaturationResult::Refuted(clause) => info!(
                "refutation found at level {}: {} ({} clauses)",
                self.level,
                clause,
                self.clauses.len()
            ),
            SaturationResult::Saturated => info!(
                "clause set saturated at level {} with {} clauses",
                self.level,
                self.clauses.len()
            ),
            SaturationResult::Exhausted(bound) => warn!(
                "search stopped by {:?} bound after {} iterations ({} clauses)",
                bound,
                self.stats.iterations,
                self.clauses.len()
            ),
        }
        self.done = Some(result);
    }
}
