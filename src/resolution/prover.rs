//! Refutation entry points.

use log::info;
use serde::{Deserialize, Serialize};

use super::inference::{is_answer_literal, ANSWER_PREDICATE};
use super::saturation::{ProofStats, SaturationResult, SaturationState};
use super::ProverConfig;
use crate::normalize::{to_cnf, to_cnf_all};
use crate::syntax::{Clause, Formula, Term};
use crate::unify::Substitution;

/// Result of a proof attempt.
///
/// Each variant carries a clause set: the clauses the refutation started from
/// when the query is entailed, the saturated set when it is not, and the
/// clauses held when the search was cut off otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofOutcome {
    Entailed(Vec<Clause>),
    NotEntailed(Vec<Clause>),
    Unknown(Vec<Clause>),
}

impl ProofOutcome {
    pub fn is_entailed(&self) -> bool {
        matches!(self, ProofOutcome::Entailed(_))
    }

    pub fn is_not_entailed(&self) -> bool {
        matches!(self, ProofOutcome::NotEntailed(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ProofOutcome::Unknown(_))
    }

    pub fn clauses(&self) -> &[Clause] {
        match self {
            ProofOutcome::Entailed(c) | ProofOutcome::NotEntailed(c) | ProofOutcome::Unknown(c) => c,
        }
    }
}

/// Result of a question with free variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AskOutcome {
    /// Bindings for the query's free variables that make it entailed. More
    /// than one binding means the premises only entail their disjunction. An
    /// empty list means the premises alone are contradictory.
    Answered(Vec<Substitution>),
    NotEntailed(Vec<Clause>),
    Unknown(Vec<Clause>),
}

impl AskOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, AskOutcome::Answered(_))
    }
}

/// Run resolution on a clause set and classify the result. Refutation means
/// the set is unsatisfiable.
pub fn refute(clauses: Vec<Clause>, config: &ProverConfig) -> (ProofOutcome, ProofStats) {
    let mut state = SaturationState::new(clauses.clone(), config.clone());
    let outcome = match state.run() {
        SaturationResult::Refuted(_) => ProofOutcome::Entailed(clauses),
        SaturationResult::Saturated => ProofOutcome::NotEntailed(state.clauses().cloned().collect()),
        SaturationResult::Exhausted(_) => ProofOutcome::Unknown(state.clauses().cloned().collect()),
    };
    (outcome, state.stats())
}

/// Decide whether the premises entail the query.
///
/// Free variables of the query are read universally. The premises and the
/// negated query are clausified together and refuted.
pub fn prove(premises: &[Formula], query: &Formula, config: &ProverConfig) -> ProofOutcome {
    prove_with_stats(premises, query, config).0
}

/// [`prove`], also returning the search counters.
pub fn prove_with_stats(
    premises: &[Formula],
    query: &Formula,
    config: &ProverConfig,
) -> (ProofOutcome, ProofStats) {
    let mut clauses = to_cnf_all(premises);
    let negated = Formula::negation(query.universal_closure());
    for clause in to_cnf(&negated) {
        if !clauses.contains(&clause) {
            clauses.push(clause);
        }
    }
    let (outcome, stats) = refute(clauses, config);
    info!(
        "query {}: {} after {} iteration(s), {} clause(s) retained",
        query,
        outcome_label(&outcome),
        stats.iterations,
        stats.retained
    );
    (outcome, stats)
}

/// Find bindings for the free variables of `query` under which it is entailed.
///
/// The negated query is tagged with an answer literal over its free variables;
/// the run succeeds once a clause of answer literals alone is derived, and the
/// arguments of those literals are the answers. A closed query behaves like
/// [`prove`] and answers with empty bindings.
pub fn ask(premises: &[Formula], query: &Formula, config: &ProverConfig) -> AskOutcome {
    let vars = query.free_variables();
    let answer = Formula::pred(
        ANSWER_PREDICATE,
        vars.iter().cloned().map(Term::Var).collect(),
    );
    let goal = Formula::forall_all(
        vars.clone(),
        Formula::or(Formula::negation(query.clone()), answer),
    );
    let mut clauses = to_cnf_all(premises);
    clauses.extend(to_cnf(&goal));

    let mut state = SaturationState::new(clauses, config.clone());
    let outcome = match state.run() {
        SaturationResult::Refuted(clause) => AskOutcome::Answered(
            clause
                .iter()
                .filter(|l| is_answer_literal(l))
                .map(|l| vars.iter().cloned().zip(l.atom.args.iter().cloned()).collect())
                .collect(),
        ),
        SaturationResult::Saturated => AskOutcome::NotEntailed(state.clauses().cloned().collect()),
        SaturationResult::Exhausted(_) => AskOutcome::Unknown(state.clauses().cloned().collect()),
    };
    if let AskOutcome::Answered(answers) = &outcome {
        for answer in answers {
            info!("query {} answered with {}", query, answer);
        }
    }
    outcome
}

fn outcome_label(outcome: &ProofOutcome) -> &'static str {
    match outcome {
        ProofOutcome::Entailed(_) => "entailed",
        ProofOutcome::NotEntailed(_) => "not entailed",
        ProofOutcome::Unknown(_) => "unknown",
    }
}
