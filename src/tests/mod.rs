//! Semantic tests for the reasoning core.
//!
//! These check properties of the algorithms rather than surface behaviour:
//! algebraic laws of unification, equivalence of clausification, soundness
//! and completeness of refutation on decidable fragments, and independence
//! of model checking from domain order.
//!
//! # References
//!
//! - Robinson, J.A. "A Machine-Oriented Logic Based on the Resolution
//!   Principle." J. ACM 12(1), 23–41 (1965).
//! - Russell, S., Norvig, P. "Artificial Intelligence: A Modern Approach",
//!   ch. 9 (inference in first-order logic).

use crate::model::{evaluate, evaluate_clauses, Interpretation};
use crate::normalize::to_cnf;
use crate::resolution::{prove, refute, ProofOutcome, ProverConfig};
use crate::syntax::{Clause, Formula, Literal, Term, Var};
use crate::unify::{unify, unify_literals, unify_many, Substitution, UnifyResult};

/// Every interpretation of the given propositions over an empty domain.
fn propositional_models(props: &[&str]) -> Vec<Interpretation> {
    (0..1u32 << props.len())
        .map(|bits| {
            let mut interp = Interpretation::new(Vec::<String>::new());
            for (i, p) in props.iter().enumerate() {
                interp.add_proposition(*p, bits & (1 << i) != 0);
            }
            interp
        })
        .collect()
}

fn prop_clause(literals: &[(&str, bool)]) -> Clause {
    Clause::new(
        literals
            .iter()
            .map(|(p, positive)| {
                if *positive {
                    Literal::pos(*p, vec![])
                } else {
                    Literal::neg(*p, vec![])
                }
            })
            .collect(),
    )
}
