//! Normalization (clausification) from formulas to clauses.
//!
//! The pipeline runs these passes in order:
//!
//! 1. [`eliminate_implications`]: `A iff B` and `A implies B` in terms of `and`, `or`, `not`.
//! 2. [`push_negations`]: negation normal form.
//! 3. [`standardize_apart`]: one fresh variable per quantifier.
//! 4. [`skolemize`]: existential variables become Skolem terms.
//! 5. [`drop_universals`]: remaining variables are implicitly universal.
//! 6. [`distribute`]: `or` over `and`.
//! 7. [`flatten`]: one clause per conjunct.
//!
//! Every pass but Skolemization yields an equivalent formula. Skolemization
//! adds fresh function symbols and preserves satisfiability only, so clause
//! sets produced here are suitable for refutation, not as drop-in replacements
//! of their input.

mod clausify;
mod fresh;
mod nnf;
mod skolem;

use indexmap::IndexSet;
use log::debug;

use crate::syntax::{Clause, Formula, Literal};

pub use clausify::{distribute, flatten};
pub use nnf::{eliminate_implications, push_negations};
pub use skolem::{drop_universals, skolemize, standardize_apart};

pub(crate) use fresh::fresh_var;

/// Convert a formula into an equisatisfiable set of clauses.
pub fn to_cnf(formula: &Formula) -> Vec<Clause> {
    let implication_free = eliminate_implications(formula);
    let nnf = push_negations(&implication_free);
    let standardized = standardize_apart(&nnf);
    let skolemized = skolemize(&standardized);
    let matrix = drop_universals(&skolemized);
    let distributed = distribute(&matrix);
    let clauses = flatten(&distributed);
    debug!(
        "clausified formula of size {} into {} clause(s) (matrix size {})",
        formula.size(),
        clauses.len(),
        distributed.size()
    );
    clauses
}

/// Clausify several formulas into one clause set, dropping duplicates across
/// formulas. Skolem symbols are fresh for every formula.
pub fn to_cnf_all<'a>(formulas: impl IntoIterator<Item = &'a Formula>) -> Vec<Clause> {
    let mut clauses: IndexSet<Clause> = IndexSet::new();
    for formula in formulas {
        clauses.extend(to_cnf(formula));
    }
    clauses.into_iter().collect()
}

/// Rebuild a formula from a clause set: the conjunction of every clause read
/// as a universally closed disjunction of its literals.
pub fn clauses_to_formula(clauses: &[Clause]) -> Formula {
    Formula::and_all(clauses.iter().map(clause_to_formula))
}

/// A single clause as a universally closed disjunction.
pub fn clause_to_formula(clause: &Clause) -> Formula {
    let body = Formula::or_all(clause.iter().map(literal_to_formula));
    Formula::forall_all(clause.variables_in_order(), body)
}

fn literal_to_formula(literal: &Literal) -> Formula {
    let atom = Formula::Atom(literal.atom.clone());
    if literal.positive {
        atom
    } else {
        Formula::negation(atom)
    }
}
