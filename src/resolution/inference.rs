//! Inference rules: binary resolution and factoring, plus the clause renamings
//! they rely on.

use crate::normalize::fresh_var;
use crate::syntax::{Clause, Literal, Term, Var};
use crate::unify::{unify_atoms, Substitution};

/// Predicate of the literal that records query bindings during answer
/// extraction. `$` keeps it apart from client predicates.
pub(crate) const ANSWER_PREDICATE: &str = "$answer";

pub(crate) fn is_answer_literal(literal: &Literal) -> bool {
    literal.atom.predicate == ANSWER_PREDICATE
}

/// The empty clause, or a clause made only of answer literals.
pub(crate) fn is_refutation(clause: &Clause) -> bool {
    clause.iter().all(is_answer_literal)
}

/// A variant of `clause` whose variables occur in no other clause.
pub fn rename_apart(clause: &Clause) -> Clause {
    Clause::new(renamed_literals(clause))
}

/// Literals of a fresh variant of `clause`, in the clause's own order.
fn renamed_literals(clause: &Clause) -> Vec<Literal> {
    let vars = clause.variables_in_order();
    if vars.is_empty() {
        return clause.literals().to_vec();
    }
    let renaming: Substitution = vars
        .into_iter()
        .map(|v| {
            let fresh = fresh_var(&v);
            (v, Term::Var(fresh))
        })
        .collect();
    clause.iter().map(|l| l.apply_subst(&renaming)).collect()
}

/// Rename variables to `X_1, X_2, ...` in order of first occurrence, reading
/// literals by their variable-blind shape. Clauses that differ only in
/// variable names usually end up identical.
pub fn canonicalize(clause: &Clause) -> Clause {
    let mut ordered: Vec<&Literal> = clause.iter().collect();
    ordered.sort_by_cached_key(|l| l.shape());
    let mut vars = Vec::new();
    for literal in ordered {
        literal.atom.variables_in_order(&mut vars);
    }
    if vars.is_empty() {
        return clause.clone();
    }
    let renaming: Substitution = vars
        .into_iter()
        .enumerate()
        .map(|(i, v)| (v, Term::Var(Var::indexed("X", i as u32 + 1))))
        .collect();
    clause.apply_subst(&renaming)
}

/// All binary resolvents of two clauses.
///
/// Both clauses are renamed apart first, so the same clause may be passed as
/// both arguments.
pub fn resolvents(left: &Clause, right: &Clause) -> Vec<Clause> {
    let candidates: Vec<(usize, usize)> = left
        .iter()
        .enumerate()
        .filter(|(_, a)| !is_answer_literal(a))
        .flat_map(|(i, a)| {
            right
                .iter()
                .enumerate()
                .filter(move |(_, b)| a.positive != b.positive && a.atom.same_symbol(&b.atom))
                .map(move |(j, _)| (i, j))
        })
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    // Renaming keeps literal positions, so the candidate indices stay valid.
    let left = renamed_literals(left);
    let right = renamed_literals(right);
    let mut out = Vec::new();
    for (i, j) in candidates {
        let Some(sigma) = unify_atoms(&left[i].atom, &right[j].atom).ok() else {
            continue;
        };
        let literals = left
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != i)
            .chain(right.iter().enumerate().filter(|(k, _)| *k != j))
            .map(|(_, l)| l.apply_subst(&sigma))
            .collect();
        out.push(Clause::new(literals));
    }
    out
}

/// All binary factors: instances of the clause where two literals of the same
/// sign are unified and merge.
pub fn factors(clause: &Clause) -> Vec<Clause> {
    let literals = clause.literals();
    let mut out = Vec::new();
    for i in 0..literals.len() {
        for j in (i + 1)..literals.len() {
            let (a, b) = (&literals[i], &literals[j]);
            if a.positive != b.positive || !a.atom.same_symbol(&b.atom) {
                continue;
            }
            if let Some(sigma) = unify_atoms(&a.atom, &b.atom).ok() {
                let factor = clause.apply_subst(&sigma);
                if factor.len() < clause.len() {
                    out.push(factor);
                }
            }
        }
    }
    out
}
