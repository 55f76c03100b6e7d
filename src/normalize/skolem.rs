//! Standardizing variables apart, Skolemization and dropping universal
//! quantifiers.
//!
//! Skolemization preserves satisfiability only: the result mentions fresh
//! function symbols absent from the input, so it is generally not equivalent
//! to it. Refutation is unaffected, since a set of clauses is unsatisfiable
//! exactly when its Skolemized form is.

use crate::syntax::{Formula, Term, Var};
use crate::unify::Substitution;

use super::fresh::{fresh_var, skolem_symbol};
use super::nnf::push_negations;

/// Rename every quantified variable to a fresh one, so that no two
/// quantifiers share a variable and no bound variable coincides with a free one.
pub fn standardize_apart(formula: &Formula) -> Formula {
    let mut scope = Vec::new();
    rename_bound(formula, &mut scope)
}

fn rename_bound(formula: &Formula, scope: &mut Vec<(Var, Var)>) -> Formula {
    match formula {
        Formula::True | Formula::False => formula.clone(),
        Formula::Atom(atom) => {
            if scope.is_empty() {
                return formula.clone();
            }
            // Later entries shadow earlier ones.
            let subst: Substitution = scope
                .iter()
                .map(|(old, new)| (old.clone(), Term::Var(new.clone())))
                .collect();
            Formula::Atom(atom.apply_subst(&subst))
        }
        Formula::Not(inner) => Formula::negation(rename_bound(inner, scope)),
        Formula::And(l, r) => Formula::and(rename_bound(l, scope), rename_bound(r, scope)),
        Formula::Or(l, r) => Formula::or(rename_bound(l, scope), rename_bound(r, scope)),
        Formula::Implies(l, r) => {
            Formula::implies(rename_bound(l, scope), rename_bound(r, scope))
        }
        Formula::Iff(l, r) => Formula::iff(rename_bound(l, scope), rename_bound(r, scope)),
        Formula::Forall(v, body) | Formula::Exists(v, body) => {
            let renamed = fresh_var(v);
            scope.push((v.clone(), renamed.clone()));
            let body = rename_bound(body, scope);
            scope.pop();
            if matches!(formula, Formula::Forall(..)) {
                Formula::forall(renamed, body)
            } else {
                Formula::exists(renamed, body)
            }
        }
    }
}

/// Replace each existential variable by a fresh Skolem function applied to the
/// universal variables in scope (a fresh constant when there are none), and
/// drop the existential quantifier.
///
/// Free variables of the input count as universally quantified at the top.
/// The input should be in negation normal form with variables standardized
/// apart; other shapes are brought into negation normal form first.
pub fn skolemize(formula: &Formula) -> Formula {
    let mut universals = formula.free_variables();
    skolemize_in(formula, &mut universals, &Substitution::empty())
}

fn skolemize_in(formula: &Formula, universals: &mut Vec<Var>, subst: &Substitution) -> Formula {
    match formula {
        Formula::True | Formula::False => formula.clone(),
        Formula::Atom(atom) => Formula::Atom(atom.apply_subst(subst)),
        Formula::Not(inner) if matches!(inner.as_ref(), Formula::Atom(_)) => {
            Formula::negation(skolemize_in(inner, universals, subst))
        }
        Formula::Not(_) | Formula::Implies(..) | Formula::Iff(..) => {
            skolemize_in(&push_negations(formula), universals, subst)
        }
        Formula::And(l, r) => Formula::and(
            skolemize_in(l, universals, subst),
            skolemize_in(r, universals, subst),
        ),
        Formula::Or(l, r) => Formula::or(
            skolemize_in(l, universals, subst),
            skolemize_in(r, universals, subst),
        ),
        Formula::Forall(v, body) => {
            universals.push(v.clone());
            let body = skolemize_in(body, universals, &subst.without(v));
            universals.pop();
            Formula::forall(v.clone(), body)
        }
        Formula::Exists(v, body) => {
            let symbol = skolem_symbol(universals.len());
            let args: Vec<Term> = universals.iter().cloned().map(Term::Var).collect();
            let witness = Term::App(symbol, args.into());
            let mut extended = subst.clone();
            extended.bind(v.clone(), witness);
            skolemize_in(body, universals, &extended)
        }
    }
}

/// Remove universal quantifiers; their variables become implicitly universal.
pub fn drop_universals(formula: &Formula) -> Formula {
    match formula {
        Formula::True | Formula::False | Formula::Atom(_) => formula.clone(),
        Formula::Not(inner) => Formula::negation(drop_universals(inner)),
        Formula::And(l, r) => Formula::and(drop_universals(l), drop_universals(r)),
        Formula::Or(l, r) => Formula::or(drop_universals(l), drop_universals(r)),
        Formula::Implies(l, r) => Formula::implies(drop_universals(l), drop_universals(r)),
        Formula::Iff(l, r) => Formula::iff(drop_universals(l), drop_universals(r)),
        Formula::Forall(_, body) => drop_universals(body),
        Formula::Exists(v, body) => Formula::exists(v.clone(), drop_universals(body)),
    }
}
