//! Distribution of disjunction over conjunction and flattening into clauses.

use indexmap::IndexSet;

use crate::syntax::{Clause, Formula, Literal};

use super::nnf::push_negations;
use super::skolem::{drop_universals, skolemize, standardize_apart};

/// Distribute `or` over `and` until the formula is a conjunction of
/// disjunctions of literals. `True` and `False` are folded away on the way
/// unless the whole formula reduces to one of them.
///
/// Each rewrite moves an `and` strictly above an `or`, so the recursion is
/// bounded by the nesting of `or` over `and` in the input.
pub fn distribute(formula: &Formula) -> Formula {
    match formula {
        Formula::And(l, r) => conjoin(distribute(l), distribute(r)),
        Formula::Or(l, r) => disjoin(distribute(l), distribute(r)),
        _ => formula.clone(),
    }
}

fn conjoin(left: Formula, right: Formula) -> Formula {
    match (&left, &right) {
        (Formula::False, _) | (_, Formula::False) => Formula::False,
        (Formula::True, _) => right,
        (_, Formula::True) => left,
        _ => Formula::and(left, right),
    }
}

fn disjoin(left: Formula, right: Formula) -> Formula {
    match (&left, &right) {
        (Formula::True, _) | (_, Formula::True) => Formula::True,
        (Formula::False, _) => right,
        (_, Formula::False) => left,
        (Formula::And(l1, l2), _) => conjoin(
            disjoin(l1.as_ref().clone(), right.clone()),
            disjoin(l2.as_ref().clone(), right.clone()),
        ),
        (_, Formula::And(r1, r2)) => conjoin(
            disjoin(left.clone(), r1.as_ref().clone()),
            disjoin(left.clone(), r2.as_ref().clone()),
        ),
        _ => Formula::or(left, right),
    }
}

/// Flatten a formula into a clause set: one clause per conjunct, one literal
/// per disjunct. Duplicate literals and duplicate clauses collapse and
/// tautologies are dropped. `False` yields the empty clause.
///
/// Input that is not yet a quantifier-free negation normal form is normalized
/// first.
pub fn flatten(formula: &Formula) -> Vec<Clause> {
    let mut clauses: IndexSet<Clause> = IndexSet::new();
    for literals in literal_sets(formula) {
        let clause = Clause::new(literals);
        if !clause.is_tautology() {
            clauses.insert(clause);
        }
    }
    clauses.into_iter().collect()
}

fn literal_sets(formula: &Formula) -> Vec<Vec<Literal>> {
    match formula {
        Formula::True => vec![],
        Formula::False => vec![vec![]],
        Formula::Atom(atom) => vec![vec![Literal::positive(atom.clone())]],
        Formula::Not(inner) => match inner.as_ref() {
            Formula::Atom(atom) => vec![vec![Literal::negative(atom.clone())]],
            _ => literal_sets(&push_negations(formula)),
        },
        Formula::And(l, r) => {
            let mut sets = literal_sets(l);
            sets.extend(literal_sets(r));
            sets
        }
        Formula::Or(l, r) => {
            let left = literal_sets(l);
            let right = literal_sets(r);
            let mut product = Vec::with_capacity(left.len() * right.len());
            for a in &left {
                for b in &right {
                    let mut clause = a.clone();
                    clause.extend(b.iter().cloned());
                    product.push(clause);
                }
            }
            product
        }
        Formula::Implies(..) | Formula::Iff(..) => literal_sets(&push_negations(formula)),
        Formula::Forall(..) | Formula::Exists(..) => {
            literal_sets(&drop_universals(&skolemize(&standardize_apart(&push_negations(formula)))))
        }
    }
}
