//! Connective elimination and negation normal form.

use crate::syntax::Formula;

/// Rewrite `A iff B` to `(¬A ∨ B) ∧ (¬B ∨ A)` and `A implies B` to `¬A ∨ B`.
pub fn eliminate_implications(formula: &Formula) -> Formula {
    match formula {
        Formula::True | Formula::False | Formula::Atom(_) => formula.clone(),
        Formula::Not(inner) => Formula::negation(eliminate_implications(inner)),
        Formula::And(l, r) => Formula::and(eliminate_implications(l), eliminate_implications(r)),
        Formula::Or(l, r) => Formula::or(eliminate_implications(l), eliminate_implications(r)),
        Formula::Implies(l, r) => Formula::or(
            Formula::negation(eliminate_implications(l)),
            eliminate_implications(r),
        ),
        Formula::Iff(l, r) => {
            let l = eliminate_implications(l);
            let r = eliminate_implications(r);
            Formula::and(
                Formula::or(Formula::negation(l.clone()), r.clone()),
                Formula::or(Formula::negation(r), l),
            )
        }
        Formula::Forall(v, body) => Formula::forall(v.clone(), eliminate_implications(body)),
        Formula::Exists(v, body) => Formula::exists(v.clone(), eliminate_implications(body)),
    }
}

/// Push negations down to the atoms (De Morgan, double negation, quantifier
/// duality). Negated constants fold to the opposite constant.
///
/// Implications still present are eliminated on the way.
pub fn push_negations(formula: &Formula) -> Formula {
    nnf(formula, false)
}

fn nnf(formula: &Formula, negate: bool) -> Formula {
    match formula {
        Formula::True => {
            if negate {
                Formula::False
            } else {
                Formula::True
            }
        }
        Formula::False => {
            if negate {
                Formula::True
            } else {
                Formula::False
            }
        }
        Formula::Atom(_) => {
            if negate {
                Formula::negation(formula.clone())
            } else {
                formula.clone()
            }
        }
        Formula::Not(inner) => nnf(inner, !negate),
        Formula::And(l, r) => {
            if negate {
                Formula::or(nnf(l, true), nnf(r, true))
            } else {
                Formula::and(nnf(l, false), nnf(r, false))
            }
        }
        Formula::Or(l, r) => {
            if negate {
                Formula::and(nnf(l, true), nnf(r, true))
            } else {
                Formula::or(nnf(l, false), nnf(r, false))
            }
        }
        Formula::Implies(..) | Formula::Iff(..) => nnf(&eliminate_implications(formula), negate),
        Formula::Forall(v, body) => {
            if negate {
                Formula::exists(v.clone(), nnf(body, true))
            } else {
                Formula::forall(v.clone(), nnf(body, false))
            }
        }
        Formula::Exists(v, body) => {
            if negate {
                Formula::forall(v.clone(), nnf(body, true))
            } else {
                Formula::exists(v.clone(), nnf(body, false))
            }
        }
    }
}
