//! Unification algorithm: Robinson's algorithm for computing MGU.

use super::Substitution;
use crate::syntax::{Atom, Literal, Term, Var};

/// Result of a unification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyResult {
    /// Unification succeeded with the given most general unifier.
    Success(Substitution),
    /// Unification failed.
    Failure(UnifyError),
}

impl UnifyResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UnifyResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, UnifyResult::Failure(_))
    }

    /// The unifier, discarding the failure reason.
    pub fn ok(self) -> Option<Substitution> {
        match self {
            UnifyResult::Success(subst) => Some(subst),
            UnifyResult::Failure(_) => None,
        }
    }
}

/// Reasons why unification can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyError {
    /// Occurs check failed: variable would occur in its own binding.
    OccursCheck { var: Var, term: Term },
    /// Function or predicate symbols don't match.
    SymbolClash { expected: String, found: String },
    /// Arity mismatch for function application.
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },
}

/// Compute the most general unifier of two terms.
///
/// Uses Robinson's unification algorithm with occurs check.
pub fn unify(t1: &Term, t2: &Term) -> UnifyResult {
    unify_many(&[(t1.clone(), t2.clone())])
}

/// Compute the MGU of two atoms: predicate symbol and arity must agree, then
/// the argument tuples are unified left to right.
pub fn unify_atoms(a1: &Atom, a2: &Atom) -> UnifyResult {
    if a1.predicate != a2.predicate {
        return UnifyResult::Failure(UnifyError::SymbolClash {
            expected: a1.predicate.clone(),
            found: a2.predicate.clone(),
        });
    }
    if a1.args.len() != a2.args.len() {
        return UnifyResult::Failure(UnifyError::ArityMismatch {
            symbol: a1.predicate.clone(),
            expected: a1.args.len(),
            found: a2.args.len(),
        });
    }
    let pairs: Vec<(Term, Term)> = a1
        .args
        .iter()
        .cloned()
        .zip(a2.args.iter().cloned())
        .collect();
    unify_many(&pairs)
}

/// Compute the MGU of two literals (atoms must match, ignoring sign).
///
/// For resolution the caller passes complementary literals; the sign is not
/// inspected here.
pub fn unify_literals(l1: &Literal, l2: &Literal) -> UnifyResult {
    unify_atoms(&l1.atom, &l2.atom)
}

/// Simultaneous unification of multiple term pairs.
///
/// Finds a substitution σ such that σ(t1ᵢ) = σ(t2ᵢ) for all pairs. Pairs are
/// solved left to right, each under the bindings accumulated so far; the
/// result is idempotent.
pub fn unify_many(pairs: &[(Term, Term)]) -> UnifyResult {
    let mut sigma = Substitution::empty();
    // Reversed so that popping visits pairs left to right.
    let mut stack: Vec<(Term, Term)> = pairs.iter().rev().cloned().collect();

    while let Some((left, right)) = stack.pop() {
        let left = sigma.apply_to_term(&left);
        let right = sigma.apply_to_term(&right);
        if left == right {
            continue;
        }
        match (&left, &right) {
            (Term::Var(var), other) | (other, Term::Var(var)) => {
                if other.occurs(var) {
                    return UnifyResult::Failure(UnifyError::OccursCheck {
                        var: var.clone(),
                        term: other.clone(),
                    });
                }
                let binding = Substitution::singleton(var.clone(), other.clone());
                sigma = binding.compose(&sigma);
            }
            (Term::App(f, f_args), Term::App(g, g_args)) => {
                if f.name != g.name {
                    return UnifyResult::Failure(UnifyError::SymbolClash {
                        expected: f.name.clone(),
                        found: g.name.clone(),
                    });
                }
                if f_args.len() != g_args.len() {
                    return UnifyResult::Failure(UnifyError::ArityMismatch {
                        symbol: f.name.clone(),
                        expected: f_args.len(),
                        found: g_args.len(),
                    });
                }
                for (a, b) in f_args.iter().zip(g_args.iter()).rev() {
                    stack.push((a.clone(), b.clone()));
                }
            }
        }
    }

    UnifyResult::Success(sigma)
}
