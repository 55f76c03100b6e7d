//! Signatures (predicate and function symbols with arities) and declared
//! predicate symbols.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{BuildError, Clause, Formula, Term};

/// Symbols occurring in a formula or a clause set.
///
/// Constants are recorded as 0-ary functions. A symbol used with two different
/// arities appears twice; the core does not reject this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub predicates: BTreeSet<(String, usize)>,
    pub functions: BTreeSet<(String, usize)>,
}

impl Signature {
    pub fn empty() -> Self {
        Signature::default()
    }

    /// Merge another signature into this one.
    pub fn extend(&mut self, other: &Signature) {
        self.predicates.extend(other.predicates.iter().cloned());
        self.functions.extend(other.functions.iter().cloned());
    }

    /// Collect symbols from a clause.
    pub fn from_clause(clause: &Clause) -> Signature {
        let mut sig = Signature::empty();
        for lit in clause {
            sig.predicates
                .insert((lit.atom.predicate.clone(), lit.atom.args.len()));
            for arg in &lit.atom.args {
                collect_term_symbols(arg, &mut sig);
            }
        }
        sig
    }

    /// Collect symbols from a formula.
    pub fn from_formula(formula: &Formula) -> Signature {
        let mut sig = Signature::empty();
        collect_formula_symbols(formula, &mut sig);
        sig
    }

    /// Constants (0-ary functions).
    pub fn constants(&self) -> impl Iterator<Item = &str> {
        self.functions
            .iter()
            .filter(|(_, arity)| *arity == 0)
            .map(|(name, _)| name.as_str())
    }
}

fn collect_formula_symbols(formula: &Formula, sig: &mut Signature) {
    match formula {
        Formula::True | Formula::False => {}
        Formula::Atom(atom) => {
            sig.predicates
                .insert((atom.predicate.clone(), atom.args.len()));
            for arg in &atom.args {
                collect_term_symbols(arg, sig);
            }
        }
        Formula::Not(inner) => collect_formula_symbols(inner, sig),
        Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
            collect_formula_symbols(l, sig);
            collect_formula_symbols(r, sig);
        }
        Formula::Forall(_, body) | Formula::Exists(_, body) => collect_formula_symbols(body, sig),
    }
}

fn collect_term_symbols(term: &Term, sig: &mut Signature) {
    match term {
        Term::Var(_) => {}
        Term::App(sym, args) => {
            sig.functions.insert((sym.name.clone(), sym.arity));
            for a in args.iter() {
                collect_term_symbols(a, sig);
            }
        }
    }
}

/// A predicate symbol declared with a fixed arity.
///
/// Building atoms through a declaration reports arity mistakes immediately
/// instead of letting them surface as a missing proof.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredSym {
    pub name: String,
    pub arity: usize,
}

impl PredSym {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        PredSym {
            name: name.into(),
            arity,
        }
    }

    pub fn apply(&self, args: Vec<Term>) -> Result<Formula, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptySymbol);
        }
        if args.len() != self.arity {
            return Err(BuildError::ArityMismatch {
                symbol: self.name.clone(),
                expected: self.arity,
                found: args.len(),
            });
        }
        Ok(Formula::pred(self.name.clone(), args))
    }
}
