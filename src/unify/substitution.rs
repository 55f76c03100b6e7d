//! Substitution: mapping variables to terms.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::syntax::{Term, Var};

/// A substitution mapping variables to terms.
///
/// A substitution σ = {X₁ → t₁, ..., Xₙ → tₙ} is applied simultaneously: the
/// terms substituted in are not themselves rewritten again.
///
/// Serialized as a list of `(variable, term)` pairs ordered by variable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<(Var, Term)>", from = "Vec<(Var, Term)>")]
pub struct Substitution {
    bindings: HashMap<Var, Term>,
}

impl Substitution {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    /// Create a substitution with a single binding.
    pub fn singleton(var: Var, term: Term) -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(var, term);
        Substitution { bindings }
    }

    /// Add a binding to this substitution.
    pub fn bind(&mut self, var: Var, term: Term) {
        self.bindings.insert(var, term);
    }

    /// Look up a variable in this substitution.
    pub fn lookup(&self, var: &Var) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// This substitution with the binding for `var` removed.
    pub fn without(&self, var: &Var) -> Substitution {
        if !self.bindings.contains_key(var) {
            return self.clone();
        }
        let mut result = self.clone();
        result.bindings.remove(var);
        result
    }

    /// Compose two substitutions: (self ∘ other)(x) = self(other(x))
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::empty();

        // First, apply self to all bindings in other
        for (var, term) in &other.bindings {
            result.bind(var.clone(), self.apply_to_term(term));
        }

        // Then add bindings from self that aren't in other's domain
        for (var, term) in &self.bindings {
            if !other.bindings.contains_key(var) {
                result.bind(var.clone(), term.clone());
            }
        }

        result
    }

    /// Apply this substitution to a term.
    pub fn apply_to_term(&self, term: &Term) -> Term {
        if self.bindings.is_empty() {
            return term.clone();
        }
        self.rewrite(term).unwrap_or_else(|| term.clone())
    }

    /// Rewritten term, or `None` when nothing changed so the caller keeps
    /// sharing the original.
    fn rewrite(&self, term: &Term) -> Option<Term> {
        match term {
            Term::Var(var) => self.bindings.get(var).cloned(),
            Term::App(fn_sym, args) => {
                let rewritten: Vec<Option<Term>> = args.iter().map(|a| self.rewrite(a)).collect();
                if rewritten.iter().all(Option::is_none) {
                    return None;
                }
                let new_args: Vec<Term> = rewritten
                    .into_iter()
                    .zip(args.iter())
                    .map(|(new, old)| new.unwrap_or_else(|| old.clone()))
                    .collect();
                Some(Term::App(fn_sym.clone(), new_args.into()))
            }
        }
    }

    /// Get the domain of this substitution (variables that are mapped).
    pub fn domain(&self) -> HashSet<&Var> {
        self.bindings.keys().collect()
    }

    /// Iterate over the bindings in this substitution.
    pub fn bindings(&self) -> impl Iterator<Item = (&Var, &Term)> {
        self.bindings.iter()
    }

    /// Bindings ordered by variable, for stable output.
    pub fn sorted(&self) -> BTreeMap<&Var, &Term> {
        self.bindings.iter().collect()
    }

    /// Check if this substitution is empty (has no bindings).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if this substitution is a variable renaming.
    /// A renaming maps variables to variables injectively.
    pub fn is_renaming(&self) -> bool {
        let mut target_vars: HashSet<&Var> = HashSet::new();
        self.bindings.values().all(|term| match term {
            Term::Var(v) => target_vars.insert(v),
            _ => false,
        })
    }
}

impl FromIterator<(Var, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Var, Term)>>(iter: I) -> Self {
        Substitution {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(Var, Term)>> for Substitution {
    fn from(bindings: Vec<(Var, Term)>) -> Self {
        bindings.into_iter().collect()
    }
}

impl From<Substitution> for Vec<(Var, Term)> {
    fn from(subst: Substitution) -> Self {
        let mut bindings: Vec<(Var, Term)> = subst.bindings.into_iter().collect();
        bindings.sort();
        bindings
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ↦ {}", var, term)?;
        }
        write!(f, "}}")
    }
}
