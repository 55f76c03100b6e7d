//! Clauses: disjunctions of literals in conjunctive normal form.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::literal::Literal;
use super::term::Var;
use crate::unify::Substitution;

/// A clause is a set of literals, read as their disjunction: `L1 ∨ L2 ∨ ... ∨ Ln`.
///
/// Literals are kept sorted and deduplicated, so two clauses holding the same
/// literals compare (and hash) equal regardless of construction order.
///
/// Examples:
/// - Unit clause: `(Person alice)`
/// - Binary: `¬(Person x) ∨ (Parent x (sk!3 x))`
/// - Empty clause: `⊥` (contradiction)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<Literal>", into = "Vec<Literal>")]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Create a clause from literals; duplicates collapse.
    pub fn new(mut literals: Vec<Literal>) -> Self {
        literals.sort();
        literals.dedup();
        Clause { literals }
    }

    /// Create the empty clause (represents contradiction/false).
    pub fn empty() -> Self {
        Clause {
            literals: Vec::new(),
        }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Literal> {
        self.literals.iter()
    }

    /// Check if this is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// A clause holding some literal together with its complement.
    pub fn is_tautology(&self) -> bool {
        // Sorting by atom puts complementary literals next to each other.
        self.literals
            .windows(2)
            .any(|pair| pair[0].is_complementary(&pair[1]))
    }

    /// Collect all variables in this clause.
    pub fn variables(&self) -> HashSet<Var> {
        let mut set = HashSet::new();
        for lit in &self.literals {
            for arg in &lit.atom.args {
                arg.collect_variables(&mut set);
            }
        }
        set
    }

    /// Variables in order of first occurrence.
    pub fn variables_in_order(&self) -> Vec<Var> {
        let mut acc = Vec::new();
        for lit in &self.literals {
            lit.atom.variables_in_order(&mut acc);
        }
        acc
    }

    /// Check if this clause is ground (contains no variables).
    pub fn is_ground(&self) -> bool {
        self.literals.iter().all(Literal::is_ground)
    }

    /// Apply a substitution to this clause; literals that become equal merge.
    pub fn apply_subst(&self, subst: &Substitution) -> Clause {
        Clause::new(self.literals.iter().map(|l| l.apply_subst(subst)).collect())
    }

    /// Get the number of literals in this clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl From<Clause> for Vec<Literal> {
    fn from(clause: Clause) -> Self {
        clause.literals
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = std::slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "⊥");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}
