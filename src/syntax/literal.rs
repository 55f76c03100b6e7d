//! Literals: signed atoms in first-order logic.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::term::{Term, Var};
use crate::unify::Substitution;

/// An atom (predicate application).
///
/// In S-expression syntax: `(predicate arg1 arg2 ...)`
/// Examples:
/// - `(Person alice)` - unary predicate
/// - `(Parent x y)` - binary predicate
/// - `Rain` - 0-ary predicate (proposition)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Atom {
    pub predicate: String,
    pub args: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Atom {
            predicate: predicate.into(),
            args,
        }
    }

    /// Create a 0-ary atom (proposition).
    pub fn prop(predicate: impl Into<String>) -> Self {
        Atom::new(predicate, vec![])
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Collect all variables in this atom.
    pub fn variables(&self) -> HashSet<Var> {
        let mut set = HashSet::new();
        for arg in &self.args {
            arg.collect_variables(&mut set);
        }
        set
    }

    pub(crate) fn variables_in_order(&self, acc: &mut Vec<Var>) {
        for arg in &self.args {
            arg.variables_in_order(acc);
        }
    }

    /// Check if this atom is ground (contains no variables).
    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_ground)
    }

    /// Apply a substitution to this atom.
    pub fn apply_subst(&self, subst: &Substitution) -> Atom {
        Atom {
            predicate: self.predicate.clone(),
            args: self.args.iter().map(|t| subst.apply_to_term(t)).collect(),
        }
    }

    /// Whether this atom can possibly unify with `other` (same symbol and arity).
    pub fn same_symbol(&self, other: &Atom) -> bool {
        self.predicate == other.predicate && self.args.len() == other.args.len()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            return write!(f, "{}", self.predicate);
        }
        write!(f, "({}", self.predicate)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(f, ")")
    }
}

/// A literal is a signed atom.
///
/// - Positive literal: `(Person alice)` means "Person(alice) is true"
/// - Negative literal: `¬(Person alice)` means "Person(alice) is false"
///
/// Field order matters for the derived ordering: literals sort by atom first,
/// so a literal and its complement end up next to each other in a clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    /// The underlying atom
    pub atom: Atom,
    /// True if positive, false if negated
    pub positive: bool,
}

impl Literal {
    /// Create a positive literal.
    pub fn positive(atom: Atom) -> Self {
        Literal {
            atom,
            positive: true,
        }
    }

    /// Create a negative literal.
    pub fn negative(atom: Atom) -> Self {
        Literal {
            atom,
            positive: false,
        }
    }

    /// Create a positive literal from predicate and args.
    pub fn pos(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Literal::positive(Atom::new(predicate, args))
    }

    /// Create a negative literal from predicate and args.
    pub fn neg(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Literal::negative(Atom::new(predicate, args))
    }

    /// Return the negation of this literal.
    pub fn negated(&self) -> Literal {
        Literal {
            atom: self.atom.clone(),
            positive: !self.positive,
        }
    }

    /// Check if this literal is complementary to another.
    /// Two literals are complementary if they have the same atom but opposite signs.
    pub fn is_complementary(&self, other: &Literal) -> bool {
        self.positive != other.positive && self.atom == other.atom
    }

    /// Collect all variables in this literal.
    pub fn variables(&self) -> HashSet<Var> {
        self.atom.variables()
    }

    /// Check if this literal is ground.
    pub fn is_ground(&self) -> bool {
        self.atom.is_ground()
    }

    /// Apply a substitution to this literal.
    pub fn apply_subst(&self, subst: &Substitution) -> Literal {
        Literal {
            atom: self.atom.apply_subst(subst),
            positive: self.positive,
        }
    }

    /// Sign, predicate and argument structure with variables blanked out.
    pub(crate) fn shape(&self) -> String {
        let mut out = String::new();
        out.push(if self.positive { '+' } else { '-' });
        out.push_str(&self.atom.predicate);
        for arg in &self.atom.args {
            out.push(' ');
            arg.write_shape(&mut out);
        }
        out
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.atom)
        } else {
            write!(f, "¬{}", self.atom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_construction() {
        let atom = Atom::new("Person", vec![Term::constant("alice")]);
        assert_eq!(atom.predicate, "Person");
        assert_eq!(atom.arity(), 1);
        assert!(Atom::prop("Rain").args.is_empty());
    }

    #[test]
    fn test_negation_flips_sign() {
        let pos = Literal::pos("p", vec![]);
        let neg = pos.negated();
        assert!(!neg.positive);
        assert_eq!(neg.atom, pos.atom);
        assert_eq!(neg.negated(), pos);
    }

    #[test]
    fn test_complementary_requires_identical_atoms() {
        let pos = Literal::pos("p", vec![Term::var("x")]);
        let neg = Literal::neg("p", vec![Term::var("x")]);
        assert!(pos.is_complementary(&neg));
        assert!(neg.is_complementary(&pos));
        assert!(!pos.is_complementary(&pos));
        // Unifiable but not identical atoms are not complementary.
        assert!(!pos.is_complementary(&Literal::neg("p", vec![Term::var("y")])));
    }

    #[test]
    fn test_literal_subst_preserves_sign() {
        let lit = Literal::neg("p", vec![Term::var("x")]);
        let subst = Substitution::singleton(Var::new("x"), Term::constant("a"));
        let result = lit.apply_subst(&subst);
        assert!(!result.positive);
        assert_eq!(result.atom.args[0], Term::constant("a"));
        assert!(result.is_ground());
    }

    #[test]
    fn test_literal_display() {
        let lit = Literal::neg("Parent", vec![Term::constant("alice"), Term::var("y")]);
        assert_eq!(lit.to_string(), "¬(Parent alice y)");
        assert_eq!(Literal::pos("Rain", vec![]).to_string(), "Rain");
    }

    #[test]
    fn test_shape_distinguishes_sign_but_not_names() {
        let a = Literal::pos("p", vec![Term::var("x")]);
        let b = Literal::pos("p", vec![Term::var("y")]);
        assert_eq!(a.shape(), b.shape());
        assert_ne!(a.shape(), a.negated().shape());
    }
}
