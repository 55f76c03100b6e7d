//! Formula syntax for first-order logic.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::literal::Atom;
use super::term::{Term, Var};
use super::BuildError;
use crate::unify::Substitution;

/// A first-order formula.
///
/// Formulas are immutable trees; sub-formulas are reference counted, so
/// rewriting passes share every subtree they leave untouched. Equality is
/// structural (no alpha-equivalence).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    True,
    False,
    Atom(Atom),
    Not(Rc<Formula>),
    And(Rc<Formula>, Rc<Formula>),
    Or(Rc<Formula>, Rc<Formula>),
    Implies(Rc<Formula>, Rc<Formula>),
    Iff(Rc<Formula>, Rc<Formula>),
    Forall(Var, Rc<Formula>),
    Exists(Var, Rc<Formula>),
}

impl Formula {
    pub fn atom(atom: Atom) -> Self {
        Formula::Atom(atom)
    }

    /// Predicate application; arity is the number of arguments.
    pub fn pred(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Formula::Atom(Atom::new(predicate, args))
    }

    /// 0-ary predicate (proposition).
    pub fn prop(predicate: impl Into<String>) -> Self {
        Formula::Atom(Atom::prop(predicate))
    }

    /// Predicate application that rejects an empty predicate name.
    pub fn try_pred(predicate: impl Into<String>, args: Vec<Term>) -> Result<Self, BuildError> {
        let predicate = predicate.into();
        if predicate.is_empty() {
            return Err(BuildError::EmptySymbol);
        }
        Ok(Formula::pred(predicate, args))
    }

    /// The atom `=(left, right)`. No equality axioms are implied.
    pub fn equals(left: Term, right: Term) -> Self {
        Formula::pred("=", vec![left, right])
    }

    pub fn negation(inner: Formula) -> Self {
        Formula::Not(Rc::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Rc::new(left), Rc::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Rc::new(left), Rc::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Rc::new(left), Rc::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Rc::new(left), Rc::new(right))
    }

    pub fn forall(var: impl Into<Var>, body: Formula) -> Self {
        Formula::Forall(var.into(), Rc::new(body))
    }

    pub fn exists(var: impl Into<Var>, body: Formula) -> Self {
        Formula::Exists(var.into(), Rc::new(body))
    }

    /// Conjunction of all formulas. Empty is `True`.
    ///
    /// The result is a balanced tree, so its depth grows with the logarithm
    /// of the number of conjuncts.
    pub fn and_all(formulas: impl IntoIterator<Item = Formula>) -> Self {
        Self::balanced(formulas.into_iter().collect(), Formula::True, Formula::and)
    }

    /// Disjunction of all formulas, as a balanced tree. Empty is `False`.
    pub fn or_all(formulas: impl IntoIterator<Item = Formula>) -> Self {
        Self::balanced(formulas.into_iter().collect(), Formula::False, Formula::or)
    }

    fn balanced(
        mut items: Vec<Formula>,
        unit: Formula,
        join: fn(Formula, Formula) -> Formula,
    ) -> Self {
        if items.len() <= 1 {
            return items.pop().unwrap_or(unit);
        }
        let right = items.split_off(items.len() / 2);
        join(
            Self::balanced(items, unit.clone(), join),
            Self::balanced(right, unit, join),
        )
    }

    /// Wrap the body in one universal quantifier per variable, outermost first.
    pub fn forall_all(vars: impl IntoIterator<Item = Var>, body: Formula) -> Self {
        let vars: Vec<Var> = vars.into_iter().collect();
        vars.into_iter()
            .rev()
            .fold(body, |acc, v| Formula::forall(v, acc))
    }

    /// Free variables in order of first occurrence.
    pub fn free_variables(&self) -> Vec<Var> {
        let mut acc = Vec::new();
        let mut bound = Vec::new();
        self.collect_free(&mut bound, &mut acc);
        acc
    }

    fn collect_free(&self, bound: &mut Vec<Var>, acc: &mut Vec<Var>) {
        match self {
            Formula::True | Formula::False => {}
            Formula::Atom(atom) => {
                let mut vars = Vec::new();
                atom.variables_in_order(&mut vars);
                for v in vars {
                    if !bound.contains(&v) && !acc.contains(&v) {
                        acc.push(v);
                    }
                }
            }
            Formula::Not(inner) => inner.collect_free(bound, acc),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => {
                l.collect_free(bound, acc);
                r.collect_free(bound, acc);
            }
            Formula::Forall(v, body) | Formula::Exists(v, body) => {
                bound.push(v.clone());
                body.collect_free(bound, acc);
                bound.pop();
            }
        }
    }

    /// A formula with no free variables.
    pub fn is_closed(&self) -> bool {
        self.free_variables().is_empty()
    }

    pub fn is_quantifier_free(&self) -> bool {
        match self {
            Formula::True | Formula::False | Formula::Atom(_) => true,
            Formula::Not(inner) => inner.is_quantifier_free(),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => l.is_quantifier_free() && r.is_quantifier_free(),
            Formula::Forall(..) | Formula::Exists(..) => false,
        }
    }

    /// Universally quantify every free variable.
    pub fn universal_closure(&self) -> Formula {
        Formula::forall_all(self.free_variables(), self.clone())
    }

    /// Apply a substitution to the free occurrences of variables.
    ///
    /// Bindings for a quantified variable are ignored inside its scope. The
    /// caller must ensure no term in the substitution's range mentions a
    /// variable bound in this formula; standardized-apart formulas satisfy this.
    pub fn apply_subst(&self, subst: &Substitution) -> Formula {
        if subst.is_empty() {
            return self.clone();
        }
        match self {
            Formula::True | Formula::False => self.clone(),
            Formula::Atom(atom) => Formula::Atom(atom.apply_subst(subst)),
            Formula::Not(inner) => Formula::negation(inner.apply_subst(subst)),
            Formula::And(l, r) => Formula::and(l.apply_subst(subst), r.apply_subst(subst)),
            Formula::Or(l, r) => Formula::or(l.apply_subst(subst), r.apply_subst(subst)),
            Formula::Implies(l, r) => {
                Formula::implies(l.apply_subst(subst), r.apply_subst(subst))
            }
            Formula::Iff(l, r) => Formula::iff(l.apply_subst(subst), r.apply_subst(subst)),
            Formula::Forall(v, body) => {
                Formula::forall(v.clone(), body.apply_subst(&subst.without(v)))
            }
            Formula::Exists(v, body) => {
                Formula::exists(v.clone(), body.apply_subst(&subst.without(v)))
            }
        }
    }

    /// Number of connectives, quantifiers and atoms.
    pub fn size(&self) -> usize {
        match self {
            Formula::True | Formula::False | Formula::Atom(_) => 1,
            Formula::Not(inner) => 1 + inner.size(),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => 1 + l.size() + r.size(),
            Formula::Forall(_, body) | Formula::Exists(_, body) => 1 + body.size(),
        }
    }
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Formula::Atom(atom)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::True => write!(f, "true"),
            Formula::False => write!(f, "false"),
            Formula::Atom(atom) => write!(f, "{}", atom),
            Formula::Not(inner) => write!(f, "(not {})", inner),
            Formula::And(l, r) => write!(f, "(and {} {})", l, r),
            Formula::Or(l, r) => write!(f, "(or {} {})", l, r),
            Formula::Implies(l, r) => write!(f, "(implies {} {})", l, r),
            Formula::Iff(l, r) => write!(f, "(iff {} {})", l, r),
            Formula::Forall(v, body) => write!(f, "(forall {} {})", v, body),
            Formula::Exists(v, body) => write!(f, "(exists {} {})", v, body),
        }
    }
}
