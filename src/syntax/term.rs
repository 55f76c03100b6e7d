//! First-order terms: variables and function applications (including 0-ary constants).

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::BuildError;
use crate::unify::Substitution;

/// A variable in first-order logic.
///
/// Variables written by a client carry `id == 0`. Renamed copies produced while
/// standardizing apart keep the original name and get a fresh non-zero id, so
/// they can never collide with a client-chosen name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Var {
    name: String,
    id: u32,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Var {
            name: name.into(),
            id: 0,
        }
    }

    /// A variable with an explicit renaming index.
    pub fn indexed(name: impl Into<String>, id: u32) -> Self {
        Var {
            name: name.into(),
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var::new(name)
    }
}

impl From<String> for Var {
    fn from(name: String) -> Self {
        Var::new(name)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id == 0 {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}_{}", self.name, self.id)
        }
    }
}

/// A function symbol with its arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FnSym {
    pub name: String,
    pub arity: usize,
}

impl FnSym {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FnSym {
            name: name.into(),
            arity,
        }
    }

    /// Apply this symbol to arguments, checking the declared arity.
    pub fn apply(&self, args: Vec<Term>) -> Result<Term, BuildError> {
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
        Ok(Term::App(self.clone(), args.into()))
    }
}

/// A first-order term.
///
/// Terms are built from variables and function applications (constants are 0-ary
/// applications). Argument lists are reference counted, so substituting into a
/// term shares every subterm the substitution leaves unchanged.
///
/// Rendered in S-expression syntax:
/// - Variables: `x`, `y_12`
/// - Constants: `alice`, `zero`
/// - Applications: `(succ zero)`, `(f x y)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// A variable
    Var(Var),
    /// Function application: f(t1, ..., tn)
    App(FnSym, Rc<[Term]>),
}

impl Term {
    /// Create a variable term.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(Var::new(name))
    }

    /// Create a constant term.
    pub fn constant(name: impl Into<String>) -> Self {
        Term::App(FnSym::new(name, 0), Rc::from(Vec::new()))
    }

    /// Create a function application term.
    pub fn app(name: impl Into<String>, args: Vec<Term>) -> Self {
        let arity = args.len();
        Term::App(FnSym::new(name, arity), args.into())
    }

    /// Collect all variables occurring in this term.
    pub fn variables(&self) -> HashSet<Var> {
        let mut set = HashSet::new();
        self.collect_variables(&mut set);
        set
    }

    pub(crate) fn collect_variables(&self, acc: &mut HashSet<Var>) {
        match self {
            Term::Var(var) => {
                acc.insert(var.clone());
            }
            Term::App(_, args) => {
                for arg in args.iter() {
                    arg.collect_variables(acc);
                }
            }
        }
    }

    /// Variables in left-to-right order of first occurrence, without repeats.
    pub(crate) fn variables_in_order(&self, acc: &mut Vec<Var>) {
        match self {
            Term::Var(var) => {
                if !acc.contains(var) {
                    acc.push(var.clone());
                }
            }
            Term::App(_, args) => {
                for arg in args.iter() {
                    arg.variables_in_order(acc);
                }
            }
        }
    }

    /// Check if this term contains no variables (is ground).
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::App(_, args) => args.iter().all(|arg| arg.is_ground()),
        }
    }

    /// Check if this term is a constant (0-ary application).
    pub fn is_constant(&self) -> bool {
        matches!(self, Term::App(sym, _) if sym.arity == 0)
    }

    /// Apply a substitution to this term.
    pub fn apply_subst(&self, subst: &Substitution) -> Term {
        subst.apply_to_term(self)
    }

    /// Check if a variable occurs in this term (for occurs check in unification).
    pub fn occurs(&self, var: &Var) -> bool {
        match self {
            Term::Var(v) => v == var,
            Term::App(_, args) => args.iter().any(|arg| arg.occurs(var)),
        }
    }

    /// Number of symbol occurrences in the term.
    pub fn size(&self) -> usize {
        match self {
            Term::Var(_) => 1,
            Term::App(_, args) => 1 + args.iter().map(Term::size).sum::<usize>(),
        }
    }

    /// Write the term with every variable blanked out; used to order literals
    /// independently of variable names.
    pub(crate) fn write_shape(&self, out: &mut String) {
        match self {
            Term::Var(_) => out.push('?'),
            Term::App(sym, args) => {
                out.push('(');
                out.push_str(&sym.name);
                for arg in args.iter() {
                    out.push(' ');
                    arg.write_shape(out);
                }
                out.push(')');
            }
        }
    }
}

impl From<Var> for Term {
    fn from(var: Var) -> Self {
        Term::Var(var)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(var) => write!(f, "{}", var),
            Term::App(fn_sym, args) => {
                if args.is_empty() {
                    write!(f, "{}", fn_sym.name)
                } else {
                    write!(f, "({}", fn_sym.name)?;
                    for arg in args.iter() {
                        write!(f, " {}", arg)?;
                    }
                    write!(f, ")")
                }
            }
        }
    }
}
