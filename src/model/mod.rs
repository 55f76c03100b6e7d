//! Finite model checking.
//!
//! An [`Interpretation`] fixes a finite domain and an explicit extension for
//! every predicate and function symbol; [`evaluate`] computes the truth value
//! of a formula in it. Nothing here goes through clausification.

mod evaluate;
mod interpretation;

use thiserror::Error;

use crate::syntax::Var;

pub use evaluate::{check_model, evaluate, evaluate_clauses};
pub use interpretation::{Function, Interpretation, Relation};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("predicate '{0}' has no extension in the interpretation")]
    UndefinedPredicate(String),

    #[error("function symbol '{0}' has no extension in the interpretation")]
    UndefinedFunction(String),

    #[error("variable '{0}' is neither quantified nor assigned")]
    UnboundVariable(Var),

    #[error("'{symbol}' is interpreted with arity {expected} but used with {found} argument(s)")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("function '{symbol}' defines {defined} of {expected} entries")]
    PartialFunction {
        symbol: String,
        defined: usize,
        expected: usize,
    },

    #[error("'{0}' is not a domain element")]
    NotInDomain(String),
}
