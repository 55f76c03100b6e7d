//! Syntax types for first-order logic terms, literals, clauses and formulas.

mod clause;
mod formula;
mod literal;
mod signature;
mod term;

use thiserror::Error;

pub use clause::Clause;
pub use formula::Formula;
pub use literal::{Atom, Literal};
pub use signature::{PredSym, Signature};
pub use term::{FnSym, Term, Var};

/// Errors raised while building formulas and terms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("symbol '{symbol}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("symbol name must not be empty")]
    EmptySymbol,
}
