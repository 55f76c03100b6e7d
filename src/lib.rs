//! reslog: refutation-based reasoning over first-order formulas.
//!
//! Formulas are built programmatically ([`syntax`]), clausified
//! ([`normalize`]) and handed to a resolution prover ([`resolution`]) that
//! answers `Entailed`, `NotEntailed` or `Unknown` under a resource bound.
//! Independently, [`model`] evaluates formulas in explicit finite
//! interpretations.
//!
//! ```
//! use reslog::syntax::{Formula, Term};
//! use reslog::resolution::{prove, ProverConfig};
//!
//! let person = |t| Formula::pred("Person", vec![t]);
//! let mortal = |t| Formula::pred("Mortal", vec![t]);
//! let premises = vec![
//!     Formula::forall("x", Formula::implies(person(Term::var("x")), mortal(Term::var("x")))),
//!     person(Term::constant("socrates")),
//! ];
//! let outcome = prove(&premises, &mortal(Term::constant("socrates")), &ProverConfig::default());
//! assert!(outcome.is_entailed());
//! ```

pub mod model;
pub mod normalize;
pub mod resolution;
pub mod syntax;
pub mod theory;
pub mod unify;

use thiserror::Error;

pub use model::{check_model, evaluate, Interpretation, ModelError};
pub use normalize::to_cnf;
pub use resolution::{ask, prove, AskOutcome, ProofOutcome, ProverConfig};
pub use syntax::{BuildError, Clause, Formula, Literal, Term, Var};
pub use theory::Theory;

/// Errors surfaced to clients of the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid formula: {0}")]
    Build(#[from] BuildError),

    #[error("model checking failed: {0}")]
    Model(#[from] ModelError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests;
