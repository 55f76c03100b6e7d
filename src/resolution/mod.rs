//! Resolution-based refutation.
//!
//! A query is entailed by a set of premises when the premises together with
//! the negated query are unsatisfiable. [`prove`] clausifies both and runs a
//! level-saturating given-clause loop with binary resolution and factoring
//! until the empty clause appears, no new clause can be derived, or a bound
//! in [`ProverConfig`] is reached. The three endings map to
//! [`ProofOutcome::Entailed`], [`ProofOutcome::NotEntailed`] and
//! [`ProofOutcome::Unknown`].

mod config;
mod inference;
mod prover;
mod saturation;

pub use config::ProverConfig;
pub use inference::{canonicalize, factors, rename_apart, resolvents};
pub use prover::{ask, prove, prove_with_stats, refute, AskOutcome, ProofOutcome};
pub use saturation::{ProofStats, ResourceBound, SaturationResult, SaturationState, SaturationStep};
