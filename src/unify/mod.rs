//! Unification: computing most general unifiers for first-order terms.

mod substitution;
#[allow(clippy::module_inception)]
mod unify;

pub use substitution::Substitution;
pub use unify::{unify, unify_atoms, unify_literals, unify_many, UnifyError, UnifyResult};
