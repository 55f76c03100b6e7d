//! Fresh identifiers for renamed variables and Skolem symbols.
//!
//! This counter is the only global mutable state in the crate. Ids start at 1
//! because id 0 marks variables written by clients.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::syntax::{FnSym, Var};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

fn next_id() -> u32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A copy of `var` that no other variable shares.
pub(crate) fn fresh_var(var: &Var) -> Var {
    Var::indexed(var.name(), next_id())
}

/// A function symbol that occurs nowhere else.
///
/// Skolem names contain `!`, which client symbols are expected not to use.
pub(crate) fn skolem_symbol(arity: usize) -> FnSym {
    FnSym::new(format!("sk!{}", next_id()), arity)
}
