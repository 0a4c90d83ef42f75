//! Scope chain errors.
//!
//! All of these are local: the failing operation is a no-op and the chain
//! can keep processing commands.

use crate::Ident;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// The active scope's table has no empty, vacated, or matching slot
    /// anywhere along the probe sequence.
    #[error("symbol table of scope level {level} is full, cannot assign `{name}`")]
    CapacityExceeded { level: u32, name: Ident },
    /// Exit requested while the global scope is active.
    #[error("cannot exit global scope")]
    CannotExitGlobalScope,
    /// Enter requested after `limit` scopes were already created.
    #[error("cannot create scope: limit of {limit} scopes reached")]
    ScopeLimitReached { limit: usize },
}
