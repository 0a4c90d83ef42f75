//! Scope identifiers - indices into the scope arena.

use std::fmt;

/// Index of a scope in its [`ScopeChain`](crate::ScopeChain).
///
/// Ids are assigned in creation order and never reused; the global
/// scope is always [`ScopeId::ROOT`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The global scope.
    pub const ROOT: ScopeId = ScopeId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ScopeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}
