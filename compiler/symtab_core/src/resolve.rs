//! Name resolution along the scope chain.
//!
//! Resolution starts at a scope and walks parent links outward. The first
//! scope whose table holds the name wins, so inner bindings shadow outer
//! ones. Resolution never mutates any scope.

use crate::{ScopeChain, ScopeId, Value};

/// Outcome of resolving a name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The innermost binding for the name.
    Found {
        value: Value,
        /// Level of the scope holding the binding.
        level: u32,
        scope: ScopeId,
        /// Slot index in that scope's table.
        slot: usize,
    },
    /// No scope between the start and the root binds the name.
    NotFound,
}

impl Resolution {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    /// The resolved value, if any.
    #[inline]
    pub fn value(&self) -> Option<Value> {
        match self {
            Resolution::Found { value, .. } => Some(*value),
            Resolution::NotFound => None,
        }
    }
}

impl ScopeChain {
    /// Resolve `name` starting from the active scope.
    pub fn resolve(&self, name: &str) -> Resolution {
        self.resolve_from(self.active(), name)
    }

    /// Resolve `name` starting from `from`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve_from(&self, from: ScopeId, name: &str) -> Resolution {
        for scope in self.ancestors(from) {
            if let Some((slot, binding)) = scope.table().find(name) {
                tracing::trace!(level = scope.level(), slot, "resolved");
                return Resolution::Found {
                    value: binding.value(),
                    level: scope.level(),
                    scope: scope.id(),
                    slot,
                };
            }
        }
        tracing::trace!("unresolved");
        Resolution::NotFound
    }
}
