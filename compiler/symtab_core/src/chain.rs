//! Scope chain: the arena of all scopes plus the active-scope cursor.
//!
//! Scopes are appended on enter and never removed. Exiting a scope only
//! moves the cursor back to the parent, so exited scopes (and their
//! bindings) stay available for the final report.
//!
//! Parent links are indices into the arena; parents never refer to their
//! children.

use crate::{Assignment, Ident, ScopeError, ScopeId, ScopeTable, TableConfig, Value};

/// One lexical scope.
#[derive(Clone, Debug)]
pub struct Scope {
    id: ScopeId,
    parent: Option<ScopeId>,
    /// Nesting depth; 0 for the global scope.
    level: u32,
    table: ScopeTable,
}

impl Scope {
    #[inline]
    pub fn id(&self) -> ScopeId {
        self.id
    }

    #[inline]
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn table(&self) -> &ScopeTable {
        &self.table
    }

    /// Whether this is the global (root) scope.
    #[inline]
    pub fn is_global(&self) -> bool {
        self.parent.is_none()
    }
}

/// All scopes created so far and the one currently receiving commands.
#[derive(Clone, Debug)]
pub struct ScopeChain {
    /// Indexed by `ScopeId`; never empty (slot 0 is the global scope).
    scopes: Vec<Scope>,
    active: ScopeId,
    config: TableConfig,
}

impl ScopeChain {
    /// Create a chain holding only the global scope, which is active.
    pub fn new(config: TableConfig) -> Self {
        let root = Scope {
            id: ScopeId::ROOT,
            parent: None,
            level: 0,
            table: ScopeTable::new(config.capacity()),
        };
        ScopeChain {
            scopes: vec![root],
            active: ScopeId::ROOT,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> TableConfig {
        self.config
    }

    /// The scope currently receiving commands.
    #[inline]
    pub fn active(&self) -> ScopeId {
        self.active
    }

    #[inline]
    pub fn active_scope(&self) -> &Scope {
        &self.scopes[self.active.index()]
    }

    /// Nesting depth of the active scope.
    #[inline]
    pub fn level(&self) -> u32 {
        self.active_scope().level
    }

    #[inline]
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    /// Every scope ever created, in creation order.
    #[inline]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Number of scopes ever created, the global scope included.
    #[inline]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Create a child of the active scope and make it active.
    pub fn enter(&mut self) -> Result<ScopeId, ScopeError> {
        let limit = self.config.max_scopes();
        if self.scopes.len() >= limit {
            tracing::debug!(limit, "scope limit reached");
            return Err(ScopeError::ScopeLimitReached { limit });
        }
        let raw = u32::try_from(self.scopes.len())
            .map_err(|_| ScopeError::ScopeLimitReached { limit })?;
        let id = ScopeId::new(raw);
        let parent = self.active_scope();
        let scope = Scope {
            id,
            parent: Some(parent.id),
            level: parent.level + 1,
            table: ScopeTable::new(self.config.capacity()),
        };
        tracing::debug!(?id, level = scope.level, parent = ?parent.id, "entered scope");
        self.scopes.push(scope);
        self.active = id;
        Ok(id)
    }

    /// Make the active scope's parent active again.
    ///
    /// Returns the scope that was left. The global scope cannot be exited.
    pub fn exit(&mut self) -> Result<ScopeId, ScopeError> {
        let current = self.active_scope();
        let Some(parent) = current.parent else {
            tracing::debug!("refused to exit global scope");
            return Err(ScopeError::CannotExitGlobalScope);
        };
        let left = current.id;
        tracing::debug!(?left, level = current.level, "exited scope");
        self.active = parent;
        Ok(left)
    }

    /// Bind `name` in the active scope. Other scopes are never touched.
    pub fn assign(&mut self, name: &Ident, value: Value) -> Result<Assignment, ScopeError> {
        let scope = &mut self.scopes[self.active.index()];
        match scope.table.insert(name, value) {
            Ok(assignment) => {
                tracing::debug!(
                    level = scope.level,
                    %name,
                    value,
                    slot = assignment.slot,
                    updated = assignment.previous.is_some(),
                    "assigned"
                );
                Ok(assignment)
            }
            Err(_) => {
                tracing::debug!(level = scope.level, %name, "scope table full");
                Err(ScopeError::CapacityExceeded {
                    level: scope.level,
                    name: name.clone(),
                })
            }
        }
    }

    /// `from` and its enclosing scopes, innermost first, ending at the root.
    pub fn ancestors(&self, from: ScopeId) -> Ancestors<'_> {
        Ancestors {
            chain: self,
            next: Some(from),
        }
    }
}

impl Default for ScopeChain {
    fn default() -> Self {
        ScopeChain::new(TableConfig::default())
    }
}

/// Iterator over a scope and its enclosing scopes.
pub struct Ancestors<'a> {
    chain: &'a ScopeChain,
    next: Option<ScopeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Scope;

    fn next(&mut self) -> Option<&'a Scope> {
        let scope = self.chain.scope(self.next?)?;
        self.next = scope.parent;
        Some(scope)
    }
}

#[cfg(test)]
mod tests;
