//! End-of-run snapshot of every scope and its live bindings.

use crate::{Ident, Scope, ScopeChain, ScopeId, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingSummary {
    pub name: Ident,
    pub value: Value,
    /// Slot index in the owning scope's table.
    pub slot: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeSummary {
    pub id: ScopeId,
    pub level: u32,
    /// `None` for the global scope.
    pub parent_level: Option<u32>,
    /// Live bindings in slot order.
    pub bindings: Vec<BindingSummary>,
}

impl ScopeSummary {
    #[inline]
    pub fn is_global(&self) -> bool {
        self.parent_level.is_none()
    }
}

/// Every scope ever created, in creation order, exited or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainReport {
    pub scopes: Vec<ScopeSummary>,
}

impl ChainReport {
    /// Total live bindings across all scopes.
    pub fn binding_count(&self) -> usize {
        self.scopes.iter().map(|scope| scope.bindings.len()).sum()
    }
}

impl ScopeChain {
    /// Snapshot the whole chain.
    pub fn report(&self) -> ChainReport {
        let scopes = self
            .scopes()
            .iter()
            .map(|scope| ScopeSummary {
                id: scope.id(),
                level: scope.level(),
                parent_level: scope
                    .parent()
                    .and_then(|parent| self.scope(parent))
                    .map(Scope::level),
                bindings: scope
                    .table()
                    .iter()
                    .map(|(slot, binding)| BindingSummary {
                        name: binding.name().clone(),
                        value: binding.value(),
                        slot,
                    })
                    .collect(),
            })
            .collect();
        ChainReport { scopes }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ident(name: &str) -> Ident {
        Ident::new(name).unwrap()
    }

    #[test]
    fn test_report_lists_scopes_in_creation_order() {
        let mut chain = ScopeChain::default();
        chain.assign(&ident("g"), 1).unwrap();
        chain.enter().unwrap();
        chain.assign(&ident("x"), 2).unwrap();
        chain.enter().unwrap();

        let report = chain.report();
        let shape: Vec<(u32, Option<u32>, usize)> = report
            .scopes
            .iter()
            .map(|s| (s.level, s.parent_level, s.bindings.len()))
            .collect();
        assert_eq!(shape, vec![(0, None, 1), (1, Some(0), 1), (2, Some(1), 0)]);
        assert!(report.scopes[0].is_global());
        assert_eq!(report.binding_count(), 2);
    }

    #[test]
    fn test_report_unchanged_by_exit() {
        let mut chain = ScopeChain::default();
        chain.enter().unwrap();
        chain.assign(&ident("x"), 10).unwrap();
        chain.enter().unwrap();
        chain.assign(&ident("y"), 20).unwrap();

        let before = chain.report();
        chain.exit().unwrap();
        chain.exit().unwrap();
        assert_eq!(chain.report(), before);
    }

    #[test]
    fn test_report_bindings_in_slot_order() {
        let mut chain = ScopeChain::new(crate::TableConfig::new(7, 2).unwrap());
        // "a" -> bucket 6, "b" -> bucket 0
        chain.assign(&ident("a"), 1).unwrap();
        chain.assign(&ident("b"), 2).unwrap();

        let bindings = &chain.report().scopes[0].bindings;
        assert_eq!(
            bindings,
            &vec![
                BindingSummary {
                    name: ident("b"),
                    value: 2,
                    slot: 0
                },
                BindingSummary {
                    name: ident("a"),
                    value: 1,
                    slot: 6
                },
            ]
        );
    }
}
