#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

fn ident(name: &str) -> Ident {
    Ident::new(name).unwrap()
}

#[test]
fn test_new_chain_has_active_root() {
    let chain = ScopeChain::default();
    assert_eq!(chain.active(), ScopeId::ROOT);
    assert_eq!(chain.level(), 0);
    assert_eq!(chain.scope_count(), 1);
    assert!(chain.active_scope().is_global());
    assert_eq!(chain.active_scope().table().capacity(), 101);
}

#[test]
fn test_enter_links_parent_and_level() {
    let mut chain = ScopeChain::default();
    let first = chain.enter().unwrap();
    let second = chain.enter().unwrap();

    assert_eq!(chain.active(), second);
    assert_eq!(chain.level(), 2);

    let inner = chain.scope(second).unwrap();
    assert_eq!(inner.parent(), Some(first));
    assert_eq!(inner.level(), 2);
    assert_eq!(chain.scope(first).unwrap().parent(), Some(ScopeId::ROOT));
}

#[test]
fn test_exit_returns_to_parent_and_keeps_scope() {
    let mut chain = ScopeChain::default();
    let child = chain.enter().unwrap();
    chain.assign(&ident("x"), 7).unwrap();

    assert_eq!(chain.exit(), Ok(child));
    assert_eq!(chain.active(), ScopeId::ROOT);
    assert_eq!(chain.scope_count(), 2);

    // The exited scope keeps its bindings.
    let exited = chain.scope(child).unwrap();
    assert_eq!(exited.table().get("x").map(crate::Binding::value), Some(7));
}

#[test]
fn test_exit_at_root_is_refused() {
    let mut chain = ScopeChain::default();
    assert_eq!(chain.exit(), Err(ScopeError::CannotExitGlobalScope));
    assert_eq!(chain.active(), ScopeId::ROOT);
    assert_eq!(chain.level(), 0);
    assert_eq!(chain.scope_count(), 1);
}

#[test]
fn test_sibling_scopes_share_parent() {
    let mut chain = ScopeChain::default();
    let a = chain.enter().unwrap();
    chain.exit().unwrap();
    let b = chain.enter().unwrap();

    assert_ne!(a, b);
    assert_eq!(chain.scope(a).unwrap().parent(), Some(ScopeId::ROOT));
    assert_eq!(chain.scope(b).unwrap().parent(), Some(ScopeId::ROOT));
    assert_eq!(chain.scope(b).unwrap().level(), 1);
}

#[test]
fn test_scope_limit() {
    let mut chain = ScopeChain::new(TableConfig::new(11, 3).unwrap());
    chain.enter().unwrap();
    chain.enter().unwrap();

    assert_eq!(
        chain.enter(),
        Err(ScopeError::ScopeLimitReached { limit: 3 })
    );
    assert_eq!(chain.level(), 2);
    assert_eq!(chain.scope_count(), 3);

    // Exiting does not free arena space.
    chain.exit().unwrap();
    assert!(chain.enter().is_err());
}

#[test]
fn test_assign_only_touches_active_scope() {
    let mut chain = ScopeChain::default();
    chain.assign(&ident("x"), 1).unwrap();
    let child = chain.enter().unwrap();
    chain.assign(&ident("x"), 2).unwrap();

    let root = chain.scope(ScopeId::ROOT).unwrap();
    assert_eq!(root.table().get("x").map(crate::Binding::value), Some(1));
    let inner = chain.scope(child).unwrap();
    assert_eq!(inner.table().get("x").map(crate::Binding::value), Some(2));
}

#[test]
fn test_assign_capacity_exceeded() {
    let mut chain = ScopeChain::new(TableConfig::new(2, 4).unwrap());
    chain.assign(&ident("a"), 1).unwrap();
    chain.assign(&ident("b"), 2).unwrap();

    assert_eq!(
        chain.assign(&ident("c"), 3),
        Err(ScopeError::CapacityExceeded {
            level: 0,
            name: ident("c"),
        })
    );
    assert_eq!(chain.active_scope().table().len(), 2);
}

#[test]
fn test_ancestors_walk_to_root() {
    let mut chain = ScopeChain::default();
    let a = chain.enter().unwrap();
    let b = chain.enter().unwrap();

    let path: Vec<ScopeId> = chain.ancestors(b).map(Scope::id).collect();
    assert_eq!(path, vec![b, a, ScopeId::ROOT]);

    let from_root: Vec<ScopeId> = chain.ancestors(ScopeId::ROOT).map(Scope::id).collect();
    assert_eq!(from_root, vec![ScopeId::ROOT]);

    assert_eq!(chain.ancestors(ScopeId::new(99)).count(), 0);
}
