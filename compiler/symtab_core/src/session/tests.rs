#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use crate::{Ident, Silent};
use pretty_assertions::assert_eq;

fn ident(name: &str) -> Ident {
    Ident::new(name).unwrap()
}

fn assign(name: &str, value: i32) -> Command {
    Command::Assign {
        name: ident(name),
        value,
    }
}

fn print(name: &str) -> Command {
    Command::Print { name: ident(name) }
}

#[test]
fn test_new_session_announces_root() {
    let session = Session::new(TableConfig::default(), Vec::<Event>::new());
    assert_eq!(
        session.sink(),
        &vec![Event::ScopeCreated {
            level: 0,
            parent_level: None
        }]
    );
}

#[test]
fn test_nested_scenario_event_stream() {
    let mut session = Session::new(TableConfig::default(), Vec::<Event>::new());
    let failures = session.execute_all([
        Command::Begin,
        assign("x", 5),
        Command::Begin,
        assign("x", 10),
        print("x"),
        Command::End,
        print("x"),
        Command::End,
    ]);
    assert_eq!(failures, 0);

    let (_, events) = session.finish();
    assert_eq!(
        events,
        vec![
            Event::ScopeCreated {
                level: 0,
                parent_level: None
            },
            Event::ScopeCreated {
                level: 1,
                parent_level: Some(0)
            },
            Event::Assigned {
                level: 1,
                name: ident("x"),
                value: 5
            },
            Event::ScopeCreated {
                level: 2,
                parent_level: Some(1)
            },
            Event::Assigned {
                level: 2,
                name: ident("x"),
                value: 10
            },
            Event::Found {
                query_level: 2,
                name: ident("x"),
                found_level: 2,
                value: 10
            },
            Event::ScopeExited { level: 2 },
            Event::Found {
                query_level: 1,
                name: ident("x"),
                found_level: 1,
                value: 5
            },
            Event::ScopeExited { level: 1 },
        ]
    );
}

#[test]
fn test_root_exit_denied() {
    let mut session = Session::new(TableConfig::default(), Silent);
    assert_eq!(session.execute(Command::End), Event::ScopeExitDenied);
    assert_eq!(session.chain().level(), 0);
    assert_eq!(session.chain().scope_count(), 1);
}

#[test]
fn test_update_not_duplicate() {
    let mut session = Session::new(TableConfig::default(), Silent);
    session.execute(assign("x", 1));
    session.execute(assign("x", 2));

    let report = session.report();
    let root = &report.scopes[0];
    assert_eq!(root.bindings.len(), 1);
    assert_eq!(root.bindings[0].name, ident("x"));
    assert_eq!(root.bindings[0].value, 2);
}

#[test]
fn test_not_found_from_depth() {
    let mut session = Session::new(TableConfig::default(), Silent);
    session.execute(Command::Begin);
    session.execute(Command::Begin);
    assert_eq!(
        session.execute(print("ghost")),
        Event::NotFound {
            query_level: 2,
            name: ident("ghost")
        }
    );
}

#[test]
fn test_capacity_bound_keeps_earlier_bindings() {
    let config = TableConfig::new(2, 4).unwrap();
    let mut session = Session::new(config, Silent);
    let failures = session.execute_all([assign("a", 1), assign("b", 2)]);
    assert_eq!(failures, 0);

    assert_eq!(
        session.execute(assign("c", 3)),
        Event::CapacityExceeded {
            level: 0,
            name: ident("c")
        }
    );
    let names: Vec<String> = session.report().scopes[0]
        .bindings
        .iter()
        .map(|b| format!("{}={}", b.name, b.value))
        .collect();
    assert_eq!(names, vec!["b=2".to_string(), "a=1".to_string()]);
}

#[test]
fn test_scope_limit_event() {
    let config = TableConfig::new(5, 2).unwrap();
    let mut session = Session::new(config, Silent);
    session.execute(Command::Begin);
    assert_eq!(
        session.execute(Command::Begin),
        Event::ScopeLimitReached { level: 1, limit: 2 }
    );
    assert_eq!(session.chain().level(), 1);
}

#[test]
fn test_failures_counted() {
    let mut session = Session::new(TableConfig::default(), Silent);
    let failures = session.execute_all([Command::End, Command::Begin, Command::End, Command::End]);
    assert_eq!(failures, 2);
}

#[test]
fn test_borrowed_sink() {
    let mut events: Vec<Event> = Vec::new();
    {
        let mut session = Session::new(TableConfig::default(), &mut events);
        session.execute(assign("k", 7));
    }
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[1],
        Event::Assigned {
            level: 0,
            name: ident("k"),
            value: 7
        }
    );
}

#[test]
fn test_exited_scopes_in_final_report() {
    let mut session = Session::new(TableConfig::default(), Silent);
    session.execute_all([Command::Begin, assign("t", 3), Command::End]);
    let (report, _) = session.finish();
    assert_eq!(report.scopes.len(), 2);
    assert_eq!(report.scopes[1].bindings[0].value, 3);
}
