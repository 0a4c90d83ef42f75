//! Observable events produced while processing commands.
//!
//! A [`Session`](crate::Session) emits exactly one event per command, plus
//! one `ScopeCreated` for the global scope when it starts. Rendering the
//! events for humans is left to whoever implements [`EventSink`].

use crate::{Ident, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A scope was created; `parent_level` is `None` for the global scope.
    ScopeCreated {
        level: u32,
        parent_level: Option<u32>,
    },
    /// The scope at `level` was left.
    ScopeExited { level: u32 },
    /// Exit attempted at the global scope.
    ScopeExitDenied,
    /// Enter attempted at `level` after `limit` scopes were created.
    ScopeLimitReached { level: u32, limit: usize },
    Assigned {
        level: u32,
        name: Ident,
        value: Value,
    },
    /// The scope at `level` had no room for `name`.
    CapacityExceeded { level: u32, name: Ident },
    /// `name`, looked up from `query_level`, is bound at `found_level`.
    Found {
        query_level: u32,
        name: Ident,
        found_level: u32,
        value: Value,
    },
    NotFound { query_level: u32, name: Ident },
}

impl Event {
    /// Whether this event reports a command that could not take effect.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::ScopeExitDenied | Event::ScopeLimitReached { .. } | Event::CapacityExceeded { .. }
        )
    }
}

/// Receiver of session events.
pub trait EventSink {
    fn emit(&mut self, event: &Event);
}

/// Collects every event, for tests and embedders.
impl EventSink for Vec<Event> {
    fn emit(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Discards every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct Silent;

impl EventSink for Silent {
    fn emit(&mut self, _event: &Event) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &Event) {
        (**self).emit(event);
    }
}
