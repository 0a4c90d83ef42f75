//! Command processor driving a scope chain.
//!
//! The session owns the chain outright; nothing else mutates it. Commands
//! run one at a time to completion, and each produces exactly one event.

use crate::{ChainReport, Command, Event, EventSink, Resolution, Scope, ScopeChain, TableConfig};

pub struct Session<S: EventSink> {
    chain: ScopeChain,
    sink: S,
}

impl<S: EventSink> Session<S> {
    /// Start a session with a fresh global scope.
    ///
    /// Emits `ScopeCreated` for the global scope.
    pub fn new(config: TableConfig, sink: S) -> Self {
        let mut session = Session {
            chain: ScopeChain::new(config),
            sink,
        };
        let created = session.scope_created();
        session.sink.emit(&created);
        session
    }

    #[inline]
    pub fn chain(&self) -> &ScopeChain {
        &self.chain
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one command, emit its event, and return it.
    pub fn execute(&mut self, command: Command) -> Event {
        let level = self.chain.level();
        let event = match command {
            Command::Begin => match self.chain.enter() {
                Ok(_) => self.scope_created(),
                Err(_) => Event::ScopeLimitReached {
                    level,
                    limit: self.chain.config().max_scopes(),
                },
            },
            Command::End => match self.chain.exit() {
                Ok(_) => Event::ScopeExited { level },
                Err(_) => Event::ScopeExitDenied,
            },
            Command::Assign { name, value } => match self.chain.assign(&name, value) {
                Ok(_) => Event::Assigned { level, name, value },
                Err(_) => Event::CapacityExceeded { level, name },
            },
            Command::Print { name } => match self.chain.resolve(name.as_str()) {
                Resolution::Found {
                    value,
                    level: found_level,
                    ..
                } => Event::Found {
                    query_level: level,
                    name,
                    found_level,
                    value,
                },
                Resolution::NotFound => Event::NotFound {
                    query_level: level,
                    name,
                },
            },
        };
        self.sink.emit(&event);
        event
    }

    /// Run every command in order, returning how many could not take effect.
    pub fn execute_all<I>(&mut self, commands: I) -> usize
    where
        I: IntoIterator<Item = Command>,
    {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .filter(Event::is_failure)
            .count()
    }

    /// Snapshot of every scope created so far.
    pub fn report(&self) -> ChainReport {
        self.chain.report()
    }

    /// End the session, releasing every scope.
    pub fn finish(self) -> (ChainReport, S) {
        (self.chain.report(), self.sink)
    }

    /// `ScopeCreated` for the active scope.
    fn scope_created(&self) -> Event {
        let scope = self.chain.active_scope();
        Event::ScopeCreated {
            level: scope.level(),
            parent_level: scope
                .parent()
                .and_then(|parent| self.chain.scope(parent))
                .map(Scope::level),
        }
    }
}

#[cfg(test)]
mod tests;
