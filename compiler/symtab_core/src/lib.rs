//! Symtab Core - nested-scope symbol table engine.
//!
//! Each lexical scope owns a fixed-capacity, open-addressed hash table.
//! Scopes live in a flat arena and point at their parent by index, forming
//! a tree rooted at the global scope.
//!
//! # Architecture
//!
//! ```text
//! Command ──► Session ──► ScopeChain ──► ScopeTable ──► probe ──► hash_name
//!                │             │
//!                ▼             ▼
//!            EventSink     resolve (walks ancestors outward)
//! ```
//!
//! - [`hash_name`]: polynomial hash reduced to a bucket index
//! - [`probe`](probe::probe): quadratic probe sequence with first-match resolution
//! - [`ScopeTable`]: one table per scope, owning its bindings
//! - [`ScopeChain`]: scope arena, active scope tracking, enter/exit
//! - [`Resolution`]: result of walking the chain with shadowing
//! - [`Session`]: command processor emitting one [`Event`] per command

mod chain;
mod command;
mod config;
mod error;
mod event;
mod hash;
mod ident;
pub mod probe;
mod report;
mod resolve;
mod scope_id;
mod session;
mod table;

pub use chain::{Ancestors, Scope, ScopeChain};
pub use command::Command;
pub use config::{ConfigError, TableConfig};
pub use error::ScopeError;
pub use event::{Event, EventSink, Silent};
pub use hash::hash_name;
pub use ident::{Ident, IdentError};
pub use report::{BindingSummary, ChainReport, ScopeSummary};
pub use resolve::Resolution;
pub use scope_id::ScopeId;
pub use session::Session;
pub use table::{Assignment, Binding, ScopeTable, TableFull};

/// Integer value bound to a name.
pub type Value = i32;
