//! The abstract command stream consumed by a [`Session`](crate::Session).

use crate::{Ident, Value};

/// One command from the command source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Enter a new scope nested in the active one.
    Begin,
    /// Exit the active scope.
    End,
    /// Bind `name` to `value` in the active scope.
    Assign { name: Ident, value: Value },
    /// Resolve `name` from the active scope.
    Print { name: Ident },
}

impl Command {
    /// The source keyword for this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Begin => "begin",
            Command::End => "end",
            Command::Assign { .. } => "assign",
            Command::Print { .. } => "print",
        }
    }
}
