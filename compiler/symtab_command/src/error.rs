//! Malformed command input.

use std::num::ParseIntError;

use symtab_core::IdentError;

use crate::Span;

/// A problem in the command source. The offending words are skipped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{word}`")]
    UnknownCommand { word: String, span: Span },
    /// Input ended before all operands of `command` were read.
    #[error("`{command}` expects {expected}, found end of input")]
    MissingOperand {
        command: &'static str,
        expected: &'static str,
        span: Span,
    },
    #[error("invalid variable name `{text}`: {source}")]
    InvalidName {
        text: String,
        source: IdentError,
        span: Span,
    },
    #[error("invalid integer value `{text}`: {source}")]
    InvalidValue {
        text: String,
        source: ParseIntError,
        span: Span,
    },
}

impl CommandError {
    /// Where the problem is.
    pub fn span(&self) -> Span {
        match self {
            CommandError::UnknownCommand { span, .. }
            | CommandError::MissingOperand { span, .. }
            | CommandError::InvalidName { span, .. }
            | CommandError::InvalidValue { span, .. } => *span,
        }
    }

    /// Stable error code, `E0001` through `E0004`.
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand { .. } => "E0001",
            CommandError::MissingOperand { .. } => "E0002",
            CommandError::InvalidName { .. } => "E0003",
            CommandError::InvalidValue { .. } => "E0004",
        }
    }
}
