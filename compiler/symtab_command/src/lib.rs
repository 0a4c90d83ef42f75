//! Symtab Command - adapter from command text to [`Command`]s.
//!
//! The source is a whitespace-separated word stream:
//!
//! ```text
//! begin
//!   assign x 5
//!   print x
//! end
//! ```
//!
//! Any run of non-whitespace bytes is a word; line breaks carry no meaning.
//! [`Parser`] yields one command at a time and recovers from malformed input
//! by skipping it, reporting a [`CommandError`] for each problem.

mod cursor;
mod error;
mod parser;
mod span;

pub use cursor::{Cursor, Word};
pub use error::CommandError;
pub use parser::{parse, ParseOutput, Parser, Spanned};
pub use span::{LineCol, LineIndex, Span};

pub use symtab_core::Command;
