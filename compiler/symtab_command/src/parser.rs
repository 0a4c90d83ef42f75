//! Command parser with word-level recovery.

use symtab_core::{Command, Ident, Value};

use crate::{CommandError, Cursor, Span, Word};

/// A parsed node and the source range it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    #[inline]
    pub fn new(node: T, span: Span) -> Self {
        Spanned { node, span }
    }
}

/// Lazily parses commands from source text.
///
/// Recovery works word by word: an unknown word is skipped on its own, while
/// a command with a bad operand consumes its operands and is dropped. A
/// missing operand can only happen at end of input.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    words: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            words: Cursor::new(source),
        }
    }

    fn operand(
        &mut self,
        command: &'static str,
        expected: &'static str,
        after: Span,
    ) -> Result<Word<'a>, CommandError> {
        self.words.next().ok_or(CommandError::MissingOperand {
            command,
            expected,
            span: Span::new(after.end, after.end),
        })
    }

    fn name(word: Word<'_>) -> Result<Ident, CommandError> {
        Ident::new(word.text).map_err(|source| CommandError::InvalidName {
            text: word.text.to_string(),
            source,
            span: word.span,
        })
    }

    fn parse_assign(&mut self, keyword: Word<'a>) -> Result<Spanned<Command>, CommandError> {
        let name = self.operand("assign", "a variable name", keyword.span)?;
        let value = self.operand("assign", "an integer value", name.span)?;
        let span = keyword.span.merge(value.span);

        let name = Self::name(name)?;
        let value = value
            .text
            .parse::<Value>()
            .map_err(|source| CommandError::InvalidValue {
                text: value.text.to_string(),
                source,
                span: value.span,
            })?;
        Ok(Spanned::new(Command::Assign { name, value }, span))
    }

    fn parse_print(&mut self, keyword: Word<'a>) -> Result<Spanned<Command>, CommandError> {
        let name = self.operand("print", "a variable name", keyword.span)?;
        let span = keyword.span.merge(name.span);
        Ok(Spanned::new(Command::Print { name: Self::name(name)? }, span))
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Spanned<Command>, CommandError>;

    fn next(&mut self) -> Option<Self::Item> {
        let keyword = self.words.next()?;
        let parsed = match keyword.text {
            "begin" => Ok(Spanned::new(Command::Begin, keyword.span)),
            "end" => Ok(Spanned::new(Command::End, keyword.span)),
            "assign" => self.parse_assign(keyword),
            "print" => self.parse_print(keyword),
            word => Err(CommandError::UnknownCommand {
                word: word.to_string(),
                span: keyword.span,
            }),
        };
        match &parsed {
            Ok(command) => tracing::trace!(command = ?command.node, span = ?command.span, "parsed"),
            Err(error) => tracing::debug!(%error, span = ?error.span(), "skipped malformed command"),
        }
        Some(parsed)
    }
}

/// Every command and every error in a source, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub commands: Vec<Spanned<Command>>,
    pub errors: Vec<CommandError>,
}

impl ParseOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a whole source eagerly.
pub fn parse(source: &str) -> ParseOutput {
    let mut output = ParseOutput::default();
    for result in Parser::new(source) {
        match result {
            Ok(command) => output.commands.push(command),
            Err(error) => output.errors.push(error),
        }
    }
    output
}

#[cfg(test)]
mod tests;
