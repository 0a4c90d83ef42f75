//! Word cursor over command source text.
//!
//! A word is a maximal run of non-whitespace bytes. Whitespace is space,
//! `\t`, `\n`, `\v`, `\f` and `\r`, all ASCII, so word boundaries always
//! fall on UTF-8 character boundaries.

use crate::Span;

/// A word and where it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub span: Span,
}

#[inline]
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0B
}

/// Yields the words of a source string in order.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether only whitespace (or nothing) is left.
    pub fn is_eof(&self) -> bool {
        self.source.as_bytes()[self.pos..].iter().all(|&b| is_space(b))
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source.as_bytes()[self.pos..];
        self.pos += rest.iter().take_while(|&&b| is_space(b)).count();
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Word<'a>> {
        self.skip_whitespace();
        let start = self.pos;
        let rest = &self.source.as_bytes()[start..];
        let len = rest.iter().take_while(|&&b| !is_space(b)).count();
        if len == 0 {
            return None;
        }
        self.pos = start + len;
        Some(Word {
            text: &self.source[start..self.pos],
            span: Span::new(start, self.pos),
        })
    }
}
