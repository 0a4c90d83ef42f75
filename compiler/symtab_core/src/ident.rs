//! Validated variable names.

use std::fmt;

/// Error when a string cannot be used as a variable name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentError {
    #[error("variable name is empty")]
    Empty,
    #[error("variable name is {len} bytes long, max is {max}", max = Ident::MAX_LEN)]
    TooLong { len: usize },
    #[error("variable name contains whitespace")]
    Whitespace,
}

/// A variable name: non-empty, whitespace-free, at most [`Ident::MAX_LEN`] bytes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(Box<str>);

impl Ident {
    /// Longest accepted name in bytes.
    pub const MAX_LEN: usize = 19;

    /// Validate and wrap a name.
    pub fn new(name: &str) -> Result<Self, IdentError> {
        if name.is_empty() {
            return Err(IdentError::Empty);
        }
        if name.len() > Self::MAX_LEN {
            return Err(IdentError::TooLong { len: name.len() });
        }
        if name.bytes().any(|b| b.is_ascii_whitespace()) {
            return Err(IdentError::Whitespace);
        }
        Ok(Ident(name.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ident({:?})", &*self.0)
    }
}

impl TryFrom<&str> for Ident {
    type Error = IdentError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Ident::new(name)
    }
}

#[cfg(test)]
mod tests;
