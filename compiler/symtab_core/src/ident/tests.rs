#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_ident_accepts_plain_names() {
    let x = Ident::new("x").unwrap();
    assert_eq!(x.as_str(), "x");
    assert_eq!(x.to_string(), "x");
    assert!(x == *"x");
}

#[test]
fn test_ident_rejects_empty() {
    assert_eq!(Ident::new(""), Err(IdentError::Empty));
}

#[test]
fn test_ident_length_boundary() {
    let longest = "a".repeat(Ident::MAX_LEN);
    assert!(Ident::new(&longest).is_ok());

    let too_long = "a".repeat(Ident::MAX_LEN + 1);
    assert_eq!(
        Ident::new(&too_long),
        Err(IdentError::TooLong {
            len: Ident::MAX_LEN + 1
        })
    );
}

#[test]
fn test_ident_rejects_whitespace() {
    assert_eq!(Ident::new("a b"), Err(IdentError::Whitespace));
    assert_eq!(Ident::new("a\n"), Err(IdentError::Whitespace));
}

#[test]
fn test_ident_error_messages() {
    assert_eq!(
        IdentError::TooLong { len: 25 }.to_string(),
        "variable name is 25 bytes long, max is 19"
    );
}
