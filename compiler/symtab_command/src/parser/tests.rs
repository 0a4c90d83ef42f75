#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

fn ident(name: &str) -> Ident {
    Ident::new(name).unwrap()
}

fn commands(source: &str) -> Vec<Command> {
    let output = parse(source);
    assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
    output.commands.into_iter().map(|c| c.node).collect()
}

#[test]
fn test_parse_all_commands() {
    assert_eq!(
        commands("begin assign x 5 begin assign x -10 print x end print x end"),
        vec![
            Command::Begin,
            Command::Assign {
                name: ident("x"),
                value: 5
            },
            Command::Begin,
            Command::Assign {
                name: ident("x"),
                value: -10
            },
            Command::Print { name: ident("x") },
            Command::End,
            Command::Print { name: ident("x") },
            Command::End,
        ]
    );
}

#[test]
fn test_layout_is_irrelevant() {
    assert_eq!(
        commands("assign\n  y\n\n  +7\n"),
        vec![Command::Assign {
            name: ident("y"),
            value: 7
        }]
    );
}

#[test]
fn test_command_spans_cover_operands() {
    let output = parse("begin\nassign x 5\nprint x");
    let spans: Vec<Span> = output.commands.iter().map(|c| c.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 5), Span::new(6, 16), Span::new(17, 24)]
    );
}

#[test]
fn test_unknown_word_skipped_alone() {
    let output = parse("begin frobnicate end");
    assert_eq!(
        output.commands.iter().map(|c| c.node.clone()).collect::<Vec<_>>(),
        vec![Command::Begin, Command::End]
    );
    assert_eq!(
        output.errors,
        vec![CommandError::UnknownCommand {
            word: "frobnicate".to_string(),
            span: Span::new(6, 16),
        }]
    );
    assert_eq!(output.errors[0].code(), "E0001");
}

#[test]
fn test_keywords_are_case_sensitive() {
    let output = parse("BEGIN");
    assert!(output.commands.is_empty());
    assert_eq!(output.errors.len(), 1);
}

#[test]
fn test_missing_operand_at_end() {
    let output = parse("assign x");
    assert!(output.commands.is_empty());
    assert_eq!(
        output.errors,
        vec![CommandError::MissingOperand {
            command: "assign",
            expected: "an integer value",
            span: Span::new(8, 8),
        }]
    );

    let output = parse("begin print");
    assert_eq!(output.commands.len(), 1);
    assert_eq!(output.errors[0].code(), "E0002");
    assert_eq!(
        output.errors[0].to_string(),
        "`print` expects a variable name, found end of input"
    );
}

#[test]
fn test_invalid_value_consumes_operands() {
    let output = parse("assign x five print x");
    assert_eq!(
        output.commands.iter().map(|c| c.node.clone()).collect::<Vec<_>>(),
        vec![Command::Print { name: ident("x") }]
    );
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code(), "E0004");
    assert_eq!(output.errors[0].span(), Span::new(9, 13));
}

#[test]
fn test_value_out_of_range() {
    let output = parse("assign big 2147483648 assign ok 2147483647");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code(), "E0004");
    assert_eq!(
        output.commands[0].node,
        Command::Assign {
            name: ident("ok"),
            value: i32::MAX
        }
    );
}

#[test]
fn test_name_too_long() {
    let source = format!("assign {} 1 end", "n".repeat(20));
    let output = parse(&source);
    assert_eq!(output.commands.len(), 1);
    assert_eq!(output.errors[0].code(), "E0003");
    assert_eq!(
        output.errors[0].to_string(),
        format!(
            "invalid variable name `{}`: variable name is 20 bytes long, max is 19",
            "n".repeat(20)
        )
    );
}

#[test]
fn test_parser_is_lazy() {
    let mut parser = Parser::new("begin end");
    assert_eq!(parser.next().map(|r| r.map(|c| c.node)), Some(Ok(Command::Begin)));
    assert_eq!(parser.next().map(|r| r.map(|c| c.node)), Some(Ok(Command::End)));
    assert_eq!(parser.next(), None);
}

#[test]
fn test_has_errors() {
    assert!(!parse("begin end").has_errors());
    assert!(parse("bogus").has_errors());
}
