//! The `check` command: parse a command file without executing it.

use symtab_command::parse;

use super::{read_file, report_command_errors};

/// Report every malformed command in a file; exit 1 if there are any.
pub fn check_file(path: &str) {
    let source = read_file(path);
    let output = parse(&source);

    if output.has_errors() {
        report_command_errors(&output.errors, path, &source);
        std::process::exit(1);
    }
    println!("{path}: {} commands, no errors", output.commands.len());
}
