//! Command handlers for the symtab CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! `read_file` live here in the module root.

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::lex_file;
pub use run::run_file;

use symtab_command::{CommandError, LineIndex};

use crate::reporting::render_command_error;

/// Read a command file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Print each malformed-command diagnostic to stderr.
pub(crate) fn report_command_errors(errors: &[CommandError], path: &str, source: &str) {
    let index = LineIndex::new(source);
    for error in errors {
        eprintln!("{}", render_command_error(error, path, &index));
    }
    if !errors.is_empty() {
        let plural = if errors.len() == 1 { "" } else { "s" };
        eprintln!("{} malformed command{plural} skipped", errors.len());
    }
}
