//! The `run` command: execute a command file and print the symbol tables.

use std::io::Write;

use crate::reporting::render_report;
use crate::{run_source, RunOptions};

use super::{read_file, report_command_errors};

/// Run a command file.
///
/// Exits with status 1 if the configuration is invalid, stdout cannot be
/// written, or any command was malformed. Commands that run but cannot take
/// effect (full table, exit at global scope) are part of the trace, not errors.
pub fn run_file(options: &RunOptions) {
    let config = match options.table_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let path = options.input_path();
    let path = path.to_string_lossy();
    let source = read_file(&path);

    let stdout = std::io::stdout().lock();
    let (outcome, mut stdout) = match run_source(&source, config, options.trace, stdout) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: failed to write trace: {e}");
            std::process::exit(1);
        }
    };

    if options.report {
        if let Err(e) = write!(stdout, "{}", render_report(&outcome.report)) {
            eprintln!("error: failed to write report: {e}");
            std::process::exit(1);
        }
    }
    let _ = stdout.flush();

    report_command_errors(&outcome.errors, &path, &source);
    if outcome.has_errors() {
        std::process::exit(1);
    }
}
