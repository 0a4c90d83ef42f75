//! Source text to final report: parse, execute, trace.

use std::io::{self, Write};

use symtab_command::{CommandError, Parser};
use symtab_core::{ChainReport, Session, TableConfig};

use crate::reporting::TraceEmitter;
use crate::TraceMode;

/// Everything a run produced besides the trace itself.
#[derive(Debug)]
pub struct RunOutcome {
    /// Final state of every scope.
    pub report: ChainReport,
    /// Commands that ran but could not take effect (full table, exit at
    /// global scope, scope limit).
    pub failures: usize,
    /// Malformed commands that were skipped.
    pub errors: Vec<CommandError>,
}

impl RunOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Run every command in `source`, writing the trace to `out`.
///
/// Commands execute one at a time as they are parsed; malformed ones are
/// skipped and collected. Only a write failure on `out` is an error.
pub fn run_source<W: Write>(
    source: &str,
    config: TableConfig,
    mode: TraceMode,
    out: W,
) -> io::Result<(RunOutcome, W)> {
    let mut session = Session::new(config, TraceEmitter::new(out, mode));
    let mut failures = 0;
    let mut errors = Vec::new();

    for parsed in Parser::new(source) {
        match parsed {
            Ok(command) => {
                if session.execute(command.node).is_failure() {
                    failures += 1;
                }
            }
            Err(error) => errors.push(error),
        }
    }

    let (report, emitter) = session.finish();
    tracing::debug!(
        scopes = report.scopes.len(),
        bindings = report.binding_count(),
        failures,
        malformed = errors.len(),
        "run complete"
    );
    let out = emitter.finish()?;
    Ok((
        RunOutcome {
            report,
            failures,
            errors,
        },
        out,
    ))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trace_of(source: &str) -> (RunOutcome, String) {
        let (outcome, out) =
            run_source(source, TableConfig::default(), TraceMode::Trace, Vec::new()).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_nested_scopes_trace() {
        let (outcome, trace) =
            trace_of("begin assign x 5 begin assign x 10 print x end print x end");
        assert_eq!(
            trace,
            "   [Scope Level 1] New scope created.\n\
             \x20  [Scope Level 1] Assigned x = 5\n\
             \x20     [Scope Level 2] New scope created.\n\
             \x20     [Scope Level 2] Assigned x = 10\n\
             \x20     [Scope Level 2] Looked up x from [Scope 2] -- Found x = 10\n\
             \x20     [Scope Level 2] Exited scope.\n\
             \x20  [Scope Level 1] Looked up x from [Scope 1] -- Found x = 5\n\
             \x20  [Scope Level 1] Exited scope.\n"
        );
        assert_eq!(outcome.failures, 0);
        assert!(!outcome.has_errors());
        assert_eq!(outcome.report.scopes.len(), 3);
    }

    #[test]
    fn test_malformed_commands_skipped() {
        let (outcome, trace) = trace_of("assign a 1 jump print a");
        assert_eq!(
            trace,
            "[Scope Level 0] Assigned a = 1\n[Scope Level 0] Looked up a from [Scope 0] -- Found a = 1\n"
        );
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].code(), "E0001");
    }

    #[test]
    fn test_failures_counted() {
        let (outcome, trace) = trace_of("end end");
        assert_eq!(trace, "Cannot exit global scope.\nCannot exit global scope.\n");
        assert_eq!(outcome.failures, 2);
    }

    #[test]
    fn test_quiet_mode_still_reports() {
        let (outcome, out) = run_source(
            "assign q 4",
            TableConfig::default(),
            TraceMode::Quiet,
            Vec::<u8>::new(),
        )
        .unwrap();
        assert!(out.is_empty());
        assert_eq!(outcome.report.binding_count(), 1);
    }
}
