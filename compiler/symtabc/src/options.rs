//! Options for `symtab run`.

use std::path::PathBuf;

use symtab_core::{ConfigError, TableConfig};

/// How session events are written to stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TraceMode {
    /// Indented `[Scope Level N] ...` lines.
    #[default]
    Trace,
    /// One `Debug`-formatted event per line.
    Events,
    /// Nothing.
    Quiet,
}

/// Options for running a command file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Command file; `read.txt` when not given.
    pub input: Option<PathBuf>,
    /// Slots per scope table.
    pub capacity: usize,
    /// Maximum number of scopes, global scope included.
    pub max_scopes: usize,
    pub trace: TraceMode,
    /// Print the final symbol-table report.
    pub report: bool,
}

impl RunOptions {
    /// Input read when no path is given.
    pub const DEFAULT_INPUT: &'static str = "read.txt";

    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_INPUT))
    }

    pub fn table_config(&self) -> Result<TableConfig, ConfigError> {
        TableConfig::new(self.capacity, self.max_scopes)
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            input: None,
            capacity: TableConfig::DEFAULT_CAPACITY,
            max_scopes: TableConfig::DEFAULT_MAX_SCOPES,
            trace: TraceMode::Trace,
            report: true,
        }
    }
}

/// Parse `run` arguments (everything after `run`).
///
/// Bad values and unknown flags produce a warning and keep the default.
pub fn parse_run_options(args: &[String]) -> RunOptions {
    let mut options = RunOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--capacity=") {
            match value.parse() {
                Ok(capacity) => options.capacity = capacity,
                Err(_) => eprintln!(
                    "warning: invalid capacity '{value}', using {}",
                    options.capacity
                ),
            }
        } else if let Some(value) = arg.strip_prefix("--max-scopes=") {
            match value.parse() {
                Ok(max_scopes) => options.max_scopes = max_scopes,
                Err(_) => eprintln!(
                    "warning: invalid scope limit '{value}', using {}",
                    options.max_scopes
                ),
            }
        } else if arg == "--events" {
            options.trace = TraceMode::Events;
        } else if arg == "--quiet" || arg == "-q" {
            options.trace = TraceMode::Quiet;
        } else if arg == "--no-report" {
            options.report = false;
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        } else if options.input.is_none() {
            options.input = Some(PathBuf::from(arg));
        } else {
            eprintln!("warning: ignoring extra argument '{arg}'");
        }
    }

    options
}
