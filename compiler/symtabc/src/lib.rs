//! Symtab driver.
//!
//! Reads a command file, feeds it through a [`Session`](symtab_core::Session)
//! one command at a time, renders the event trace, and prints the final
//! symbol-table report.
//!
//! ```text
//! source ──► Parser ──► Session ──► TraceEmitter (stdout)
//!              │           │
//!              ▼           ▼
//!        CommandError   ChainReport ──► render_report
//! ```

pub mod commands;
pub mod options;
pub mod pipeline;
pub mod reporting;
mod tracing_setup;

pub use options::{parse_run_options, RunOptions, TraceMode};
pub use pipeline::{run_source, RunOutcome};
pub use tracing_setup::init_tracing;
