//! Human-readable rendering of session output.
//!
//! - [`trace`]: one line per event while commands run
//! - [`table`]: the end-of-run symbol-table report
//! - [`diagnostic`]: malformed-command diagnostics with file positions

pub mod diagnostic;
pub mod table;
pub mod trace;

pub use diagnostic::render_command_error;
pub use table::render_report;
pub use trace::{render_event, TraceEmitter};
