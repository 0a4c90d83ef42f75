//! Diagnostics for malformed command input.

use symtab_command::{CommandError, LineIndex};

/// Render `error` as `error [CODE]: message` with a `path:line:col` pointer.
pub fn render_command_error(error: &CommandError, path: &str, index: &LineIndex<'_>) -> String {
    let position = index.line_col(error.span().start);
    format!(
        "error [{}]: {error}\n  --> {path}:{position}",
        error.code()
    )
}
