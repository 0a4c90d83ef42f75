//! End-of-run symbol-table report.

use std::fmt::Write;

use symtab_core::{ChainReport, ScopeSummary};

const RULE: &str = "  |________________________________________________________|";
const BANNER_OPEN: &str = "========================= SYMBOL TABLES =========================";
const BANNER_CLOSE: &str = "=================================================================";

fn scope_kind(scope: &ScopeSummary) -> &'static str {
    if scope.is_global() {
        "Global"
    } else {
        "Local"
    }
}

fn row(out: &mut String, variable: &str, slot: &str, value: &str, kind: &str) {
    let _ = writeln!(out, "  | {variable:<19} | {slot:<5} | {value:<11} | {kind:<10} |");
}

/// Render every scope in creation order with its live bindings.
///
/// The parent of the global scope is shown as `-1`.
pub fn render_report(report: &ChainReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n\n{BANNER_OPEN}");

    for scope in &report.scopes {
        let kind = scope_kind(scope);
        let parent = scope.parent_level.map_or(-1, i64::from);
        let _ = writeln!(
            out,
            "\n\n  Scope Level: {}   (Parent Scope ID: {parent})   [{kind} Scope]",
            scope.level
        );
        out.push_str(RULE);
        out.push('\n');
        row(&mut out, "Variable", "Slot", "Value", "Scope Type");
        out.push_str(RULE);
        out.push('\n');

        if scope.bindings.is_empty() {
            row(&mut out, "---", "---", "---", "---");
        }
        for binding in &scope.bindings {
            row(
                &mut out,
                binding.name.as_str(),
                &binding.slot.to_string(),
                &binding.value.to_string(),
                kind,
            );
        }

        out.push_str(RULE);
        out.push('\n');
    }

    let _ = writeln!(out, "\n\n{BANNER_CLOSE}");
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use symtab_core::{Command, Ident, Session, Silent, TableConfig};

    fn report_for(commands: Vec<Command>) -> ChainReport {
        let mut session = Session::new(TableConfig::default(), Silent);
        session.execute_all(commands);
        session.report()
    }

    #[test]
    fn test_rows_have_uniform_width() {
        let report = report_for(vec![
            Command::Assign {
                name: Ident::new("x").unwrap(),
                value: -2_147_483_648,
            },
            Command::Begin,
        ]);
        let text = render_report(&report);
        let widths: Vec<usize> = text
            .lines()
            .filter(|line| line.starts_with("  |"))
            .map(|line| line.chars().count())
            .collect();
        assert!(!widths.is_empty());
        assert!(widths.iter().all(|&w| w == RULE.len()), "{widths:?}");
    }

    #[test]
    fn test_scope_headers_and_rows() {
        let report = report_for(vec![
            Command::Assign {
                name: Ident::new("g").unwrap(),
                value: 1,
            },
            Command::Begin,
            Command::End,
        ]);
        let text = render_report(&report);

        assert!(text.contains("  Scope Level: 0   (Parent Scope ID: -1)   [Global Scope]"));
        assert!(text.contains("  Scope Level: 1   (Parent Scope ID: 0)   [Local Scope]"));
        // "g" = 103, bucket 103 % 101 = 2
        assert!(text.contains(&format!(
            "  | {:<19} | {:<5} | {:<11} | {:<10} |",
            "g", 2, 1, "Global"
        )));
        assert!(text.contains(&format!(
            "  | {:<19} | {:<5} | {:<11} | {:<10} |",
            "---", "---", "---", "---"
        )));
        assert!(text.starts_with("\n\n====="));
        assert!(text.ends_with("=====\n"));
    }

    #[test]
    fn test_empty_chain_report_shape() {
        let text = render_report(&report_for(Vec::new()));
        let scope_headers = text.matches("Scope Level:").count();
        assert_eq!(scope_headers, 1);
    }
}
