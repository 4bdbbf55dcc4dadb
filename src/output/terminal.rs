// Terminal output - Colored summary table of a result set

use crate::engine::ResultSet;
use crate::lint::LintStatus;
use colored::*;

fn colored_status(status: LintStatus) -> ColoredString {
    let label = format!("{:<8}", status.to_string());
    match status {
        LintStatus::Pass => label.green(),
        LintStatus::Error => label.red(),
        LintStatus::Fatal => label.red().bold(),
        LintStatus::Warn => label.yellow(),
        LintStatus::NotApplicable | LintStatus::NotEffective => label.dimmed(),
        LintStatus::Reserved => label.blue(),
    }
}

/// Render every lint outcome followed by per-status totals
pub fn render_summary(results: &ResultSet) -> String {
    let mut out = String::new();
    let width = results
        .results
        .keys()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);

    out.push_str(&format!("\n{}\n", "Lint Results".cyan().bold()));
    out.push_str(&format!("{}\n", "=".repeat(50)));

    for (name, result) in &results.results {
        out.push_str(&format!(
            "{}  {:<width$}",
            colored_status(result.status),
            name,
            width = width
        ));
        if !result.details.is_empty() {
            out.push_str(&format!("  {}", result.details.dimmed()));
        }
        out.push('\n');
    }

    let summary = results.summary();
    out.push_str(&format!("{}\n", "=".repeat(50)));
    let totals: Vec<String> = LintStatus::ALL
        .iter()
        .filter(|status| summary.count(**status) > 0)
        .map(|status| format!("{} {}", status, summary.count(*status)))
        .collect();
    out.push_str(&format!("Total: {}  ({})\n", summary.total(), totals.join(", ")));

    let verdict = if results.fatals_present {
        "X Lint failures present".red().bold()
    } else if results.errors_present {
        "X Errors present".red()
    } else if results.warnings_present {
        "! Warnings present".yellow()
    } else {
        "Y No errors or warnings".green()
    };
    out.push_str(&format!("{}\n", verdict));
    out
}

/// Print the summary to stdout
pub fn print_summary(results: &ResultSet) {
    print!("{}", render_summary(results));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintResult;
    use std::collections::BTreeMap;

    #[test]
    fn test_render_summary() {
        let mut results = BTreeMap::new();
        results.insert("e_crl_has_next_update".to_string(), LintResult::error("missing"));
        results.insert("w_something".to_string(), LintResult::not_applicable());
        let set = ResultSet::new(3, results);

        let rendered = render_summary(&set);
        assert!(rendered.contains("e_crl_has_next_update"));
        assert!(rendered.contains("missing"));
        assert!(rendered.contains("Total: 2"));
        assert!(rendered.contains("Errors present"));
    }
}
