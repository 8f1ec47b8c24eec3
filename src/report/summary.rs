//! Summary rendering for completed runs.
//!
//! Produces the end-of-run summary shared by the terminal and plain
//! reporters: a box-drawing table of per-check outcomes, the overall
//! verdict, and action items collected from failed or warned checks.

use std::time::Duration;

use console::style;

use crate::check::CheckStatus;
use crate::runner::RunResults;

const MAX_MESSAGE_WIDTH: usize = 80;

/// Render the full summary block for a finished run.
pub fn render_summary(
    results: &RunResults,
    overall_success: bool,
    elapsed: Option<Duration>,
) -> String {
    if results.is_empty() {
        return format!("{}\n", style("No checks were run.").yellow());
    }

    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("Health Check Results").bold().blue()));
    out.push_str(&render_table(results));
    out.push('\n');
    out.push_str(&render_verdict(results, overall_success, elapsed));

    let actions = action_items(results);
    if !actions.is_empty() && !overall_success {
        out.push_str(&format!("\n{}\n", style("Action items:").bold().yellow()));
        for action in actions {
            out.push_str(&format!("  • {}\n", action));
        }
    }

    out
}

fn status_label(status: CheckStatus) -> String {
    format!("{} {}", status.symbol(), match status {
        CheckStatus::Passed => "PASS",
        CheckStatus::Failed => "FAIL",
        CheckStatus::Warning => "WARN",
        CheckStatus::Skipped => "SKIP",
        CheckStatus::Pending => "PEND",
        CheckStatus::Running => "RUN ",
    })
}

fn render_table(results: &RunResults) -> String {
    let headers = ["Check", "Status", "Message"];

    let rows: Vec<[String; 3]> = results
        .iter()
        .map(|(name, result)| {
            [
                name.to_string(),
                status_label(result.status),
                truncate(&result.message, MAX_MESSAGE_WIDTH),
            ]
        })
        .collect();

    let mut widths = [headers[0].len(), headers[1].len(), headers[2].len()];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, width) in widths.iter().enumerate() {
            line.push_str(&"─".repeat(width + 2));
            if i < widths.len() - 1 {
                line.push(mid);
            }
        }
        line.push(right);
        line.push('\n');
        line
    };

    let render_row = |cells: [&str; 3]| {
        let mut line = String::from("│");
        for (i, cell) in cells.iter().enumerate() {
            let pad = widths[i] - cell.chars().count();
            line.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }
        line.push('\n');
        line
    };

    let mut out = String::new();
    out.push_str(&border('┌', '┬', '┐'));
    out.push_str(&render_row(headers));
    out.push_str(&border('├', '┼', '┤'));
    for row in &rows {
        out.push_str(&render_row([&row[0], &row[1], &row[2]]));
    }
    out.push_str(&border('└', '┴', '┘'));
    out
}

fn render_verdict(
    results: &RunResults,
    overall_success: bool,
    elapsed: Option<Duration>,
) -> String {
    let timing = match elapsed {
        Some(elapsed) => format!(" in {:.1}s", elapsed.as_secs_f64()),
        None => String::new(),
    };

    if overall_success {
        format!(
            "{}\n  Completed {} checks{}\n",
            style("✓ All critical checks passed").green().bold(),
            results.len(),
            timing
        )
    } else {
        let failed = results.count_status(CheckStatus::Failed);
        format!(
            "{}\n  Please address the issues above before proceeding.\n  Completed {} checks{}\n",
            style(format!("✗ {} check(s) failed", failed)).red().bold(),
            results.len(),
            timing
        )
    }
}

fn action_items(results: &RunResults) -> Vec<String> {
    results
        .iter()
        .filter(|(_, result)| {
            matches!(result.status, CheckStatus::Failed | CheckStatus::Warning)
        })
        .filter_map(|(name, result)| {
            result
                .suggestion
                .as_ref()
                .map(|suggestion| format!("{}: {}", name, suggestion))
        })
        .collect()
}

fn truncate(message: &str, width: usize) -> String {
    if message.chars().count() <= width {
        message.to_string()
    } else {
        let cut: String = message.chars().take(width).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckResult;

    fn sample_results() -> RunResults {
        let mut results = RunResults::new();
        results.insert("git", CheckResult::passed("Git 2.44.0"));
        results.insert(
            "cmake",
            CheckResult::failed("CMake is not installed or not in PATH")
                .with_suggestion("Install CMake from https://cmake.org/download/"),
        );
        results
    }

    #[test]
    fn empty_results_render_notice() {
        let out = render_summary(&RunResults::new(), true, None);
        assert!(out.contains("No checks were run"));
    }

    #[test]
    fn table_lists_every_check() {
        let out = render_summary(&sample_results(), false, None);
        assert!(out.contains("git"));
        assert!(out.contains("cmake"));
        assert!(out.contains("PASS"));
        assert!(out.contains("FAIL"));
    }

    #[test]
    fn failed_run_lists_action_items() {
        let out = render_summary(&sample_results(), false, None);
        assert!(out.contains("Action items"));
        assert!(out.contains("cmake: Install CMake"));
    }

    #[test]
    fn successful_run_has_no_action_items() {
        let mut results = RunResults::new();
        results.insert("git", CheckResult::passed("Git 2.44.0"));

        let out = render_summary(&results, true, None);
        assert!(out.contains("All critical checks passed"));
        assert!(!out.contains("Action items"));
    }

    #[test]
    fn verdict_counts_failures() {
        let out = render_summary(&sample_results(), false, None);
        assert!(out.contains("1 check(s) failed"));
    }

    #[test]
    fn elapsed_time_is_shown_when_known() {
        let out = render_summary(&sample_results(), false, Some(Duration::from_millis(2500)));
        assert!(out.contains("in 2.5s"));
    }

    #[test]
    fn long_messages_are_truncated() {
        let mut results = RunResults::new();
        results.insert("x", CheckResult::passed("a".repeat(200)));

        let out = render_summary(&results, true, None);
        assert!(out.contains(&format!("{}...", "a".repeat(MAX_MESSAGE_WIDTH))));
    }

    #[test]
    fn table_uses_box_drawing() {
        let out = render_table(&sample_results());
        assert!(out.contains("┌"));
        assert!(out.contains("┼"));
        assert!(out.contains("┘"));
    }
}
