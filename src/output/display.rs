//! End-of-session report

use super::formatters::{create_progress_bar, format_duration, format_percentage};
use crate::game::Report;
use colored::Colorize;
use std::fmt::Write;

/// What to include beyond the basic counts
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Show setup latency and session/round durations
    pub timing: bool,
    /// Show the guess distribution of won rounds
    pub distribution: bool,
}

/// Print the session report to stdout
pub fn print_report(report: &Report, options: ReportOptions) {
    print!("{}", render_report(report, options));
}

/// Render the session report
#[must_use]
pub fn render_report(report: &Report, options: ReportOptions) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Games: {}", report.games);
    if report.rounds != report.games {
        let _ = writeln!(out, "Rounds: {}", report.rounds);
    }
    let _ = writeln!(
        out,
        "Average Num Guesses: {}",
        report.mean_guesses.to_string().bright_yellow().bold()
    );
    let _ = writeln!(
        out,
        "Failures: {} ({})",
        report.losses,
        format_percentage(report.loss_rate).red()
    );
    let _ = writeln!(
        out,
        "Errors: {} ({})",
        report.disqualifications,
        format_percentage(report.disqualification_rate).red()
    );

    if options.distribution && report.wins > 0 {
        let _ = writeln!(out, "\n{}", "Guess Distribution".bright_cyan().bold());
        for attempts in 1..=report.max_attempts {
            let count = report.distribution.get(&attempts).copied().unwrap_or(0);
            let bar = create_progress_bar(count as f64, report.wins as f64, 40);
            let _ = writeln!(out, "  {attempts}: {} {count:4}", bar.green());
        }
    }

    if options.timing {
        let _ = writeln!(out, "\n{}", "Timing".bright_cyan().bold());
        let _ = writeln!(
            out,
            "  Initialization:  {}",
            format_duration(report.setup_latency)
        );
        let _ = writeln!(out, "  Total duration:  {}", format_duration(report.elapsed));
        let _ = writeln!(
            out,
            "  Per round:       {}",
            format_duration(report.average_round_duration)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionStats;
    use std::time::Duration;

    fn sample_report() -> Report {
        let mut stats = SessionStats::new(6);
        for _ in 0..4 {
            stats.record_game();
        }
        stats.record_win(2);
        stats.record_win(4);
        stats.record_loss();
        stats.record_disqualification();
        stats.set_setup_latency(Duration::from_millis(3));
        stats.finalize()
    }

    #[test]
    fn report_lists_counts_and_percentages() {
        colored::control::set_override(false);
        let text = render_report(&sample_report(), ReportOptions::default());

        assert!(text.contains("Games: 4\n"));
        assert!(text.contains("Average Num Guesses: 3\n"));
        assert!(text.contains("Failures: 1 (25.000%)"));
        assert!(text.contains("Errors: 1 (25.000%)"));
        assert!(!text.contains("Rounds:"));
        assert!(!text.contains("Timing"));
    }

    #[test]
    fn report_optional_sections() {
        colored::control::set_override(false);
        let options = ReportOptions {
            timing: true,
            distribution: true,
        };
        let text = render_report(&sample_report(), options);

        assert!(text.contains("Guess Distribution"));
        assert!(text.contains("Initialization:  3.00ms"));
        assert!(text.contains("Per round:"));
    }
}
