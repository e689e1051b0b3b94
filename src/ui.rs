//! Terminal output — spinner while the scenario runs, colored result lines.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::JobState;
use crate::smoke::SmokeReport;

/// Visual progress for a running scenario: an animated spinner plus green /
/// red / yellow result lines.
pub struct ScenarioProgress {
    pb: ProgressBar,
    green: Style,
    red: Style,
    yellow: Style,
}

impl ScenarioProgress {
    /// Start the spinner with a scenario description.
    pub fn start(description: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(description.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Stop the spinner and print the job outcome.
    pub fn complete(&self, outcome_line: &str, succeeded: bool) {
        self.pb.finish_and_clear();
        if succeeded {
            println!("  {} {outcome_line}", self.green.apply_to("✓"));
        } else {
            println!("  {} {outcome_line}", self.red.apply_to("✗"));
        }
    }

    /// Stop the spinner and print an error line.
    pub fn fail(&self, message: &str) {
        self.pb.finish_and_clear();
        println!("  {} {message}", self.red.apply_to("✗"));
    }

    /// Print a single job status line (used by the `status` subcommand).
    pub fn print_status(&self, job_id: &str, state: &JobState) {
        self.pb.finish_and_clear();
        let style = match state {
            JobState::Succeeded => &self.green,
            s if s.is_terminal_failure() => &self.red,
            _ => &self.yellow,
        };
        println!("  job {job_id}: {}", style.apply_to(state.to_string()));
    }

    /// Print the smoke report as pretty JSON.
    pub fn print_report(&self, report: &SmokeReport) {
        let status_style = if report.job_succeeded {
            &self.green
        } else {
            &self.red
        };
        println!();
        println!("{}", status_style.apply_to("─── Smoke Report ───"));
        println!(
            "{}",
            serde_json::to_string_pretty(report).unwrap_or_default()
        );
    }
}
