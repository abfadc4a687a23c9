// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Aggregated validation results.

use crate::cli::args::OutputFormat;
use crate::error::ValidationError;
use console::{style, Style};

use super::violation::Violation;

/// Every violation found in a run, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
    commits_checked: usize,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append violations, keeping their order.
    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    /// Record that one more commit was evaluated.
    pub fn record_commit(&mut self) {
        self.commits_checked += 1;
    }

    /// Whether the run failed (any violation at all).
    pub fn failed(&self) -> bool {
        !self.violations.is_empty()
    }

    /// All violations, in evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of commits evaluated.
    pub fn commits_checked(&self) -> usize {
        self.commits_checked
    }

    /// Convert the verdict into a result.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.failed() {
            Err(ValidationError::Failed {
                messages: self.violations.iter().map(ToString::to_string).collect(),
            })
        } else {
            Ok(())
        }
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            Some(OutputFormat::Github) => self.print_github(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        for violation in &self.violations {
            println!("{}", format_violation(violation));
        }

        let status = if self.failed() {
            style("✗").red().bold()
        } else {
            style("✓").green().bold()
        };
        println!("{} {}", status, self.summary());
    }

    /// Print as GitHub workflow error annotations.
    fn print_github(&self) {
        for violation in &self.violations {
            println!("::error::{}", violation);
        }
        println!("{}", self.summary());
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "failed": self.failed(),
            "commits_checked": self.commits_checked,
            "violations": self.violations,
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.failed() {
            format!(
                "Failed ({} violations, {} commits checked)",
                self.violations.len(),
                self.commits_checked
            )
        } else {
            format!("Passed ({} commits checked)", self.commits_checked)
        }
    }
}

/// Format a violation for terminal output.
fn format_violation(violation: &Violation) -> String {
    format!(
        "{} {} {} {}",
        style("✗").red().bold(),
        Style::new().cyan().apply_to(&violation.identifier),
        Style::new().red().apply_to(violation.code),
        violation.message
    )
}
