// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine driving a full validation run.

use crate::commit::{Commit, ParsedMessage};
use crate::config::{PatternKind, RuleConfig};
use crate::error::{GateError, MessageError, Result};

use super::commit::{evaluate_commit, evaluate_message};
use super::refs::{evaluate_ref, RefTarget};
use super::report::ValidationReport;
use super::violation::Origin;

/// Rule engine for validating ref names and commits.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: RuleConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Validate the ref names and every commit, in the given order.
    ///
    /// Stops only on a fatal error; every violation is collected otherwise.
    pub fn run(&self, target: &RefTarget, commits: &[Commit]) -> Result<ValidationReport> {
        let mut report = ValidationReport::new();

        report.extend(evaluate_ref(target, &self.config));

        for commit in commits {
            report.extend(evaluate_commit(commit, &self.config)?);
            if !commit.is_merge() {
                report.record_commit();
            }
        }

        tracing::debug!(
            "Evaluated {} commits, {} violations",
            report.commits_checked(),
            report.violations().len()
        );

        Ok(report)
    }

    /// Validate a raw commit message string with the subject and body rules.
    pub fn validate_message(&self, message: &str) -> Result<ValidationReport> {
        let parsed = ParsedMessage::split(message, self.config.pattern(PatternKind::MessageSplit))
            .ok_or_else(|| {
                GateError::Message(MessageError::Unparseable {
                    sha: Origin::message().identifier,
                })
            })?;

        tracing::info!("Commit message subject: {}", parsed.subject);
        tracing::info!(
            "Commit message body: {}",
            parsed.body.as_deref().unwrap_or("<none>")
        );

        let mut report = ValidationReport::new();
        report.extend(evaluate_message(&parsed, &self.config, &Origin::message()));
        Ok(report)
    }
}
