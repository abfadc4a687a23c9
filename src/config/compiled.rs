// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Compiled, immutable rule configuration.

use regex::{Regex, RegexBuilder};

use crate::error::{ConfigError, GateError, Result};

use super::schema::{LengthBound, PatternKind, RuleSettings};

/// One compiled pattern per semantic field.
#[derive(Debug, Clone)]
pub struct Patterns {
    branch_name: Regex,
    tag_name: Regex,
    pull_request_title: Regex,
    author_email: Regex,
    author_name: Regex,
    committer_email: Regex,
    committer_name: Regex,
    subject: Regex,
    body: Regex,
    message_split: Regex,
}

impl Patterns {
    /// Compile every pattern in the settings.
    pub fn compile(settings: &RuleSettings) -> Result<Self> {
        let compile = |kind: PatternKind| compile_pattern(kind, settings.pattern(kind));

        let message_split = compile(PatternKind::MessageSplit)?;
        // Group 0 is the whole match, so subject + body gives three.
        if message_split.captures_len() != 3 {
            return Err(GateError::Config(ConfigError::InvalidPattern {
                key: PatternKind::MessageSplit.key().to_string(),
                message: format!(
                    "expected exactly 2 capture groups (subject, body), found {}",
                    message_split.captures_len() - 1
                ),
            }));
        }

        Ok(Self {
            branch_name: compile(PatternKind::BranchName)?,
            tag_name: compile(PatternKind::TagName)?,
            pull_request_title: compile(PatternKind::PullRequestTitle)?,
            author_email: compile(PatternKind::AuthorEmail)?,
            author_name: compile(PatternKind::AuthorName)?,
            committer_email: compile(PatternKind::CommitterEmail)?,
            committer_name: compile(PatternKind::CommitterName)?,
            subject: compile(PatternKind::Subject)?,
            body: compile(PatternKind::Body)?,
            message_split,
        })
    }

    /// Get the compiled pattern for a field.
    pub fn get(&self, kind: PatternKind) -> &Regex {
        match kind {
            PatternKind::BranchName => &self.branch_name,
            PatternKind::TagName => &self.tag_name,
            PatternKind::PullRequestTitle => &self.pull_request_title,
            PatternKind::AuthorEmail => &self.author_email,
            PatternKind::AuthorName => &self.author_name,
            PatternKind::CommitterEmail => &self.committer_email,
            PatternKind::CommitterName => &self.committer_name,
            PatternKind::Subject => &self.subject,
            PatternKind::Body => &self.body,
            PatternKind::MessageSplit => &self.message_split,
        }
    }
}

fn compile_pattern(kind: PatternKind, source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .dot_matches_new_line(kind.spans_lines())
        .build()
        .map_err(|e| {
            GateError::Config(ConfigError::InvalidPattern {
                key: kind.key().to_string(),
                message: e.to_string(),
            })
        })
}

/// Immutable snapshot of every rule for one run.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    pub subject_min_len: LengthBound,
    pub subject_max_len: LengthBound,
    pub body_line_min_len: LengthBound,
    pub body_line_max_len: LengthBound,
    pub prohibit_blank_body_lines: bool,
    pub prohibit_unknown_authors: bool,
    pub prohibit_unknown_committers: bool,
    pub prohibit_unsigned_commits: bool,
    patterns: Patterns,
}

impl RuleConfig {
    /// Compile raw settings into a rule configuration.
    ///
    /// Every pattern is compiled here, so a bad pattern fails the run
    /// before any commit is looked at.
    pub fn compile(settings: &RuleSettings) -> Result<Self> {
        let patterns = Patterns::compile(settings)?;
        tracing::debug!("Compiled {} patterns", PatternKind::all().len());

        Ok(Self {
            subject_min_len: settings.commit_message_subject_min_length,
            subject_max_len: settings.commit_message_subject_max_length,
            body_line_min_len: settings.commit_message_body_min_length,
            body_line_max_len: settings.commit_message_body_max_length,
            prohibit_blank_body_lines: settings.prohibit_blank_lines_cm_body,
            prohibit_unknown_authors: settings.prohibit_unknown_commit_authors,
            prohibit_unknown_committers: settings.prohibit_unknown_commit_committers,
            prohibit_unsigned_commits: settings.prohibit_unsigned_commits,
            patterns,
        })
    }

    /// Get the compiled pattern for a field.
    pub fn pattern(&self, kind: PatternKind) -> &Regex {
        self.patterns.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_defaults() {
        let config = RuleConfig::compile(&RuleSettings::default()).unwrap();
        assert_eq!(config.subject_max_len, LengthBound::Unbounded);
        assert!(config.pattern(PatternKind::BranchName).is_match("anything"));
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        let mut settings = RuleSettings::default();
        settings.set_pattern(PatternKind::AuthorEmail, "([a-z]+");
        let err = RuleConfig::compile(&settings).unwrap_err();
        assert!(err.to_string().contains("re-commit-author-email"));
    }

    #[test]
    fn test_split_pattern_requires_two_groups() {
        let mut settings = RuleSettings::default();
        settings.set_pattern(PatternKind::MessageSplit, r"^([^\n]*)");
        let err = RuleConfig::compile(&settings).unwrap_err();
        assert!(err.to_string().contains("re-commit-message-split"));
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_body_pattern_spans_lines() {
        let mut settings = RuleSettings::default();
        settings.set_pattern(PatternKind::Body, "^first.*last$");
        settings.set_pattern(PatternKind::Subject, "^first.*last$");
        let config = RuleConfig::compile(&settings).unwrap();

        assert!(config.pattern(PatternKind::Body).is_match("first\nmiddle\nlast"));
        assert!(!config
            .pattern(PatternKind::Subject)
            .is_match("first\nmiddle\nlast"));
    }

    #[test]
    fn test_flags_copied_from_settings() {
        let settings = RuleSettings {
            prohibit_blank_lines_cm_body: true,
            prohibit_unsigned_commits: true,
            commit_message_body_max_length: LengthBound::Bounded(72),
            ..RuleSettings::default()
        };
        let config = RuleConfig::compile(&settings).unwrap();
        assert!(config.prohibit_blank_body_lines);
        assert!(config.prohibit_unsigned_commits);
        assert!(!config.prohibit_unknown_authors);
        assert_eq!(config.body_line_max_len, LengthBound::Bounded(72));
    }
}
