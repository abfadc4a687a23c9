// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the raw settings that can be loaded from commit-gate.toml or
//! supplied as action inputs. Keys are identical to the input names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default split pattern: first line is the subject, everything after the
/// first blank line is the body.
pub const DEFAULT_SPLIT_PATTERN: &str = r"^([^\n]*)(?:\n\n(.*))?";

/// A length limit that may be disabled.
///
/// Serialized as an integer where `-1` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum LengthBound {
    /// No limit; the check always passes.
    #[default]
    Unbounded,
    /// Limit in characters.
    Bounded(usize),
}

impl LengthBound {
    /// Get the limit, if any.
    pub fn limit(&self) -> Option<usize> {
        match self {
            LengthBound::Unbounded => None,
            LengthBound::Bounded(n) => Some(*n),
        }
    }
}

impl TryFrom<i64> for LengthBound {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(LengthBound::Unbounded),
            n if n < 0 => Err(format!("length must be -1 or a non-negative integer, got {}", n)),
            n => usize::try_from(n)
                .map(LengthBound::Bounded)
                .map_err(|e| e.to_string()),
        }
    }
}

impl From<LengthBound> for i64 {
    fn from(bound: LengthBound) -> Self {
        match bound {
            LengthBound::Unbounded => -1,
            LengthBound::Bounded(n) => n as i64,
        }
    }
}

impl FromStr for LengthBound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("expected an integer, got '{}'", s))?;
        LengthBound::try_from(value)
    }
}

impl std::fmt::Display for LengthBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthBound::Unbounded => write!(f, "unbounded"),
            LengthBound::Bounded(n) => write!(f, "{}", n),
        }
    }
}

/// The semantic field a configured pattern applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    BranchName,
    TagName,
    PullRequestTitle,
    AuthorEmail,
    AuthorName,
    CommitterEmail,
    CommitterName,
    Subject,
    Body,
    MessageSplit,
}

impl PatternKind {
    /// The input / configuration key of this pattern.
    pub fn key(&self) -> &'static str {
        match self {
            PatternKind::BranchName => "re-branch-name",
            PatternKind::TagName => "re-tag-name",
            PatternKind::PullRequestTitle => "re-pull-request-title",
            PatternKind::AuthorEmail => "re-commit-author-email",
            PatternKind::AuthorName => "re-commit-author-name",
            PatternKind::CommitterEmail => "re-commit-committer-email",
            PatternKind::CommitterName => "re-commit-committer-name",
            PatternKind::Subject => "re-commit-message-subject",
            PatternKind::Body => "re-commit-message-body",
            PatternKind::MessageSplit => "re-commit-message-split",
        }
    }

    /// Whether `.` should also match newlines for this pattern.
    pub fn spans_lines(&self) -> bool {
        matches!(self, PatternKind::Body | PatternKind::MessageSplit)
    }

    /// Get all pattern kinds.
    pub fn all() -> &'static [PatternKind] {
        &[
            PatternKind::BranchName,
            PatternKind::TagName,
            PatternKind::PullRequestTitle,
            PatternKind::AuthorEmail,
            PatternKind::AuthorName,
            PatternKind::CommitterEmail,
            PatternKind::CommitterName,
            PatternKind::Subject,
            PatternKind::Body,
            PatternKind::MessageSplit,
        ]
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Raw rule settings, before pattern compilation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RuleSettings {
    /// Maximum length of each body line.
    pub commit_message_body_max_length: LengthBound,

    /// Minimum length of each non-empty body line.
    pub commit_message_body_min_length: LengthBound,

    /// Maximum length of the subject line.
    pub commit_message_subject_max_length: LengthBound,

    /// Minimum length of the subject line.
    pub commit_message_subject_min_length: LengthBound,

    /// Reject empty lines in the body.
    pub prohibit_blank_lines_cm_body: bool,

    /// Reject commits whose author has no GitHub account.
    pub prohibit_unknown_commit_authors: bool,

    /// Reject commits whose committer has no GitHub account.
    pub prohibit_unknown_commit_committers: bool,

    /// Reject commits without a verified signature.
    pub prohibit_unsigned_commits: bool,

    pub re_branch_name: String,
    pub re_commit_author_email: String,
    pub re_commit_author_name: String,
    pub re_commit_committer_email: String,
    pub re_commit_committer_name: String,
    pub re_commit_message_body: String,
    pub re_commit_message_split: String,
    pub re_commit_message_subject: String,
    pub re_pull_request_title: String,
    pub re_tag_name: String,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            commit_message_body_max_length: LengthBound::Unbounded,
            commit_message_body_min_length: LengthBound::Unbounded,
            commit_message_subject_max_length: LengthBound::Unbounded,
            commit_message_subject_min_length: LengthBound::Unbounded,
            prohibit_blank_lines_cm_body: false,
            prohibit_unknown_commit_authors: false,
            prohibit_unknown_commit_committers: false,
            prohibit_unsigned_commits: false,
            re_branch_name: String::new(),
            re_commit_author_email: String::new(),
            re_commit_author_name: String::new(),
            re_commit_committer_email: String::new(),
            re_commit_committer_name: String::new(),
            re_commit_message_body: String::new(),
            re_commit_message_split: DEFAULT_SPLIT_PATTERN.to_string(),
            re_commit_message_subject: String::new(),
            re_pull_request_title: String::new(),
            re_tag_name: String::new(),
        }
    }
}

impl RuleSettings {
    /// Get the pattern source for a field.
    pub fn pattern(&self, kind: PatternKind) -> &str {
        match kind {
            PatternKind::BranchName => &self.re_branch_name,
            PatternKind::TagName => &self.re_tag_name,
            PatternKind::PullRequestTitle => &self.re_pull_request_title,
            PatternKind::AuthorEmail => &self.re_commit_author_email,
            PatternKind::AuthorName => &self.re_commit_author_name,
            PatternKind::CommitterEmail => &self.re_commit_committer_email,
            PatternKind::CommitterName => &self.re_commit_committer_name,
            PatternKind::Subject => &self.re_commit_message_subject,
            PatternKind::Body => &self.re_commit_message_body,
            PatternKind::MessageSplit => &self.re_commit_message_split,
        }
    }

    /// Replace the pattern source for a field.
    pub fn set_pattern(&mut self, kind: PatternKind, source: impl Into<String>) {
        let slot = match kind {
            PatternKind::BranchName => &mut self.re_branch_name,
            PatternKind::TagName => &mut self.re_tag_name,
            PatternKind::PullRequestTitle => &mut self.re_pull_request_title,
            PatternKind::AuthorEmail => &mut self.re_commit_author_email,
            PatternKind::AuthorName => &mut self.re_commit_author_name,
            PatternKind::CommitterEmail => &mut self.re_commit_committer_email,
            PatternKind::CommitterName => &mut self.re_commit_committer_name,
            PatternKind::Subject => &mut self.re_commit_message_subject,
            PatternKind::Body => &mut self.re_commit_message_body,
            PatternKind::MessageSplit => &mut self.re_commit_message_split,
        };
        *slot = source.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = RuleSettings::default();
        assert_eq!(
            settings.commit_message_subject_max_length,
            LengthBound::Unbounded
        );
        assert!(!settings.prohibit_unsigned_commits);
        assert_eq!(settings.re_commit_message_split, DEFAULT_SPLIT_PATTERN);
        assert_eq!(settings.pattern(PatternKind::BranchName), "");
    }

    #[test]
    fn test_length_bound_from_str() {
        assert_eq!("-1".parse::<LengthBound>(), Ok(LengthBound::Unbounded));
        assert_eq!(" 72 ".parse::<LengthBound>(), Ok(LengthBound::Bounded(72)));
        assert_eq!("0".parse::<LengthBound>(), Ok(LengthBound::Bounded(0)));
        assert!("-5".parse::<LengthBound>().is_err());
        assert!("seventy".parse::<LengthBound>().is_err());
    }

    #[test]
    fn test_length_bound_limit() {
        assert_eq!(LengthBound::Unbounded.limit(), None);
        assert_eq!(LengthBound::Bounded(10).limit(), Some(10));
        assert_eq!(LengthBound::Unbounded.to_string(), "unbounded");
    }

    #[test]
    fn test_settings_use_input_names_as_keys() {
        let toml_str = r#"
commit-message-subject-max-length = 50
commit-message-body-min-length = -1
prohibit-unsigned-commits = true
re-branch-name = "^(feature|fix)/"
"#;
        let settings: RuleSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(
            settings.commit_message_subject_max_length,
            LengthBound::Bounded(50)
        );
        assert_eq!(
            settings.commit_message_body_min_length,
            LengthBound::Unbounded
        );
        assert!(settings.prohibit_unsigned_commits);
        assert_eq!(settings.re_branch_name, "^(feature|fix)/");
        assert_eq!(settings.re_commit_message_split, DEFAULT_SPLIT_PATTERN);
    }

    #[test]
    fn test_negative_length_rejected() {
        let result: Result<RuleSettings, _> =
            toml::from_str("commit-message-subject-min-length = -3");
        assert!(result.is_err());
    }

    #[test]
    fn test_set_pattern_round_trips_every_kind() {
        let mut settings = RuleSettings::default();
        for kind in PatternKind::all() {
            settings.set_pattern(*kind, kind.key());
        }
        for kind in PatternKind::all() {
            assert_eq!(settings.pattern(*kind), kind.key());
        }
    }

    #[test]
    fn test_settings_serialization() {
        let toml_str = toml::to_string(&RuleSettings::default()).unwrap();
        assert!(toml_str.contains("commit-message-subject-max-length = -1"));
        assert!(toml_str.contains("re-commit-message-split"));
    }
}
