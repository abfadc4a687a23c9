// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule violation types.

use serde::Serialize;

use crate::commit::Commit;

/// What kind of entity a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Ref,
    Commit,
}

/// Violation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationCode {
    TooShort,
    TooLong,
    PatternMismatch,
    BlankLineProhibited,
    UnknownAccount,
    UnsignedCommit,
}

impl ViolationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCode::TooShort => "too-short",
            ViolationCode::TooLong => "too-long",
            ViolationCode::PatternMismatch => "pattern-mismatch",
            ViolationCode::BlankLineProhibited => "blank-line-prohibited",
            ViolationCode::UnknownAccount => "unknown-account",
            ViolationCode::UnsignedCommit => "unsigned-commit",
        }
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The checked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    PullRequestTitle,
    BranchName,
    TagName,
    Author,
    AuthorEmail,
    AuthorName,
    Committer,
    CommitterEmail,
    CommitterName,
    Signature,
    Subject,
    Body,
}

impl Field {
    /// Human-readable name used in violation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::PullRequestTitle => "Pull request title",
            Field::BranchName => "Branch name",
            Field::TagName => "Tag name",
            Field::Author => "Commit author",
            Field::AuthorEmail => "Commit author email",
            Field::AuthorName => "Commit author name",
            Field::Committer => "Commit committer",
            Field::CommitterEmail => "Commit committer email",
            Field::CommitterName => "Commit committer name",
            Field::Signature => "Commit signature",
            Field::Subject => "Commit message subject",
            Field::Body => "Commit message body",
        }
    }
}

/// The entity a violation is reported against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub scope: Scope,
    pub identifier: String,
}

impl Origin {
    pub fn pull_request() -> Self {
        Self::reference("pull-request")
    }

    pub fn branch() -> Self {
        Self::reference("branch")
    }

    pub fn tag() -> Self {
        Self::reference("tag")
    }

    /// A commit, identified by its short hash.
    pub fn commit(commit: &Commit) -> Self {
        Self {
            scope: Scope::Commit,
            identifier: commit.short_sha().to_string(),
        }
    }

    /// A standalone message that is not attached to a commit yet.
    pub fn message() -> Self {
        Self {
            scope: Scope::Commit,
            identifier: "message".to_string(),
        }
    }

    fn reference(identifier: &str) -> Self {
        Self {
            scope: Scope::Ref,
            identifier: identifier.to_string(),
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub scope: Scope,
    pub identifier: String,
    pub code: ViolationCode,
    pub field: Field,
    pub message: String,
    /// 1-based body line number, for per-line checks.
    pub line: Option<usize>,
}

impl Violation {
    /// Create a violation with the standard message for its code and field.
    pub fn new(origin: &Origin, field: Field, code: ViolationCode, line: Option<usize>) -> Self {
        Self {
            scope: origin.scope,
            identifier: origin.identifier.clone(),
            code,
            field,
            message: describe(field, code, line),
            line,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.identifier)
    }
}

fn describe(field: Field, code: ViolationCode, line: Option<usize>) -> String {
    let subject = match line {
        Some(n) => format!("{} line {}", field.label(), n),
        None => field.label().to_string(),
    };

    match code {
        ViolationCode::TooShort => format!("{} is too short", subject),
        ViolationCode::TooLong => format!("{} is too long", subject),
        ViolationCode::PatternMismatch => format!("{} does not match regex", subject),
        ViolationCode::BlankLineProhibited => format!(
            "Blank lines are not allowed in commit message body; line {}",
            line.unwrap_or_default()
        ),
        ViolationCode::UnknownAccount => format!("{} does not exist on GitHub", subject),
        ViolationCode::UnsignedCommit => "Commit has no valid signature".to_string(),
    }
}
