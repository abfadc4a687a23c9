// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-commit policy evaluation.

use crate::commit::{Commit, ParsedMessage};
use crate::config::{PatternKind, RuleConfig};
use crate::error::{GateError, MessageError, Result};

use super::field::{validate_field, FieldConstraint};
use super::lines::{validate_lines, LineConstraint};
use super::violation::{Field, Origin, Violation, ViolationCode};

/// Split a commit message with the configured split pattern.
pub fn parse_message(commit: &Commit, config: &RuleConfig) -> Result<ParsedMessage> {
    ParsedMessage::split(&commit.message, config.pattern(PatternKind::MessageSplit)).ok_or_else(
        || {
            GateError::Message(MessageError::Unparseable {
                sha: commit.sha.clone(),
            })
        },
    )
}

/// Evaluate every commit rule against one commit.
///
/// Merge commits are exempt and yield no violations. An unparseable message
/// is fatal. Violations come back in a fixed order: identity, signature,
/// subject, body.
pub fn evaluate_commit(commit: &Commit, config: &RuleConfig) -> Result<Vec<Violation>> {
    if commit.is_merge() {
        tracing::info!("Merge commit detected: {}", commit.sha);
        return Ok(Vec::new());
    }

    let parsed = parse_message(commit, config)?;
    log_commit(commit, &parsed);

    let origin = Origin::commit(commit);
    let mut violations = check_identities(commit, config, &origin);

    if config.prohibit_unsigned_commits && !commit.signature_verified {
        violations.push(Violation::new(
            &origin,
            Field::Signature,
            ViolationCode::UnsignedCommit,
            None,
        ));
    }

    violations.extend(evaluate_message(&parsed, config, &origin));

    Ok(violations)
}

/// Evaluate the subject and body rules against a parsed message.
///
/// Body rules are skipped entirely when the message has no body.
pub fn evaluate_message(
    parsed: &ParsedMessage,
    config: &RuleConfig,
    origin: &Origin,
) -> Vec<Violation> {
    let subject = FieldConstraint::lengths(config.subject_min_len, config.subject_max_len)
        .with_pattern(config.pattern(PatternKind::Subject));
    let mut violations = validate_field(&parsed.subject, &subject, origin, Field::Subject);

    if let Some(ref body) = parsed.body {
        let lines = LineConstraint {
            pattern: Some(config.pattern(PatternKind::Body)),
            min_len: config.body_line_min_len,
            max_len: config.body_line_max_len,
            prohibit_blank: config.prohibit_blank_body_lines,
        };
        violations.extend(validate_lines(body, &lines, origin));
    }

    violations
}

fn check_identities(commit: &Commit, config: &RuleConfig, origin: &Origin) -> Vec<Violation> {
    let mut violations = Vec::new();

    if config.prohibit_unknown_authors && !commit.author_account_linked() {
        violations.push(Violation::new(
            origin,
            Field::Author,
            ViolationCode::UnknownAccount,
            None,
        ));
    }
    let author = [
        (&commit.author.email, PatternKind::AuthorEmail, Field::AuthorEmail),
        (&commit.author.name, PatternKind::AuthorName, Field::AuthorName),
    ];
    for (value, kind, field) in author {
        check_pattern(&mut violations, value, config, kind, origin, field);
    }

    if config.prohibit_unknown_committers && !commit.committer_account_linked() {
        violations.push(Violation::new(
            origin,
            Field::Committer,
            ViolationCode::UnknownAccount,
            None,
        ));
    }
    let committer = [
        (&commit.committer.email, PatternKind::CommitterEmail, Field::CommitterEmail),
        (&commit.committer.name, PatternKind::CommitterName, Field::CommitterName),
    ];
    for (value, kind, field) in committer {
        check_pattern(&mut violations, value, config, kind, origin, field);
    }

    violations
}

fn check_pattern(
    violations: &mut Vec<Violation>,
    value: &str,
    config: &RuleConfig,
    kind: PatternKind,
    origin: &Origin,
    field: Field,
) {
    let constraint = FieldConstraint::pattern(config.pattern(kind));
    violations.extend(validate_field(value, &constraint, origin, field));
}

/// Write the diagnostic block for a commit.
fn log_commit(commit: &Commit, parsed: &ParsedMessage) {
    tracing::info!("-----");
    tracing::info!("Commit hash: {}", commit.sha);
    tracing::info!("Commit author email: {}", commit.author.email);
    tracing::info!("Commit author name: {}", commit.author.name);
    tracing::info!("Commit author GitHub account: {}", account(&commit.author_login));
    tracing::info!("Commit committer email: {}", commit.committer.email);
    tracing::info!("Commit committer name: {}", commit.committer.name);
    tracing::info!("Commit committer GitHub account: {}", account(&commit.committer_login));
    tracing::info!("Commit has valid signature: {}", commit.signature_verified);
    tracing::info!("Commit message subject: {}", parsed.subject);
    tracing::info!("Commit message body: {}", parsed.body.as_deref().unwrap_or("<none>"));
}

fn account(login: &Option<String>) -> &str {
    login.as_deref().unwrap_or("<none>")
}
