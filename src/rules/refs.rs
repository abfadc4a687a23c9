// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pull request title, branch name and tag name checks.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{PatternKind, RuleConfig};

use super::field::{validate_field, FieldConstraint};
use super::violation::{Field, Origin, Violation};

lazy_static! {
    /// Fully qualified branch or tag reference.
    static ref GIT_REF_REGEX: Regex =
        Regex::new(r"^refs/(?P<kind>heads|tags)/(?P<name>.+)$").unwrap();
}

/// The ref-level names checked for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefTarget {
    pub pull_request_title: Option<String>,
    pub branch_name: Option<String>,
    pub tag_name: Option<String>,
}

impl RefTarget {
    /// A pull request: its title and head branch.
    pub fn pull_request(title: impl Into<String>, head_branch: impl Into<String>) -> Self {
        let head_branch: String = head_branch.into();
        Self {
            pull_request_title: Some(title.into()),
            branch_name: Some(head_branch).filter(|b| !b.is_empty()),
            tag_name: None,
        }
    }

    /// A pushed ref such as `refs/heads/main` or `refs/tags/v1.0.0`.
    ///
    /// Other refs yield an empty target.
    pub fn from_git_ref(git_ref: &str) -> Self {
        let Some(captures) = GIT_REF_REGEX.captures(git_ref) else {
            return Self::default();
        };
        let name = captures["name"].to_string();

        match &captures["kind"] {
            "heads" => Self {
                branch_name: Some(name),
                ..Self::default()
            },
            _ => Self {
                tag_name: Some(name),
                ..Self::default()
            },
        }
    }

    /// Whether nothing is checked at ref level.
    pub fn is_empty(&self) -> bool {
        self.pull_request_title.is_none() && self.branch_name.is_none() && self.tag_name.is_none()
    }
}

/// Check each populated ref name against its pattern.
pub fn evaluate_ref(target: &RefTarget, config: &RuleConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(ref title) = target.pull_request_title {
        tracing::info!("Pull request title: {}", title);
        violations.extend(check(
            title,
            config,
            PatternKind::PullRequestTitle,
            Origin::pull_request(),
            Field::PullRequestTitle,
        ));
    }

    if let Some(ref branch) = target.branch_name {
        tracing::info!("Branch name: {}", branch);
        violations.extend(check(
            branch,
            config,
            PatternKind::BranchName,
            Origin::branch(),
            Field::BranchName,
        ));
    }

    if let Some(ref tag) = target.tag_name {
        tracing::info!("Tag name: {}", tag);
        violations.extend(check(tag, config, PatternKind::TagName, Origin::tag(), Field::TagName));
    }

    violations
}

fn check(
    value: &str,
    config: &RuleConfig,
    kind: PatternKind,
    origin: Origin,
    field: Field,
) -> Vec<Violation> {
    let constraint = FieldConstraint::pattern(config.pattern(kind));
    validate_field(value, &constraint, &origin, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleSettings;
    use crate::rules::{Scope, ViolationCode};

    fn config_with(f: impl FnOnce(&mut RuleSettings)) -> RuleConfig {
        let mut settings = RuleSettings::default();
        f(&mut settings);
        RuleConfig::compile(&settings).unwrap()
    }

    #[test]
    fn test_from_git_ref() {
        let branch = RefTarget::from_git_ref("refs/heads/feature/login");
        assert_eq!(branch.branch_name.as_deref(), Some("feature/login"));
        assert_eq!(branch.tag_name, None);

        let tag = RefTarget::from_git_ref("refs/tags/v1.2.3");
        assert_eq!(tag.tag_name.as_deref(), Some("v1.2.3"));
        assert_eq!(tag.branch_name, None);

        assert!(RefTarget::from_git_ref("refs/notes/commits").is_empty());
    }

    #[test]
    fn test_wip_pull_request_title() {
        let config = config_with(|s| s.re_pull_request_title = "^(feat|fix|chore): .+".to_string());
        let violations = evaluate_ref(&RefTarget::pull_request("WIP", "feature/x"), &config);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, ViolationCode::PatternMismatch);
        assert_eq!(violations[0].identifier, "pull-request");
        assert_eq!(violations[0].scope, Scope::Ref);
    }

    #[test]
    fn test_pull_request_checks_title_and_branch() {
        let config = config_with(|s| {
            s.re_pull_request_title = "^feat".to_string();
            s.re_branch_name = "^feature/".to_string();
        });
        let violations = evaluate_ref(&RefTarget::pull_request("chore: x", "hotfix"), &config);
        let ids: Vec<_> = violations.iter().map(|v| v.identifier.as_str()).collect();
        assert_eq!(ids, vec!["pull-request", "branch"]);
    }

    #[test]
    fn test_tag_pattern() {
        let config = config_with(|s| s.re_tag_name = r"^v\d+\.\d+\.\d+$".to_string());
        assert!(evaluate_ref(&RefTarget::from_git_ref("refs/tags/v1.0.0"), &config).is_empty());

        let violations = evaluate_ref(&RefTarget::from_git_ref("refs/tags/latest"), &config);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].identifier, "tag");
        assert_eq!(violations[0].field, Field::TagName);
    }

    #[test]
    fn test_empty_target_has_no_violations() {
        let config = config_with(|s| s.re_branch_name = "^never$".to_string());
        assert!(evaluate_ref(&RefTarget::default(), &config).is_empty());
    }
}
