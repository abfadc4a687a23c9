// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::RuleSettings;

/// Get the default settings.
pub fn default_settings() -> RuleSettings {
    RuleSettings::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# commit-gate configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT
#
# Keys match the action input names. Action inputs (INPUT_* variables or
# command-line flags) override the values in this file.

# Length limits, in characters. -1 disables a limit.
commit-message-subject-min-length = 10
commit-message-subject-max-length = 72
commit-message-body-min-length = -1
commit-message-body-max-length = 72

# Policies
prohibit-blank-lines-cm-body = false
prohibit-unknown-commit-authors = true
prohibit-unknown-commit-committers = false
prohibit-unsigned-commits = false

# Patterns. An empty pattern matches anything.
re-branch-name = "^(main|(feature|fix|release)/[a-z0-9._-]+)$"
re-tag-name = '^v\d+\.\d+\.\d+$'
re-pull-request-title = "^(feat|fix|docs|refactor|test|chore)(\\([a-z0-9-]+\\))?: .+"
re-commit-author-email = "@"
re-commit-author-name = ""
re-commit-committer-email = ""
re-commit-committer-name = ""
re-commit-message-subject = "^[^a-z]"
re-commit-message-body = ""

# Splits the message into subject (group 1) and body (group 2).
# Matched with `.` spanning newlines.
re-commit-message-split = '^([^\n]*)(?:\n\n(.*))?'
"#
}
