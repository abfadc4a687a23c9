// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// commit-gate - policy gate for pull requests and pushes
///
/// Checks pull request titles, branch and tag names, and the author,
/// committer, signature and message of every commit against configurable
/// rules, and reports every violation found.
#[derive(Parser, Debug)]
#[command(name = "commit-gate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Policy gate for pull request and commit metadata", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for the report
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub event: EventArgs,

    #[command(flatten)]
    pub inputs: InputArgs,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
    /// GitHub workflow command annotations
    Github,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the triggering event (default command)
    Check,

    /// Validate a single commit message
    Message(MessageArgs),

    /// Initialize commit-gate configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Where the triggering event is described.
#[derive(Args, Debug, Default, Clone)]
pub struct EventArgs {
    /// Name of the triggering event (pull_request, push, ...)
    #[arg(long, global = true, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Path to the event payload JSON
    #[arg(long, global = true, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Path to the commit details JSON fetched for this event
    #[arg(long, global = true, env = "COMMIT_GATE_COMMITS")]
    pub commits: Option<PathBuf>,
}

/// Rule inputs. Each overrides the matching configuration file key.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    #[arg(long, global = true, env = "INPUT_COMMIT-MESSAGE-BODY-MAX-LENGTH", value_name = "N")]
    pub commit_message_body_max_length: Option<String>,

    #[arg(long, global = true, env = "INPUT_COMMIT-MESSAGE-BODY-MIN-LENGTH", value_name = "N")]
    pub commit_message_body_min_length: Option<String>,

    #[arg(long, global = true, env = "INPUT_COMMIT-MESSAGE-SUBJECT-MAX-LENGTH", value_name = "N")]
    pub commit_message_subject_max_length: Option<String>,

    #[arg(long, global = true, env = "INPUT_COMMIT-MESSAGE-SUBJECT-MIN-LENGTH", value_name = "N")]
    pub commit_message_subject_min_length: Option<String>,

    #[arg(long, global = true, env = "INPUT_PROHIBIT-BLANK-LINES-CM-BODY", value_name = "BOOL")]
    pub prohibit_blank_lines_cm_body: Option<String>,

    #[arg(long, global = true, env = "INPUT_PROHIBIT-UNKNOWN-COMMIT-AUTHORS", value_name = "BOOL")]
    pub prohibit_unknown_commit_authors: Option<String>,

    #[arg(long, global = true, env = "INPUT_PROHIBIT-UNKNOWN-COMMIT-COMMITTERS", value_name = "BOOL")]
    pub prohibit_unknown_commit_committers: Option<String>,

    #[arg(long, global = true, env = "INPUT_PROHIBIT-UNSIGNED-COMMITS", value_name = "BOOL")]
    pub prohibit_unsigned_commits: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-BRANCH-NAME", value_name = "REGEX")]
    pub re_branch_name: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-COMMIT-AUTHOR-EMAIL", value_name = "REGEX")]
    pub re_commit_author_email: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-COMMIT-AUTHOR-NAME", value_name = "REGEX")]
    pub re_commit_author_name: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-COMMIT-COMMITTER-EMAIL", value_name = "REGEX")]
    pub re_commit_committer_email: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-COMMIT-COMMITTER-NAME", value_name = "REGEX")]
    pub re_commit_committer_name: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-COMMIT-MESSAGE-BODY", value_name = "REGEX")]
    pub re_commit_message_body: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-COMMIT-MESSAGE-SPLIT", value_name = "REGEX")]
    pub re_commit_message_split: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-COMMIT-MESSAGE-SUBJECT", value_name = "REGEX")]
    pub re_commit_message_subject: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-PULL-REQUEST-TITLE", value_name = "REGEX")]
    pub re_pull_request_title: Option<String>,

    #[arg(long, global = true, env = "INPUT_RE-TAG-NAME", value_name = "REGEX")]
    pub re_tag_name: Option<String>,
}

impl InputArgs {
    /// Provided inputs as `(input name, value)` pairs.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("commit-message-body-max-length", &self.commit_message_body_max_length),
            ("commit-message-body-min-length", &self.commit_message_body_min_length),
            ("commit-message-subject-max-length", &self.commit_message_subject_max_length),
            ("commit-message-subject-min-length", &self.commit_message_subject_min_length),
            ("prohibit-blank-lines-cm-body", &self.prohibit_blank_lines_cm_body),
            ("prohibit-unknown-commit-authors", &self.prohibit_unknown_commit_authors),
            ("prohibit-unknown-commit-committers", &self.prohibit_unknown_commit_committers),
            ("prohibit-unsigned-commits", &self.prohibit_unsigned_commits),
            ("re-branch-name", &self.re_branch_name),
            ("re-commit-author-email", &self.re_commit_author_email),
            ("re-commit-author-name", &self.re_commit_author_name),
            ("re-commit-committer-email", &self.re_commit_committer_email),
            ("re-commit-committer-name", &self.re_commit_committer_name),
            ("re-commit-message-body", &self.re_commit_message_body),
            ("re-commit-message-split", &self.re_commit_message_split),
            ("re-commit-message-subject", &self.re_commit_message_subject),
            ("re-pull-request-title", &self.re_pull_request_title),
            ("re-tag-name", &self.re_tag_name),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

/// Arguments for the message command.
#[derive(Args, Debug, Default, Clone)]
pub struct MessageArgs {
    /// File holding the message (reads stdin if omitted)
    pub file: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Check)
    }
}
