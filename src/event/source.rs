// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit retrieval.

use std::path::Path;

use crate::commit::Commit;
use crate::error::{EventError, GateError, Result};

use super::payload::RestCommit;

/// Where the adapters get full commit details from.
pub trait CommitSource {
    /// All commits of a pull request, oldest first.
    fn pull_request_commits(&self, number: u64) -> Result<Vec<Commit>>;

    /// A single commit by hash.
    fn commit(&self, sha: &str) -> Result<Commit>;
}

/// Commits loaded from a JSON array of REST commit objects.
///
/// The file holds what a collaborator fetched for this event: the commit
/// list of the pull request, or the details of each pushed commit.
#[derive(Debug, Clone, Default)]
pub struct JsonCommitSource {
    commits: Vec<Commit>,
}

impl JsonCommitSource {
    /// Load commits from a file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading commits from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| {
            GateError::Event(EventError::ReadFailed {
                what: format!("commits file {}", path.display()),
                message: e.to_string(),
            })
        })?;

        Self::parse(&content)
    }

    /// Parse commits from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        let rest: Vec<RestCommit> = serde_json::from_str(content).map_err(|e| {
            GateError::Event(EventError::ParseFailed {
                what: "commits".to_string(),
                message: e.to_string(),
            })
        })?;

        Ok(Self::from_commits(rest.into_iter().map(Commit::from).collect()))
    }

    /// Wrap already-built commits.
    pub fn from_commits(commits: Vec<Commit>) -> Self {
        Self { commits }
    }
}

impl CommitSource for JsonCommitSource {
    fn pull_request_commits(&self, number: u64) -> Result<Vec<Commit>> {
        tracing::debug!("Using {} commits for pull request #{}", self.commits.len(), number);
        Ok(self.commits.clone())
    }

    fn commit(&self, sha: &str) -> Result<Commit> {
        self.commits
            .iter()
            .find(|c| c.sha == sha)
            .cloned()
            .ok_or_else(|| {
                GateError::Event(EventError::CommitNotFound {
                    sha: sha.to_string(),
                })
            })
    }
}
