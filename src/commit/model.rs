// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit metadata as handed to the rule engine.

use serde::{Deserialize, Serialize};

/// Length of the abbreviated commit hash used in reports.
pub const SHORT_SHA_LEN: usize = 7;

/// Name and email of an author or committer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A commit under validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash.
    pub sha: String,
    /// Number of parent commits.
    pub parent_count: usize,
    /// Git author.
    pub author: Identity,
    /// Git committer.
    pub committer: Identity,
    /// Hosting account login linked to the author, if any.
    pub author_login: Option<String>,
    /// Hosting account login linked to the committer, if any.
    pub committer_login: Option<String>,
    /// Whether the hosting platform verified the signature.
    pub signature_verified: bool,
    /// Raw commit message.
    pub message: String,
}

impl Commit {
    /// Create a single-parent, unsigned commit with no linked accounts.
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            parent_count: 1,
            message: message.into(),
            ..Self::default()
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: Identity, login: Option<&str>) -> Self {
        self.author = author;
        self.author_login = login.map(str::to_string);
        self
    }

    /// Set the committer.
    pub fn with_committer(mut self, committer: Identity, login: Option<&str>) -> Self {
        self.committer = committer;
        self.committer_login = login.map(str::to_string);
        self
    }

    /// Set the signature verification flag.
    pub fn with_signature(mut self, verified: bool) -> Self {
        self.signature_verified = verified;
        self
    }

    /// Set the number of parents.
    pub fn with_parents(mut self, parent_count: usize) -> Self {
        self.parent_count = parent_count;
        self
    }

    /// Abbreviated hash used to identify the commit in reports.
    pub fn short_sha(&self) -> &str {
        self.sha.get(..SHORT_SHA_LEN).unwrap_or(&self.sha)
    }

    /// Whether this is a merge commit.
    pub fn is_merge(&self) -> bool {
        self.parent_count > 1
    }

    pub fn author_account_linked(&self) -> bool {
        self.author_login.is_some()
    }

    pub fn committer_account_linked(&self) -> bool {
        self.committer_login.is_some()
    }
}
