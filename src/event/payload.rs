// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Webhook and REST payload shapes.
//!
//! Only the fields the adapters read are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

use crate::commit::{Commit, Identity};

/// Event payload as found at `GITHUB_EVENT_PATH`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub pull_request: Option<PullRequestPayload>,
    #[serde(default)]
    pub commits: Vec<PushedCommit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
    pub title: String,
    pub head: HeadRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadRef {
    #[serde(rename = "ref")]
    pub git_ref: String,
}

/// A commit entry of a push event.
#[derive(Debug, Clone, Deserialize)]
pub struct PushedCommit {
    pub id: String,
}

/// A commit object as returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct RestCommit {
    pub sha: String,
    #[serde(default)]
    pub parents: Vec<RestParent>,
    pub commit: RestCommitDetail,
    pub author: Option<RestAccount>,
    pub committer: Option<RestAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestParent {
    pub sha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestCommitDetail {
    pub author: Identity,
    pub committer: Identity,
    pub message: String,
    #[serde(default)]
    pub verification: Verification,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Verification {
    pub verified: bool,
}

/// A linked hosting account.
#[derive(Debug, Clone, Deserialize)]
pub struct RestAccount {
    pub login: String,
}

impl From<RestCommit> for Commit {
    fn from(rest: RestCommit) -> Self {
        Commit {
            sha: rest.sha,
            parent_count: rest.parents.len(),
            author: rest.commit.author,
            committer: rest.commit.committer,
            author_login: rest.author.map(|a| a.login),
            committer_login: rest.committer.map(|c| c.login),
            signature_verified: rest.commit.verification.verified,
            message: rest.commit.message,
        }
    }
}
