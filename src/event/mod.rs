// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Event adapters.
//!
//! Turn the triggering event (pull request or push) into the ref names and
//! ordered commit list the rule engine checks. Remote retrieval is behind
//! [`CommitSource`]; the adapters only decide what to ask for and keep the
//! commits in event order.

mod payload;
mod source;

use std::path::Path;

use crate::commit::Commit;
use crate::error::{EventError, GateError, Result};
use crate::rules::RefTarget;

pub use payload::{EventPayload, PullRequestPayload, PushedCommit, RestCommit};
pub use source::{CommitSource, JsonCommitSource};

/// The kind of triggering event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    PullRequest,
    Push,
    Other(String),
}

impl EventKind {
    /// Map an event name such as `GITHUB_EVENT_NAME`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "pull_request" => EventKind::PullRequest,
            "push" => EventKind::Push,
            other => EventKind::Other(other.to_string()),
        }
    }
}

/// Everything the engine checks for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventInput {
    pub target: RefTarget,
    /// Commits in event order.
    pub commits: Vec<Commit>,
}

/// Read the event payload file.
pub fn load_payload(path: &Path) -> Result<EventPayload> {
    tracing::debug!("Loading event payload from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| {
        GateError::Event(EventError::ReadFailed {
            what: format!("event payload {}", path.display()),
            message: e.to_string(),
        })
    })?;

    serde_json::from_str(&content).map_err(|e| {
        GateError::Event(EventError::ParseFailed {
            what: "event payload".to_string(),
            message: e.to_string(),
        })
    })
}

/// Assemble the engine input for an event.
pub fn assemble(
    kind: &EventKind,
    payload: &EventPayload,
    source: &dyn CommitSource,
) -> Result<EventInput> {
    match kind {
        EventKind::PullRequest => pull_request_input(payload, source),
        EventKind::Push => push_input(payload, source),
        EventKind::Other(name) => {
            tracing::info!("Event '{}' has nothing to check", name);
            Ok(EventInput::default())
        }
    }
}

/// Pull request: title, head branch and every commit of the pull request.
fn pull_request_input(payload: &EventPayload, source: &dyn CommitSource) -> Result<EventInput> {
    let pull_request = payload.pull_request.as_ref().ok_or_else(|| {
        GateError::Event(EventError::Missing {
            what: "pull_request in event payload".to_string(),
        })
    })?;

    Ok(EventInput {
        target: RefTarget::pull_request(&pull_request.title, &pull_request.head.git_ref),
        commits: source.pull_request_commits(pull_request.number)?,
    })
}

/// Push: branch or tag from the pushed ref, and each pushed commit.
fn push_input(payload: &EventPayload, source: &dyn CommitSource) -> Result<EventInput> {
    let git_ref = payload.git_ref.as_deref().ok_or_else(|| {
        GateError::Event(EventError::Missing {
            what: "ref in event payload".to_string(),
        })
    })?;

    let commits = payload
        .commits
        .iter()
        .map(|pushed| source.commit(&pushed.id))
        .collect::<Result<Vec<_>>>()?;

    Ok(EventInput {
        target: RefTarget::from_git_ref(git_ref),
        commits,
    })
}
