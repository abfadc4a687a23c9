// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-gate - policy gate for pull request and commit metadata
//!
//! Validates pull request titles, branch and tag names, and each commit's
//! author, committer, signature and message formatting against configurable
//! rules. Every violation is reported; nothing stops at the first failure.
//!
//! # Features
//!
//! - **Rule Engine**: regex and length rules per field, per-line body checks
//! - **Identity Policies**: reject unknown authors/committers and unsigned commits
//! - **Event Adapters**: pull request and push events, commits kept in event order
//! - **Layered Configuration**: defaults, `commit-gate.toml`, action inputs
//!
//! # Example
//!
//! ```
//! use commit_gate::commit::Commit;
//! use commit_gate::config::{LengthBound, RuleConfig, RuleSettings};
//! use commit_gate::rules::{RefTarget, RuleEngine};
//!
//! let settings = RuleSettings {
//!     commit_message_subject_min_length: LengthBound::Bounded(10),
//!     ..RuleSettings::default()
//! };
//! let engine = RuleEngine::new(RuleConfig::compile(&settings).unwrap());
//!
//! let commits = vec![Commit::new("1a2b3c4d5e6f", "fix bug")];
//! let report = engine.run(&RefTarget::default(), &commits).unwrap();
//!
//! assert!(report.failed());
//! assert_eq!(report.violations()[0].identifier, "1a2b3c4");
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod event;
pub mod rules;

// Re-exports for convenience
pub use config::{RuleConfig, RuleSettings};
pub use error::{GateError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-gate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
