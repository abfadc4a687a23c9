// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module.
//!
//! Validates pull request titles, branch and tag names, and commit
//! metadata against a [`RuleConfig`](crate::config::RuleConfig). Every rule
//! is checked for every entity; violations are collected into a
//! [`ValidationReport`] instead of stopping at the first failure.

mod commit;
mod engine;
mod field;
mod lines;
mod refs;
mod report;
mod violation;

pub use commit::{evaluate_commit, evaluate_message, parse_message};
pub use engine::RuleEngine;
pub use field::{validate_field, FieldConstraint};
pub use lines::{validate_lines, LineConstraint};
pub use refs::{evaluate_ref, RefTarget};
pub use report::ValidationReport;
pub use violation::{Field, Origin, Scope, Violation, ViolationCode};
