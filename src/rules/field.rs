// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Single-field validation: one pattern plus optional length bounds.

use regex::Regex;

use crate::config::LengthBound;

use super::violation::{Field, Origin, Violation, ViolationCode};

/// Constraints applied to one field value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldConstraint<'a> {
    pub pattern: Option<&'a Regex>,
    pub min_len: LengthBound,
    pub max_len: LengthBound,
}

impl<'a> FieldConstraint<'a> {
    /// A pattern check with no length bounds.
    pub fn pattern(pattern: &'a Regex) -> Self {
        Self {
            pattern: Some(pattern),
            ..Self::default()
        }
    }

    /// Length bounds with no pattern.
    pub fn lengths(min_len: LengthBound, max_len: LengthBound) -> Self {
        Self {
            pattern: None,
            min_len,
            max_len,
        }
    }

    /// Add a pattern check.
    pub fn with_pattern(mut self, pattern: &'a Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// Validate a field value. Every check runs; a value may yield 0-3 violations.
///
/// The pattern is searched anywhere in the value; anchors in the pattern
/// itself are the only way to require a full match.
pub fn validate_field(
    value: &str,
    constraint: &FieldConstraint<'_>,
    origin: &Origin,
    field: Field,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if is_too_short(value, constraint.min_len) {
        violations.push(Violation::new(origin, field, ViolationCode::TooShort, None));
    }
    if is_too_long(value, constraint.max_len) {
        violations.push(Violation::new(origin, field, ViolationCode::TooLong, None));
    }

    if let Some(pattern) = constraint.pattern {
        if !pattern.is_match(value) {
            violations.push(Violation::new(origin, field, ViolationCode::PatternMismatch, None));
        }
    }

    violations
}

/// Length in characters.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn is_too_short(value: &str, min_len: LengthBound) -> bool {
    min_len.limit().is_some_and(|min| char_len(value) < min)
}

pub(crate) fn is_too_long(value: &str, max_len: LengthBound) -> bool {
    max_len.limit().is_some_and(|max| char_len(value) > max)
}
