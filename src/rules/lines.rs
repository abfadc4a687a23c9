// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-line validation of commit message bodies.

use regex::Regex;

use crate::commit::split_lines;
use crate::config::LengthBound;

use super::field::{is_too_long, is_too_short};
use super::violation::{Field, Origin, Violation, ViolationCode};

/// Constraints applied to a multi-line body.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineConstraint<'a> {
    /// Matched once against the whole body.
    pub pattern: Option<&'a Regex>,
    pub min_len: LengthBound,
    pub max_len: LengthBound,
    pub prohibit_blank: bool,
}

/// Validate each line of a body, then the body as a whole.
///
/// Lines are numbered from 1. Empty lines are never min-length checked; when
/// blank lines are prohibited they report `BlankLineProhibited` instead.
pub fn validate_lines(
    body: &str,
    constraint: &LineConstraint<'_>,
    origin: &Origin,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (index, line) in split_lines(body).into_iter().enumerate() {
        let number = Some(index + 1);

        if line.is_empty() {
            if constraint.prohibit_blank {
                violations.push(Violation::new(
                    origin,
                    Field::Body,
                    ViolationCode::BlankLineProhibited,
                    number,
                ));
            }
        } else if is_too_short(line, constraint.min_len) {
            violations.push(Violation::new(origin, Field::Body, ViolationCode::TooShort, number));
        }

        if is_too_long(line, constraint.max_len) {
            violations.push(Violation::new(origin, Field::Body, ViolationCode::TooLong, number));
        }
    }

    if let Some(pattern) = constraint.pattern {
        if !pattern.is_match(body) {
            violations.push(Violation::new(
                origin,
                Field::Body,
                ViolationCode::PatternMismatch,
                None,
            ));
        }
    }

    violations
}
