// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message splitting.

use regex::Regex;

/// A commit message split into subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    /// Subject line.
    pub subject: String,
    /// Body; `None` when the split pattern's body group did not participate.
    pub body: Option<String>,
}

impl ParsedMessage {
    /// Split a raw message with the configured split pattern.
    ///
    /// Group 1 is the subject and group 2 the body. Returns `None` when the
    /// pattern does not match or the subject group is missing.
    pub fn split(raw: &str, pattern: &Regex) -> Option<Self> {
        let captures = pattern.captures(raw)?;
        let subject = captures.get(1)?.as_str().to_string();
        let body = captures.get(2).map(|m| m.as_str().to_string());

        Some(Self { subject, body })
    }

    /// Body lines, in order. An empty body has no lines.
    pub fn body_lines(&self) -> Vec<&str> {
        match self.body.as_deref() {
            Some(body) => split_lines(body),
            None => Vec::new(),
        }
    }
}

/// Split text on `\n`, keeping empty lines. Empty text yields no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}
