// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-gate.
//!
//! Rule violations are not errors: they are collected into a
//! [`ValidationReport`](crate::rules::ValidationReport). The types here cover
//! the fatal tier (bad configuration, missing event data, unparseable
//! messages) and the final failed verdict.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-gate operations.
#[derive(Error, Debug)]
pub enum GateError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Event / commit retrieval errors
    #[error("Event error: {0}")]
    Event(#[from] EventError),

    // Commit message errors
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    // Failed verdict
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid pattern for '{key}': {message}")]
    InvalidPattern { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised while assembling the event input.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Missing event data: {what}")]
    Missing { what: String },

    #[error("Failed to read {what}: {message}")]
    ReadFailed { what: String, message: String },

    #[error("Failed to parse {what}: {message}")]
    ParseFailed { what: String, message: String },

    #[error("Commit not found: {sha}")]
    CommitNotFound { sha: String },
}

/// Commit message errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Commit message of {sha} does not match the split pattern")]
    Unparseable { sha: String },
}

/// The failed verdict of a run.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{} rule violation(s) found:\n{}", .messages.len(), .messages.join("\n"))]
    Failed { messages: Vec<String> },
}

/// Result type alias for commit-gate operations.
pub type Result<T> = std::result::Result<T, GateError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GateError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
