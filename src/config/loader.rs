// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and input overrides.

use crate::error::{ConfigError, GateError, Result};
use std::path::{Path, PathBuf};

use super::default::default_settings;
use super::schema::{LengthBound, PatternKind, RuleSettings};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "commit-gate.toml",
    ".commit-gate.toml",
    ".github/commit-gate.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Check XDG config directory
    let config_dir = dirs::config_dir()?;
    let user_config = config_dir.join("commit-gate").join("config.toml");
    user_config.exists().then_some(user_config)
}

/// Load settings from the default locations.
pub fn load_settings() -> Result<RuleSettings> {
    match find_config_file() {
        Some(path) => load_settings_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(default_settings())
        }
    }
}

/// Load settings from a specific path.
pub fn load_settings_from(path: &Path) -> Result<RuleSettings> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(GateError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GateError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_settings(&content)
}

/// Parse settings from a TOML string.
pub fn parse_settings(content: &str) -> Result<RuleSettings> {
    toml::from_str(content).map_err(|e| {
        GateError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Apply a single action input on top of the settings.
///
/// `key` is the input name (e.g. `re-branch-name`). Empty numeric inputs are
/// ignored; boolean inputs are enabled only by the exact value `true`.
pub fn apply_input(settings: &mut RuleSettings, key: &str, value: &str) -> Result<()> {
    if let Some(kind) = PatternKind::all().iter().find(|k| k.key() == key) {
        settings.set_pattern(*kind, value);
        return Ok(());
    }

    match key {
        "commit-message-body-max-length" => {
            apply_length(&mut settings.commit_message_body_max_length, key, value)
        }
        "commit-message-body-min-length" => {
            apply_length(&mut settings.commit_message_body_min_length, key, value)
        }
        "commit-message-subject-max-length" => {
            apply_length(&mut settings.commit_message_subject_max_length, key, value)
        }
        "commit-message-subject-min-length" => {
            apply_length(&mut settings.commit_message_subject_min_length, key, value)
        }
        "prohibit-blank-lines-cm-body" => {
            settings.prohibit_blank_lines_cm_body = parse_flag(value);
            Ok(())
        }
        "prohibit-unknown-commit-authors" => {
            settings.prohibit_unknown_commit_authors = parse_flag(value);
            Ok(())
        }
        "prohibit-unknown-commit-committers" => {
            settings.prohibit_unknown_commit_committers = parse_flag(value);
            Ok(())
        }
        "prohibit-unsigned-commits" => {
            settings.prohibit_unsigned_commits = parse_flag(value);
            Ok(())
        }
        _ => Err(GateError::Config(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "unknown input".to_string(),
        })),
    }
}

/// Apply every provided input, in order.
pub fn apply_inputs<'a, 'b>(
    mut settings: RuleSettings,
    inputs: impl IntoIterator<Item = (&'a str, &'b str)>,
) -> Result<RuleSettings> {
    for (key, value) in inputs {
        tracing::debug!("Applying input {} = {:?}", key, value);
        apply_input(&mut settings, key, value)?;
    }
    Ok(settings)
}

fn apply_length(slot: &mut LengthBound, key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Ok(());
    }
    *slot = value.parse().map_err(|message| {
        GateError::Config(ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        })
    })?;
    Ok(())
}

fn parse_flag(value: &str) -> bool {
    value == "true"
}
