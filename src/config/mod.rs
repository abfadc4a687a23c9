// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-gate.
//!
//! Settings are layered from built-in defaults, an optional TOML file and
//! action inputs, then compiled once into an immutable [`RuleConfig`].

mod compiled;
pub mod default;
mod loader;
mod schema;

pub use compiled::{Patterns, RuleConfig};
pub use default::default_settings;
pub use loader::{
    apply_input, apply_inputs, find_config_file, find_config_file_from, load_settings,
    load_settings_from, parse_settings,
};
pub use schema::*;
