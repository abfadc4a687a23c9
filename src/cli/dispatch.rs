// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use crate::config::{self, RuleConfig};
use crate::error::{ConfigError, EventError, GateError, Result, ResultExt};
use crate::event::{self, EventInput, EventKind, JsonCommitSource};
use crate::rules::RuleEngine;

use super::args::{Cli, Commands, InitArgs, MessageArgs};

/// Name of the file written by `init`.
const CONFIG_FILE_NAME: &str = "commit-gate.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check => run_check(&cli),
        Commands::Message(args) => run_message(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Build the rule engine from the configuration file and inputs.
fn load_engine(cli: &Cli) -> Result<RuleEngine> {
    let settings = match &cli.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings()?,
    };
    let settings = config::apply_inputs(settings, cli.inputs.pairs())?;

    Ok(RuleEngine::new(RuleConfig::compile(&settings)?))
}

/// Run the check command.
fn run_check(cli: &Cli) -> Result<()> {
    let engine = load_engine(cli)?;

    let event_name = cli
        .event
        .event_name
        .as_deref()
        .ok_or_else(|| missing("event name"))?;
    let kind = EventKind::from_name(event_name);
    tracing::debug!("Running check for event {:?}", kind);

    let input = match kind {
        EventKind::Other(_) => {
            event::assemble(&kind, &Default::default(), &JsonCommitSource::default())?
        }
        _ => {
            let payload_path = cli
                .event
                .event_path
                .as_deref()
                .ok_or_else(|| missing("event payload path"))?;
            let commits_path = cli
                .event
                .commits
                .as_deref()
                .ok_or_else(|| missing("commits file"))?;

            let payload = event::load_payload(payload_path)?;
            let source = JsonCommitSource::load(commits_path)?;
            event::assemble(&kind, &payload, &source)?
        }
    };

    report_run(cli, &engine, &input)
}

fn report_run(cli: &Cli, engine: &RuleEngine, input: &EventInput) -> Result<()> {
    let report = engine.run(&input.target, &input.commits)?;
    report.print(cli.format);
    report.into_result().map_err(GateError::from)
}

/// Run the message command.
fn run_message(cli: &Cli, args: MessageArgs) -> Result<()> {
    let engine = load_engine(cli)?;

    let raw = match args.file {
        Some(ref path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let report = engine.validate_message(&prepare_message(&raw))?;
    report.print(cli.format);
    report.into_result().map_err(GateError::from)
}

/// Strip git comment lines and trailing newlines from an edited message.
fn prepare_message(raw: &str) -> String {
    raw.split('\n')
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end_matches('\n')
        .to_string()
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    let config_path = std::path::Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(GateError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, config::default::example_config())
        .context("Failed to write configuration")?;

    println!("✓ Created {}", CONFIG_FILE_NAME);

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("commit-gate {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

fn missing(what: &str) -> GateError {
    GateError::Event(EventError::Missing {
        what: what.to_string(),
    })
}
