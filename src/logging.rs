//! Process-wide logging setup
//!
//! Logging defaults to a colorized console subscriber at the level requested
//! on the command line. A json config file, when supplied, takes over the
//! formatting decisions and may also override the level.

use std::path::Path;
use std::process;

use anyhow::Context;
use serde::Deserialize;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::LogLevel;

/// Logging options read from the json config file
///
/// All fields are optional so a minimal file like `{"level": "debug"}` works.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: Option<LogLevel>,
    pub ansi: Option<bool>,
    pub with_target: Option<bool>,
    pub with_file: Option<bool>,
    pub with_line_number: Option<bool>,
}

impl LogConfig {
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

/// Installs the process-wide subscriber, from the config file when one is
/// supplied
///
/// A config file with invalid json is fatal, printing a fixed message and
/// exiting with status 1.
pub fn setup_logging(level: LogLevel, config_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = config_file else {
        init_console_logging(level);
        return Ok(());
    };

    let contents = std::fs::read_to_string(path).with_context(|| {
        format!("Could not read the logging config file '{}'", path.display())
    })?;

    match LogConfig::from_json(&contents) {
        Ok(config) => init_from_config(level, config),
        Err(_) => {
            println!(
                "File \"{}\" is not valid json, cannot continue.",
                path.display()
            );
            process::exit(1);
        }
    }

    Ok(())
}

fn init_console_logging(level: LogLevel) {
    let level = level.as_tracing_level();

    let mut tracing_builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(true);

    if level >= tracing::Level::DEBUG {
        tracing_builder = tracing_builder.with_file(true).with_line_number(true);
    }

    tracing_builder.finish().init();
}

fn init_from_config(cli_level: LogLevel, config: LogConfig) {
    let level = config.level.unwrap_or(cli_level).as_tracing_level();

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(config.ansi.unwrap_or(true))
        .with_target(config.with_target.unwrap_or(true))
        .with_file(config.with_file.unwrap_or(false))
        .with_line_number(config.with_line_number.unwrap_or(false))
        .finish()
        .init();
}
