//! Command-line argument handling

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// The location of the logging config json file
    #[arg(short = 'l', long = "log-config")]
    pub log_config: Option<PathBuf>,

    /// Provide the log level. Defaults to info.
    #[arg(short = 'L', long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Example parameter selecting the run profile
    #[arg(short = 's', long = "long", value_enum)]
    pub parameter_long: ParameterLong,

    /// Example feature toggle
    #[arg(long)]
    pub feature: bool,

    /// Name of the series you want to query
    #[arg(short = 'n', long = "seriesname")]
    pub seriesname: String,
}

/// Severity levels accepted on the command line and in the json logging config
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// `critical` clamps to `ERROR` since tracing has no severity above it
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Critical => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        };

        write!(f, "{}", str)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ParameterLong {
    A,
    B,
}

impl std::fmt::Display for ParameterLong {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            ParameterLong::A => "a",
            ParameterLong::B => "b",
        };

        write!(f, "{}", str)
    }
}
