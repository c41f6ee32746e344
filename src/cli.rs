//! Command line front end of the `ink` binary.
//!
//! ```text
//! ink [--config FILE] [--level L] [--format F] [--name N] [--at L] MESSAGE [KEY=VALUE]...
//! ```
//!
//! Flags override the config file. Each `KEY=VALUE` becomes one field, typed
//! by the first parse that succeeds: bool, signed integer, unsigned integer,
//! finite float, RFC 3339 time, string.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use thiserror::Error;

use crate::config::{build_logger, load_config, validate_config, ConfigError, LogConfig, LogFormat};
use crate::field::Field;
use crate::sink::Level;

#[derive(Parser, Debug)]
#[command(name = "ink")]
#[command(about = "Write one structured log record", long_about = None)]
pub struct Cli {
    /// TOML logging configuration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum level to write (debug, info, error).
    #[arg(short, long)]
    pub level: Option<Level>,

    /// Record format (text, json, tracing).
    #[arg(short, long)]
    pub format: Option<LogFormat>,

    /// Logger name, dot-separated.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Level of the emitted record.
    #[arg(long, default_value = "info")]
    pub at: Level,

    /// Record message.
    pub message: String,

    /// Record fields as KEY=VALUE.
    pub fields: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid field {0:?}, expected KEY=VALUE")]
    Assignment(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Parses a `KEY=VALUE` argument into a typed field.
pub fn parse_assignment(arg: &str) -> Result<Field, CliError> {
    let (key, value) = arg
        .split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| CliError::Assignment(arg.to_string()))?;
    let key = key.to_string();

    if let Ok(v) = value.parse::<bool>() {
        return Ok(Field::bool(key, v));
    }
    if let Ok(v) = value.parse::<i64>() {
        return Ok(Field::int64(key, v));
    }
    if let Ok(v) = value.parse::<u64>() {
        return Ok(Field::uint64(key, v));
    }
    if let Some(v) = value.parse::<f64>().ok().filter(|v| v.is_finite()) {
        return Ok(Field::float64(key, v));
    }
    if let Ok(v) = DateTime::parse_from_rfc3339(value) {
        return Ok(Field::time(key, v.with_timezone(&Utc)));
    }
    Ok(Field::string(key, value.to_string()))
}

impl Cli {
    /// The config file (or defaults) with command line overrides applied.
    pub fn resolve_config(&self) -> Result<LogConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => LogConfig::default(),
        };
        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(name) = &self.name {
            config.name = Some(name.clone());
        }
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    pub fn record_fields(&self) -> Result<Vec<Field>, CliError> {
        self.fields.iter().map(|arg| parse_assignment(arg)).collect()
    }
}

/// Builds the configured logger and writes the record.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.resolve_config()?;
    let fields = cli.record_fields()?;
    let logger = build_logger(&config)?;

    tracing::debug!(
        at = %cli.at,
        fields = fields.len(),
        "Emitting record"
    );
    logger.log(cli.at, &cli.message, &fields);
    Ok(())
}
