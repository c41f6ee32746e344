//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::sink::{Format, Level};

/// `output` values naming the standard streams.
pub const STDOUT: &str = "stdout";
pub const STDERR: &str = "stderr";

/// Root logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level written by text and json outputs.
    pub level: Level,

    /// Record format.
    pub format: LogFormat,

    /// `"stdout"`, `"stderr"` or a file path (appended to).
    pub output: String,

    /// Dot-separated logger name.
    pub name: Option<String>,

    /// Static fields attached to every record, in key order.
    pub fields: toml::Table,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: LogFormat::Text,
            output: STDOUT.to_string(),
            name: None,
            fields: toml::Table::new(),
        }
    }
}

/// Record format, including the `tracing` passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
    /// Hand records to the process `tracing` subscriber.
    Tracing,
}

impl LogFormat {
    /// The writer line format, `None` for the tracing passthrough.
    pub fn writer_format(self) -> Option<Format> {
        match self {
            LogFormat::Text => Some(Format::Text),
            LogFormat::Json => Some(Format::Json),
            LogFormat::Tracing => None,
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "tracing" => Ok(LogFormat::Tracing),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}
