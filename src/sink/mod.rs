//! Log sinks.
//!
//! # Capabilities
//! - [`Sink`]: debug/info/error with a message and ordered fields (required)
//! - [`NamedSink`]: chainable dot-joined names (optional)
//! - [`FieldsSink`]: chainable pre-bound fields (optional)
//!
//! # Design Decisions
//! - Sinks are shared (`Arc<dyn Sink>`) and must be `Send + Sync`
//! - Optional capabilities are discovered through `as_named` / `as_fields`
//! - Extending a sink never mutates it; `with_*` returns a new sink

pub mod memory;
pub mod tracing;
pub mod writer;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::Field;

pub use memory::{MemorySink, Record};
pub use self::tracing::TracingSink;
pub use writer::{Format, WriterSink};

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    #[default]
    Info,
    Error,
}

impl Level {
    /// Lowercase level name.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Error => "error",
        }
    }

    /// Uppercase label used by text output.
    pub fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// The core sink contract.
///
/// Implementations must be safe to call concurrently; one sink is usually
/// shared by many loggers.
pub trait Sink: Send + Sync {
    /// Logs the message at DEBUG level.
    fn debug(&self, msg: &str, fields: &[Field]);

    /// Logs the message at INFO level.
    fn info(&self, msg: &str, fields: &[Field]);

    /// Logs the message at ERROR level.
    fn error(&self, msg: &str, fields: &[Field]);

    /// Logs the message at `level`.
    fn log(&self, level: Level, msg: &str, fields: &[Field]) {
        match level {
            Level::Debug => self.debug(msg, fields),
            Level::Info => self.info(msg, fields),
            Level::Error => self.error(msg, fields),
        }
    }

    /// The named capability, if this sink has one.
    fn as_named(&self) -> Option<&dyn NamedSink> {
        None
    }

    /// The fields capability, if this sink has one.
    fn as_fields(&self) -> Option<&dyn FieldsSink> {
        None
    }
}

/// Sinks that support named loggers.
///
/// Names chain: a sink named `"a"` extended with `"b"` is named `"a.b"`.
pub trait NamedSink: Sink {
    /// A new sink with `name` appended. The receiver is left unchanged.
    fn with_name(&self, name: &str) -> Arc<dyn Sink>;

    /// The configured name, `""` when unnamed.
    fn name(&self) -> &str;
}

/// Sinks that support logger level fields.
///
/// Fields chain: `[f1, f2]` extended with `[f3]` gives `[f1, f2, f3]`.
pub trait FieldsSink: Sink {
    /// A new sink with `fields` appended. The receiver is left unchanged.
    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Sink>;

    /// A copy of the configured fields.
    fn fields(&self) -> Vec<Field>;
}

/// Joins a sink name with a new segment. Empty segments leave the name as is.
pub fn join_name(current: &str, name: &str) -> String {
    match (current.is_empty(), name.is_empty()) {
        (_, true) => current.to_string(),
        (true, false) => name.to_string(),
        (false, false) => format!("{}.{}", current, name),
    }
}

/// Appends `fields` to `current` in a freshly allocated vector.
pub(crate) fn extend_fields(current: &[Field], fields: &[Field]) -> Vec<Field> {
    let mut extended = Vec::with_capacity(current.len() + fields.len());
    extended.extend_from_slice(current);
    extended.extend_from_slice(fields);
    extended
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn debug(&self, msg: &str, fields: &[Field]) {
        (**self).debug(msg, fields)
    }

    fn info(&self, msg: &str, fields: &[Field]) {
        (**self).info(msg, fields)
    }

    fn error(&self, msg: &str, fields: &[Field]) {
        (**self).error(msg, fields)
    }

    fn as_named(&self) -> Option<&dyn NamedSink> {
        (**self).as_named()
    }

    fn as_fields(&self) -> Option<&dyn FieldsSink> {
        (**self).as_fields()
    }
}
