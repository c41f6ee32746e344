//! Turns a validated [`LogConfig`] into a ready [`Logger`].
//!
//! # Static Field Mapping
//! ```text
//! string            → String
//! integer           → Int64
//! float             → Float64
//! boolean           → Bool
//! datetime          → Time (with offset) / String (local forms)
//! array of one kind → string, int64, float64 or bool slice
//! anything else     → Reflect (the TOML value itself)
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::loader::ConfigError;
use crate::config::schema::{LogConfig, STDERR, STDOUT};
use crate::field::{Field, Slice};
use crate::logger::Logger;
use crate::sink::{Sink, TracingSink, WriterSink};

/// Builds the logger described by `config`.
pub fn build_logger(config: &LogConfig) -> Result<Logger, ConfigError> {
    let sink: Arc<dyn Sink> = match config.format.writer_format() {
        Some(format) => Arc::new(
            WriterSink::new(open_output(&config.output)?)
                .with_format(format)
                .with_level(config.level),
        ),
        None => Arc::new(TracingSink::new()),
    };

    tracing::debug!(
        format = ?config.format,
        output = %config.output,
        min_level = %config.level,
        "Building logger"
    );

    let logger = Logger::new().with_sink(sink);
    let logger = match &config.name {
        Some(name) => logger.with_name(name),
        None => logger,
    };
    Ok(logger.with_fields(&static_fields(config)))
}

fn open_output(output: &str) -> io::Result<Box<dyn Write + Send>> {
    match output {
        STDOUT => Ok(Box::new(io::stdout())),
        STDERR => Ok(Box::new(io::stderr())),
        path => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(Box::new(file))
        }
    }
}

/// The `[fields]` table as fields, in key order.
pub fn static_fields(config: &LogConfig) -> Vec<Field> {
    config
        .fields
        .iter()
        .map(|(key, value)| toml_field(key.clone(), value))
        .collect()
}

fn toml_field(key: String, value: &toml::Value) -> Field {
    match value {
        toml::Value::String(v) => Field::string(key, v.clone()),
        toml::Value::Integer(v) => Field::int64(key, *v),
        toml::Value::Float(v) => Field::float64(key, *v),
        toml::Value::Boolean(v) => Field::bool(key, *v),
        toml::Value::Datetime(v) => {
            let text = v.to_string();
            match DateTime::parse_from_rfc3339(&text) {
                Ok(when) if v.offset.is_some() => Field::time(key, when.with_timezone(&Utc)),
                _ => Field::string(key, text),
            }
        }
        toml::Value::Array(values) => match array_slice(values) {
            Some(slice) => Field::slice(key, slice),
            None => Field::reflect(key, value.clone()),
        },
        toml::Value::Table(_) => Field::reflect(key, value.clone()),
    }
}

/// Homogeneous arrays of scalars become typed slices. Empty arrays are empty
/// string slices.
fn array_slice(values: &[toml::Value]) -> Option<Slice> {
    let Some(first) = values.first() else {
        return Some(Slice::String(Some(Vec::new())));
    };
    match first {
        toml::Value::String(_) => values
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(|v| Slice::String(Some(v))),
        toml::Value::Integer(_) => values
            .iter()
            .map(toml::Value::as_integer)
            .collect::<Option<Vec<_>>>()
            .map(|v| Slice::Int64(Some(v))),
        toml::Value::Float(_) => values
            .iter()
            .map(toml::Value::as_float)
            .collect::<Option<Vec<_>>>()
            .map(|v| Slice::Float64(Some(v))),
        toml::Value::Boolean(_) => values
            .iter()
            .map(toml::Value::as_bool)
            .collect::<Option<Vec<_>>>()
            .map(|v| Slice::Bool(Some(v))),
        _ => None,
    }
}
