//! Line-oriented sink over any `io::Write`.
//!
//! # Design Decisions
//! - Base capability only: no names and no bound fields; wrap it in a
//!   `Logger` to get both
//! - One lock per record, so lines from concurrent callers never interleave
//! - Write failures are reported through `tracing` and otherwise ignored

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::render;
use crate::sink::{Level, Sink};

/// Line format of a [`WriterSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Writes one line per record to the wrapped writer.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    format: Format,
    level: Level,
}

impl<W: Write + Send> WriterSink<W> {
    /// A text sink that writes every level.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            format: Format::Text,
            level: Level::Debug,
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Drops records below `level`.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_record(&self, level: Level, msg: &str, fields: &[Field]) {
        if level < self.level {
            return;
        }
        let line = match self.format {
            Format::Text => render::text::format_line(level, msg, fields),
            Format::Json => match render::json::format_line(level, "", msg, fields) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to encode log record");
                    return;
                }
            },
        };
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = write_line(&mut *writer, &line) {
            tracing::warn!(error = %e, "Failed to write log record");
        }
    }
}

fn write_line<W: Write + ?Sized>(writer: &mut W, line: &str) -> io::Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn debug(&self, msg: &str, fields: &[Field]) {
        self.write_record(Level::Debug, msg, fields);
    }

    fn info(&self, msg: &str, fields: &[Field]) {
        self.write_record(Level::Info, msg, fields);
    }

    fn error(&self, msg: &str, fields: &[Field]) {
        self.write_record(Level::Error, msg, fields);
    }
}
