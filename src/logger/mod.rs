//! Logger facade.
//!
//! # Data Flow
//! ```text
//! Logger::info(msg, call fields)
//!     → [no sink]           drop
//!     → [logger-held state] logger=<name>, logger fields, call fields
//!     → Sink::info
//! ```
//!
//! # Design Decisions
//! - Name and fields live in the sink whenever it has the matching
//!   capability; the logger keeps them only as a fallback
//! - `with_*` consume the logger; clone it first to keep the original
//! - A logger without a sink is valid and discards everything

use std::fmt;
use std::sync::Arc;

use crate::field::Field;
use crate::sink::{extend_fields, join_name, Level, Sink};

/// Key of the field carrying a logger-held name.
pub const NAME_KEY: &str = "logger";

/// A cheap, cloneable handle that writes structured records to a sink.
#[derive(Clone)]
pub struct Logger {
    sink: Option<Arc<dyn Sink>>,
    /// Non-empty only when the sink cannot hold names.
    name: String,
    /// Non-empty only when the sink cannot hold fields.
    fields: Arc<[Field]>,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            sink: None,
            name: String::new(),
            fields: Arc::from(Vec::new()),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("has_sink", &self.sink.is_some())
            .field("name", &self.name())
            .field("fields", &self.fields())
            .finish()
    }
}

impl Logger {
    /// A logger without a sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sink, carrying the current name and fields over to it.
    pub fn with_sink(self, sink: Arc<dyn Sink>) -> Self {
        let name = self.name().to_string();
        let fields = self.fields();
        Logger {
            sink: Some(sink),
            ..Logger::default()
        }
        .with_name(&name)
        .with_fields(&fields)
    }

    /// Appends a dot-separated name segment.
    pub fn with_name(mut self, name: &str) -> Self {
        if name.is_empty() {
            return self;
        }
        let extended = self
            .sink
            .as_deref()
            .and_then(|sink| sink.as_named())
            .map(|named| named.with_name(name));
        match extended {
            Some(sink) => self.sink = Some(sink),
            None => self.name = join_name(&self.name, name),
        }
        self
    }

    /// Appends logger level fields.
    pub fn with_fields(mut self, fields: &[Field]) -> Self {
        if fields.is_empty() {
            return self;
        }
        let extended = self
            .sink
            .as_deref()
            .and_then(|sink| sink.as_fields())
            .map(|capable| capable.with_fields(fields));
        match extended {
            Some(sink) => self.sink = Some(sink),
            None => self.fields = extend_fields(&self.fields, fields).into(),
        }
        self
    }

    /// The current sink, if any.
    pub fn sink(&self) -> Option<&Arc<dyn Sink>> {
        self.sink.as_ref()
    }

    /// The effective name, from the sink when it holds names.
    pub fn name(&self) -> &str {
        match self.sink.as_deref().and_then(|sink| sink.as_named()) {
            Some(named) => named.name(),
            None => &self.name,
        }
    }

    /// The effective logger level fields, from the sink when it holds them.
    pub fn fields(&self) -> Vec<Field> {
        match self.sink.as_deref().and_then(|sink| sink.as_fields()) {
            Some(capable) => capable.fields(),
            None => self.fields.to_vec(),
        }
    }

    pub fn debug(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Debug, msg, fields);
    }

    pub fn info(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Info, msg, fields);
    }

    pub fn error(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Error, msg, fields);
    }

    /// Logs at `level`. Does nothing without a sink.
    pub fn log(&self, level: Level, msg: &str, fields: &[Field]) {
        let Some(sink) = &self.sink else {
            return;
        };
        if self.name.is_empty() && self.fields.is_empty() {
            sink.log(level, msg, fields);
            return;
        }
        sink.log(level, msg, &self.merge(fields));
    }

    fn merge(&self, fields: &[Field]) -> Vec<Field> {
        let named = !self.name.is_empty();
        let mut merged = Vec::with_capacity(named as usize + self.fields.len() + fields.len());
        if named {
            merged.push(Field::string(NAME_KEY, self.name.clone()));
        }
        merged.extend_from_slice(&self.fields);
        merged.extend_from_slice(fields);
        merged
    }
}
