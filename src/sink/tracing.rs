//! Adapter onto the `tracing` ecosystem.
//!
//! Every record becomes a `tracing` event under the `ink` target:
//!
//! ```text
//! Sink::info("ready", [port=8080])
//!     → tracing::info!(target: "ink", logger = "app", fields = "port=8080", "ready")
//! ```
//!
//! Whatever subscriber the process installed decides filtering and output.

use std::sync::Arc;

use crate::field::Field;
use crate::render::text::format_field;
use crate::sink::{extend_fields, join_name, FieldsSink, Level, NamedSink, Sink};

/// A named, fields-capable sink that forwards to `tracing`.
#[derive(Debug, Clone)]
pub struct TracingSink {
    name: String,
    fields: Arc<[Field]>,
}

impl Default for TracingSink {
    fn default() -> Self {
        Self {
            name: String::new(),
            fields: Arc::from(Vec::new()),
        }
    }
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&self, level: Level, msg: &str, fields: &[Field]) {
        let rendered = render_fields(&self.fields, fields);
        let logger = self.name.as_str();
        match level {
            Level::Debug => ::tracing::debug!(target: "ink", logger, fields = %rendered, "{}", msg),
            Level::Info => ::tracing::info!(target: "ink", logger, fields = %rendered, "{}", msg),
            Level::Error => ::tracing::error!(target: "ink", logger, fields = %rendered, "{}", msg),
        }
    }
}

fn render_fields(bound: &[Field], fields: &[Field]) -> String {
    bound
        .iter()
        .chain(fields)
        .map(format_field)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Sink for TracingSink {
    fn debug(&self, msg: &str, fields: &[Field]) {
        self.emit(Level::Debug, msg, fields);
    }

    fn info(&self, msg: &str, fields: &[Field]) {
        self.emit(Level::Info, msg, fields);
    }

    fn error(&self, msg: &str, fields: &[Field]) {
        self.emit(Level::Error, msg, fields);
    }

    fn as_named(&self) -> Option<&dyn NamedSink> {
        Some(self)
    }

    fn as_fields(&self) -> Option<&dyn FieldsSink> {
        Some(self)
    }
}

impl NamedSink for TracingSink {
    fn with_name(&self, name: &str) -> Arc<dyn Sink> {
        Arc::new(Self {
            name: join_name(&self.name, name),
            fields: Arc::clone(&self.fields),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FieldsSink for TracingSink {
    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Sink> {
        let fields = if fields.is_empty() {
            Arc::clone(&self.fields)
        } else {
            extend_fields(&self.fields, fields).into()
        };
        Arc::new(Self {
            name: self.name.clone(),
            fields,
        })
    }

    fn fields(&self) -> Vec<Field> {
        self.fields.to_vec()
    }
}
