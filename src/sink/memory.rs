//! In-memory recording sink.
//!
//! Every sink derived from a `MemorySink` (through `with_name` or
//! `with_fields`) appends to the same record buffer, so a test can hand a
//! sink to a logger and inspect what all of its descendants wrote.

use std::sync::{Arc, Mutex, PoisonError};

use crate::field::Field;
use crate::sink::{extend_fields, join_name, FieldsSink, Level, NamedSink, Sink};

/// One observed log call.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    /// Name of the sink that received the call.
    pub name: String,
    pub msg: String,
    /// Bound fields of the sink followed by the call fields.
    pub fields: Vec<Field>,
}

/// A named, fields-capable sink that keeps records in memory.
#[derive(Debug, Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Record>>>,
    name: String,
    fields: Arc<[Field]>,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            name: String::new(),
            fields: Arc::from(Vec::new()),
        }
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every record written so far.
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns every record written so far.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn record(&self, level: Level, msg: &str, fields: &[Field]) {
        let record = Record {
            level,
            name: self.name.clone(),
            msg: msg.to_string(),
            fields: extend_fields(&self.fields, fields),
        };
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

impl Sink for MemorySink {
    fn debug(&self, msg: &str, fields: &[Field]) {
        self.record(Level::Debug, msg, fields);
    }

    fn info(&self, msg: &str, fields: &[Field]) {
        self.record(Level::Info, msg, fields);
    }

    fn error(&self, msg: &str, fields: &[Field]) {
        self.record(Level::Error, msg, fields);
    }

    fn as_named(&self) -> Option<&dyn NamedSink> {
        Some(self)
    }

    fn as_fields(&self) -> Option<&dyn FieldsSink> {
        Some(self)
    }
}

impl NamedSink for MemorySink {
    fn with_name(&self, name: &str) -> Arc<dyn Sink> {
        Arc::new(Self {
            records: Arc::clone(&self.records),
            name: join_name(&self.name, name),
            fields: Arc::clone(&self.fields),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FieldsSink for MemorySink {
    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Sink> {
        let fields = if fields.is_empty() {
            Arc::clone(&self.fields)
        } else {
            extend_fields(&self.fields, fields).into()
        };
        Arc::new(Self {
            records: Arc::clone(&self.records),
            name: self.name.clone(),
            fields,
        })
    }

    fn fields(&self) -> Vec<Field> {
        self.fields.to_vec()
    }
}
