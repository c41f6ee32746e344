//! JSON rendering.
//!
//! A record is one object: `level`, `logger` (when named), `msg`, then the
//! fields in order. Duplicate keys are written as they come.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::field::Field;
use crate::sink::Level;

struct Line<'a> {
    level: Level,
    name: &'a str,
    msg: &'a str,
    fields: &'a [Field],
}

impl Serialize for Line<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let named = !self.name.is_empty();
        let mut map = serializer.serialize_map(Some(2 + named as usize + self.fields.len()))?;
        map.serialize_entry("level", &self.level)?;
        if named {
            map.serialize_entry("logger", self.name)?;
        }
        map.serialize_entry("msg", self.msg)?;
        for field in self.fields {
            map.serialize_entry(field.key(), &field.value())?;
        }
        map.end()
    }
}

/// Renders a record as a single line JSON object.
pub fn format_line(
    level: Level,
    name: &str,
    msg: &str,
    fields: &[Field],
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Line {
        level,
        name,
        msg,
        fields,
    })
}
