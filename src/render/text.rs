//! Plain text rendering.

use std::fmt::Write as _;

use crate::field::Field;
use crate::sink::Level;

/// Renders a field as `key=value`.
pub fn format_field(field: &Field) -> String {
    format!("{}={}", field.key(), field.value())
}

/// Renders a record as `LEVEL msg key=value key=value`.
pub fn format_line(level: Level, msg: &str, fields: &[Field]) -> String {
    let mut line = String::with_capacity(msg.len() + 8 + fields.len() * 16);
    line.push_str(level.label());
    line.push(' ');
    line.push_str(msg);
    for field in fields {
        // writing into a String cannot fail
        let _ = write!(line, " {}={}", field.key(), field.value());
    }
    line
}
