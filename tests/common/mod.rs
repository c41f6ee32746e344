//! Shared utilities for integration tests.
//!
//! [`Suite`] is a behaviour driven conformance check for line oriented sinks:
//! given a way to build a sink over a buffer and to format the pieces of a
//! record, it checks messages, levels and every field type end to end.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use num_complex::Complex;

use ink::{Field, Level, Sink};

pub const LOG_MESSAGE: &str = "test log message";

/// A cloneable in-memory writer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug)]
pub struct Object {
    pub name: &'static str,
    pub retries: u8,
}

/// Conformance suite for sinks that write one line per record.
pub struct Suite {
    pub new_sink: fn(SharedBuffer) -> Arc<dyn Sink>,
    pub format_message: fn(&str) -> String,
    pub format_level: fn(Level) -> String,
    pub format_field: fn(&Field) -> String,
}

impl Suite {
    fn first_line(&self, write: impl FnOnce(&dyn Sink)) -> String {
        let buf = SharedBuffer::new();
        let sink = (self.new_sink)(buf.clone());
        write(&*sink);
        buf.lines().into_iter().next().expect("sink wrote no line")
    }

    pub fn check_message(&self) {
        for msg in ["", LOG_MESSAGE] {
            let line = self.first_line(|sink| sink.info(msg, &[]));
            let want = (self.format_message)(msg);
            assert!(line.contains(&want), "line [{}] does not contain [{}]", line, want);
        }
    }

    pub fn check_levels(&self) {
        for level in [Level::Debug, Level::Info, Level::Error] {
            let line = self.first_line(|sink| sink.log(level, LOG_MESSAGE, &[]));
            let want = (self.format_level)(level);
            assert!(line.contains(&want), "line [{}] does not contain [{}]", line, want);
        }
    }

    pub fn check_fields(&self) {
        for (name, fields) in field_sets() {
            let line = self.first_line(|sink| sink.info(LOG_MESSAGE, &fields));
            for field in &fields {
                let want = (self.format_field)(field);
                assert!(
                    line.contains(&want),
                    "{}: line [{}] does not contain [{}]",
                    name,
                    line,
                    want
                );
            }
        }
    }

    pub fn run(&self) {
        self.check_message();
        self.check_levels();
        self.check_fields();
    }
}

/// One set of fields per field type, covering plain, optional and slice
/// constructors.
pub fn field_sets() -> Vec<(&'static str, Vec<Field>)> {
    let when = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
    vec![
        (
            "string",
            vec![
                Field::string("string_field", "str1"),
                Field::string_opt("string_opt_field", Some("str2")),
                Field::string_opt("string_opt_nil_field", None::<&str>),
                Field::strings("string_slice_field", Some(&["str1", "str2"][..])),
                Field::strings("string_slice_nil_field", None),
            ],
        ),
        (
            "int64",
            vec![
                Field::int64("int64_field", 1),
                Field::int64("int64_neg_field", -1),
                Field::int64_opt("int64_opt_field", Some(2)),
                Field::int64_opt("int64_opt_nil_field", None),
                Field::int64s("int64_slice_field", Some(&[-2, -1, 0, 1, 2][..])),
                Field::int64s("int64_slice_nil_field", None),
            ],
        ),
        (
            "int32",
            vec![
                Field::int32("int32_field", 1),
                Field::int32_opt("int32_opt_neg_field", Some(-2)),
                Field::int32s("int32_slice_field", Some(&[-1, 0, 1][..])),
            ],
        ),
        (
            "int16",
            vec![
                Field::int16("int16_field", i16::MIN),
                Field::int16s("int16_slice_nil_field", None),
            ],
        ),
        (
            "int8",
            vec![Field::int8("int8_field", -1), Field::int8s("int8_slice_field", Some(&[1, 2][..]))],
        ),
        (
            "int",
            vec![Field::int("int_field", -1), Field::int_opt("int_opt_field", Some(2))],
        ),
        (
            "uint64",
            vec![
                Field::uint64("uint64_field", u64::MAX),
                Field::uint64s("uint64_slice_field", Some(&[0, 1][..])),
            ],
        ),
        (
            "uint32",
            vec![Field::uint32("uint32_field", 1), Field::uint32_opt("uint32_opt_nil_field", None)],
        ),
        (
            "uint16",
            vec![Field::uint16("uint16_field", 8080), Field::uint16s("uint16_slice_field", Some(&[80][..]))],
        ),
        (
            "uint8",
            vec![Field::uint8("uint8_field", 255), Field::uint8s("uint8_slice_nil_field", None)],
        ),
        (
            "uint",
            vec![Field::uint("uint_field", 1), Field::uints("uint_slice_field", Some(&[1, 2][..]))],
        ),
        (
            "float64",
            vec![
                Field::float64("float64_field", 0.275),
                Field::float64("float64_neg_field", -1.5),
                Field::float64s("float64_slice_field", Some(&[0.5, 1.0][..])),
            ],
        ),
        (
            "float32",
            vec![Field::float32("float32_field", 0.5), Field::float32_opt("float32_opt_nil_field", None)],
        ),
        (
            "complex128",
            vec![
                Field::complex128("complex128_field", Complex::new(1.0, -2.0)),
                Field::complex128s("complex128_slice_field", Some(&[Complex::new(0.0, 1.0)][..])),
            ],
        ),
        (
            "complex64",
            vec![Field::complex64("complex64_field", Complex::new(1.5, 2.0))],
        ),
        (
            "bool",
            vec![
                Field::bool("bool_field", true),
                Field::bool_opt("bool_opt_field", Some(false)),
                Field::bools("bool_slice_field", Some(&[true, false][..])),
            ],
        ),
        (
            "time",
            vec![Field::time("time_field", when), Field::times("time_slice_field", Some(&[when][..]))],
        ),
        (
            "duration",
            vec![
                Field::duration("duration_field", Duration::from_secs(5)),
                Field::durations("duration_slice_field", Some(&[Duration::from_millis(1500)][..])),
            ],
        ),
        (
            "stringer",
            vec![
                Field::stringer("stringer_field", 42u32),
                Field::stringer_opt("stringer_opt_nil_field", None::<u32>),
            ],
        ),
        (
            "object",
            vec![
                Field::reflect("object_field", Object { name: "ink", retries: 3 }),
                Field::reflect("object_nil_field", ()),
            ],
        ),
    ]
}
