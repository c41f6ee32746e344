//! Conformance of the bundled line sinks.

use std::sync::Arc;

use ink::render::text::format_field;
use ink::sink::{Format, WriterSink};
use ink::{Field, Level, Logger, Sink};

mod common;

use common::{SharedBuffer, Suite};

fn text_suite() -> Suite {
    Suite {
        new_sink: |buf| Arc::new(WriterSink::new(buf)),
        format_message: |msg| msg.to_string(),
        format_level: |level| level.label().to_string(),
        format_field: |field| format!(" {}", format_field(field)),
    }
}

fn json_suite() -> Suite {
    Suite {
        new_sink: |buf| Arc::new(WriterSink::new(buf).with_format(Format::Json)),
        format_message: |msg| format!("\"msg\":{}", serde_json::to_string(msg).unwrap()),
        format_level: |level| format!("\"level\":\"{}\"", level),
        format_field: |field| {
            format!(
                "{}:{}",
                serde_json::to_string(field.key()).unwrap(),
                serde_json::to_string(&field.value()).unwrap()
            )
        },
    }
}

#[test]
fn test_text_sink_suite() {
    text_suite().run();
}

#[test]
fn test_json_sink_suite() {
    json_suite().run();
}

/// Text form of selected fields from `common::field_sets`.
const TEXT_FIELDS: &[&str] = &[
    "string_field=str1",
    "string_opt_field=str2",
    "string_opt_nil_field=<nil>",
    "string_slice_field=[str1 str2]",
    "string_slice_nil_field=[]",
    "int64_neg_field=-1",
    "int64_opt_nil_field=<nil>",
    "int64_slice_field=[-2 -1 0 1 2]",
    "int16_field=-32768",
    "uint64_field=18446744073709551615",
    "uint16_field=8080",
    "float64_field=0.275",
    "float64_neg_field=-1.5",
    "float64_slice_field=[0.5 1]",
    "complex128_field=(1-2i)",
    "complex128_slice_field=[(0+1i)]",
    "bool_slice_field=[true false]",
    "time_field=2021-03-04T05:06:07Z",
    "duration_field=5s",
    "duration_slice_field=[1.5s]",
    "stringer_field=42",
    "stringer_opt_nil_field=<nil>",
    "object_field=Object { name: \"ink\", retries: 3 }",
    "object_nil_field=<nil>",
];

#[test]
fn test_text_sink_field_forms() {
    let buf = SharedBuffer::new();
    let sink = WriterSink::new(buf.clone());
    let fields: Vec<Field> = common::field_sets()
        .into_iter()
        .flat_map(|(_, fields)| fields)
        .collect();
    sink.info(common::LOG_MESSAGE, &fields);

    let lines = buf.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.starts_with("INFO test log message "), "line [{}]", line);
    for want in TEXT_FIELDS {
        assert!(line.contains(&format!(" {}", want)), "line [{}] does not contain [{}]", line, want);
    }
}

#[test]
fn test_json_lines_parse() {
    let buf = SharedBuffer::new();
    let sink = WriterSink::new(buf.clone()).with_format(Format::Json);
    for (_, fields) in common::field_sets() {
        sink.info(common::LOG_MESSAGE, &fields);
    }
    for line in buf.lines() {
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["msg"], common::LOG_MESSAGE);
    }
}

#[test]
fn test_logger_over_text_sink_suite() {
    let suite = Suite {
        new_sink: |buf| {
            let logger = Logger::new().with_sink(Arc::new(WriterSink::new(buf)));
            Arc::new(LoggerSink(logger))
        },
        ..text_suite()
    };
    suite.run();
}

/// Exposes a logger as a sink so the suite can drive it.
struct LoggerSink(Logger);

impl Sink for LoggerSink {
    fn debug(&self, msg: &str, fields: &[Field]) {
        self.0.debug(msg, fields);
    }

    fn info(&self, msg: &str, fields: &[Field]) {
        self.0.info(msg, fields);
    }

    fn error(&self, msg: &str, fields: &[Field]) {
        self.0.error(msg, fields);
    }
}

#[test]
fn test_concurrent_writes_do_not_interleave() {
    let buf = SharedBuffer::new();
    let sink: Arc<dyn Sink> = Arc::new(WriterSink::new(buf.clone()));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let sink = Arc::clone(&sink);
            std::thread::spawn(move || {
                for i in 0..50 {
                    sink.info("tick", &[Field::int64("worker", worker), Field::int64("i", i)]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = buf.lines();
    assert_eq!(lines.len(), 400);
    assert!(lines.iter().all(|line| line.starts_with("INFO tick worker=")));
}

#[test]
fn test_level_filter_applies_to_every_entry_point() {
    let buf = SharedBuffer::new();
    let sink = WriterSink::new(buf.clone()).with_level(Level::Error);
    sink.debug("a", &[]);
    sink.info("b", &[]);
    sink.log(Level::Info, "c", &[]);
    sink.error("d", &[]);
    assert_eq!(buf.lines(), vec!["ERROR d"]);
}
