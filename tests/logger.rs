//! Logger behaviour across sinks with and without optional capabilities.

use std::sync::Arc;
use std::time::Duration;

use ink::context::{self, FieldContext};
use ink::sink::{MemorySink, WriterSink};
use ink::{Field, Level, Logger};

mod common;

use common::SharedBuffer;

fn health_fields() -> Vec<Field> {
    vec![
        Field::string("name", "ink"),
        Field::uint64("uptime_days", 9),
        Field::int64("temperature_celsius", -25),
        Field::float64("load_factor", 0.275),
        Field::bool("is_active", true),
        Field::duration("timeout", Duration::from_secs(5)),
        Field::strings("traits", Some(&["primary", "master"][..])),
    ]
}

const HEALTH_TEXT: &str = "name=ink uptime_days=9 temperature_celsius=-25 load_factor=0.275 is_active=true timeout=5s traits=[primary master]";

fn text_logger() -> (Logger, SharedBuffer) {
    let buf = SharedBuffer::new();
    let logger = Logger::new().with_sink(Arc::new(WriterSink::new(buf.clone())));
    (logger, buf)
}

#[test]
fn test_message() {
    let (logger, buf) = text_logger();
    logger.info("detected system health", &[]);
    assert_eq!(buf.lines(), vec!["INFO detected system health"]);
}

#[test]
fn test_message_with_fields() {
    let (logger, buf) = text_logger();
    logger.info("detected system health", &health_fields());
    assert_eq!(
        buf.lines(),
        vec![format!("INFO detected system health {}", HEALTH_TEXT)]
    );
}

#[test]
fn test_levels() {
    let (logger, buf) = text_logger();
    logger.info("detected system health", &[]);
    logger.debug("detected system health", &[]);
    logger.error("detected system health", &[]);
    assert_eq!(
        buf.lines(),
        vec![
            "INFO detected system health",
            "DEBUG detected system health",
            "ERROR detected system health",
        ]
    );
}

#[test]
fn test_logger_level_fields() {
    let (logger, buf) = text_logger();
    let logger = logger.with_fields(&[
        Field::string("package", "ink"),
        Field::string("source", "server"),
    ]);
    logger.info("detected system health", &health_fields());
    assert_eq!(
        buf.lines(),
        vec![format!(
            "INFO detected system health package=ink source=server {}",
            HEALTH_TEXT
        )]
    );
}

#[test]
fn test_logger_name() {
    let (logger, buf) = text_logger();
    let logger = logger.with_name("httpserver");
    logger.info("detected system health", &health_fields());
    assert_eq!(
        buf.lines(),
        vec![format!(
            "INFO detected system health logger=httpserver {}",
            HEALTH_TEXT
        )]
    );
}

#[test]
fn test_name_then_fields_keeps_order() {
    let (logger, buf) = text_logger();
    let logger = logger
        .with_fields(&[Field::string("package", "ink")])
        .with_name("http")
        .with_name("server");
    logger.info("up", &[Field::bool("ok", true)]);
    assert_eq!(
        buf.lines(),
        vec!["INFO up logger=http.server package=ink ok=true"]
    );
}

#[tokio::test]
async fn test_context_fields() {
    let (logger, buf) = text_logger();
    let ctx = FieldContext::new().with_fields(&[
        Field::string("source", "server"),
        Field::int("id", 1),
    ]);

    context::scope(ctx, async {
        let mut fields = context::current_fields();
        fields.extend(health_fields());
        logger.info("detected system health", &fields);
    })
    .await;

    assert_eq!(
        buf.lines(),
        vec![format!(
            "INFO detected system health source=server id=1 {}",
            HEALTH_TEXT
        )]
    );
}

#[tokio::test]
async fn test_context_fields_across_tasks() {
    let sink = MemorySink::new();
    let logger = Logger::new().with_sink(Arc::new(sink.clone()));

    let mut handles = Vec::new();
    for request in 0..4u32 {
        let logger = logger.clone();
        let ctx = FieldContext::new().with_fields(&[Field::uint32("request", request)]);
        handles.push(tokio::spawn(context::scope(ctx, async move {
            tokio::task::yield_now().await;
            logger.with_context_fields().info("handled", &[]);
        })));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let mut requests: Vec<u32> = sink
        .take()
        .into_iter()
        .map(|record| record.fields[0].as_uint32())
        .collect();
    requests.sort_unstable();
    assert_eq!(requests, vec![0, 1, 2, 3]);
}

#[test]
fn test_switching_sinks_moves_state() {
    let (logger, buf) = text_logger();
    let logger = logger
        .with_name("app")
        .with_fields(&[Field::string("env", "prod")]);

    let memory = MemorySink::new();
    let logger = logger.with_sink(Arc::new(memory.clone()));
    logger.log(Level::Error, "failed", &[]);

    assert!(buf.lines().is_empty());
    let records = memory.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "app");
    assert_eq!(records[0].fields, vec![Field::string("env", "prod")]);
}

#[test]
fn test_named_sink_keeps_name_out_of_fields() {
    let memory = MemorySink::new();
    let logger = Logger::new()
        .with_sink(Arc::new(memory.clone()))
        .with_name("worker");
    logger.info("idle", &[]);

    let records = memory.take();
    assert_eq!(records[0].name, "worker");
    assert!(records[0].fields.is_empty());
}

#[test]
fn test_end_to_end_memory_sink() {
    let sink = MemorySink::new();
    let logger = Logger::new().with_sink(Arc::new(sink.clone()));
    logger.info(
        "detected system health",
        &[
            Field::string("name", "ink"),
            Field::uint64("uptime_days", 9),
            Field::bool("is_active", true),
        ],
    );

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Info);
    assert_eq!(records[0].msg, "detected system health");
    let fields = &records[0].fields;
    assert_eq!(fields.len(), 3);
    assert_eq!((fields[0].key(), fields[0].as_string()), ("name", "ink"));
    assert_eq!((fields[1].key(), fields[1].as_uint64()), ("uptime_days", 9));
    assert_eq!((fields[2].key(), fields[2].as_bool()), ("is_active", true));
}
