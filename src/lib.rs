//! ink: a structured-logging facade.
//!
//! # Architecture Overview
//!
//! ```text
//!   call site                      facade                      backends
//!  ───────────────────────────────────────────────────────────────────────────
//!   Field::int64("n", 1)  ─┐
//!   any!("cfg", value)    ─┼─▶  Logger ──▶ dyn Sink ──┬─▶ WriterSink  (text / json lines)
//!   context fields        ─┘    name,       Named?    ├─▶ MemorySink  (tests)
//!                               fields      Fields?   └─▶ TracingSink (tracing events)
//! ```
//!
//! - [`field`]: the typed key/value pair and its constructors
//! - [`sink`]: the capability traits and bundled sinks
//! - [`logger`]: name and field bookkeeping over any sink
//! - [`context`]: fields carried by the current task
//! - [`config`] / [`cli`]: TOML configuration and the `ink` binary

pub mod cli;
pub mod config;
pub mod context;
pub mod field;
pub mod logger;
pub mod render;
pub mod sink;

pub use config::{build_logger, load_config, LogConfig};
pub use context::FieldContext;
pub use field::{Field, FieldType, Reflect, Slice, Stringer, Value};
pub use logger::Logger;
pub use sink::{FieldsSink, Level, NamedSink, Sink};
