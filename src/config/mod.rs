//! Logging configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LogConfig (validated, immutable)
//!     → build.rs (open output, wire sink, name and static fields)
//!     → Logger
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod build;
pub mod loader;
pub mod schema;
pub mod validation;

pub use build::{build_logger, static_fields};
pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LogConfig, LogFormat};
pub use validation::{validate_config, ValidationError};
