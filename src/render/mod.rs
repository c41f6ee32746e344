//! Line renderers shared by the writer sink and the CLI.
//!
//! - [`text`]: `LEVEL msg key=value ...`
//! - [`json`]: one JSON object per record, fields in call order

pub mod json;
pub mod text;
