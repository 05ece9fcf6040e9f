//! Tree formatting and display
//!
//! This module provides formatters for outputting a walked `Tree` in
//! three formats:
//! - Box-drawing text with a summary line, optionally colored
//! - Nested JSON
//! - Nested XML
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `label` - Per-node label selection (name, path, permissions)
//! - `tree` - Box-drawing tree formatter
//! - `json` - JSON formatter
//! - `xml` - XML formatter

mod config;
mod json;
mod label;
mod tree;
mod xml;

// Re-export public types and functions
pub use config::{OutputConfig, OutputFormat, PathStyle};
pub use json::JsonFormatter;
pub use label::label;
pub use tree::TreeFormatter;
pub use xml::XmlFormatter;

use crate::error::Result;
use crate::tree::Tree;

/// Render `tree` with the formatter selected by `config.format`.
///
/// The document has no trailing newline and never contains color codes.
pub fn render(tree: &Tree, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Ascii => Ok(TreeFormatter::new(config.clone()).format(tree)),
        OutputFormat::Json => JsonFormatter::new(config.clone()).format(tree),
        OutputFormat::Xml => Ok(XmlFormatter::new(config.clone()).format(tree)),
    }
}
