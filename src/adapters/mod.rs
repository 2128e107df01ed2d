// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document format implementations.
//!
//! Each adapter implements [`DocumentParser`] for one text format. JSON is always
//! available; YAML requires the `yaml` feature.

pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use json::JsonParser;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;

use crate::ports::DocumentParser;
use std::path::Path;

/// Returns every parser compiled into this build.
pub fn available_parsers() -> Vec<Box<dyn DocumentParser>> {
    #[allow(unused_mut)]
    let mut parsers: Vec<Box<dyn DocumentParser>> = vec![Box::new(JsonParser::new())];
    #[cfg(feature = "yaml")]
    parsers.push(Box::new(YamlParser::new()));
    parsers
}

/// Picks a parser from the file extension of `path`.
///
/// Extensions are matched case-insensitively. Paths with no extension, or one
/// no parser claims, are treated as JSON.
///
/// # Examples
///
/// ```rust
/// use typecfg::adapters::parser_for_path;
/// use typecfg::ports::DocumentParser;
///
/// assert_eq!(parser_for_path("app.json").supported_extensions(), &["json"]);
/// assert_eq!(parser_for_path("app.conf").supported_extensions(), &["json"]);
/// ```
pub fn parser_for_path<P: AsRef<Path>>(path: P) -> Box<dyn DocumentParser> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    if let Some(ext) = extension {
        for parser in available_parsers() {
            if parser.supported_extensions().contains(&ext.as_str()) {
                return parser;
            }
        }
    }

    Box::new(JsonParser::new())
}
