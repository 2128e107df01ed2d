// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which provides an interface for
//! decoding configuration text in a particular format (JSON, YAML, ...) into a
//! [`Document`].

use crate::domain::{Document, Result};

/// A trait for parsing configuration text into a [`Document`].
///
/// Parsers keep the nesting of the source: a nested object becomes a
/// [`RawValue::Mapping`](crate::domain::RawValue::Mapping) under its top-level
/// key rather than being flattened into dotted keys. A parser must reject input
/// whose top-level value is not a mapping.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use typecfg::domain::{Document, RawValue, Result};
/// use typecfg::ports::DocumentParser;
///
/// /// Parses `key=value` lines into text values.
/// struct LineParser;
///
/// impl DocumentParser for LineParser {
///     fn parse(&self, content: &str) -> Result<Document> {
///         let entries = content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim().to_string(), RawValue::from(v.trim())))
///             .collect::<BTreeMap<_, _>>();
///         Ok(Document::new(entries))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let doc = LineParser.parse("a = 1\nb = two").unwrap();
/// assert_eq!(doc.value("b"), Some(&RawValue::from("two")));
/// ```
pub trait DocumentParser {
    /// Parses configuration content into a document.
    ///
    /// # Returns
    ///
    /// * `Ok(Document)` - The fully decoded document
    /// * `Err(ConfigError::ParseError)` - The content is malformed or its root is not a mapping
    fn parse(&self, content: &str) -> Result<Document>;

    /// Returns the file extensions (without the leading dot) handled by this parser.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigError, RawValue};
    use std::collections::BTreeMap;

    struct FixedParser;

    impl DocumentParser for FixedParser {
        fn parse(&self, content: &str) -> Result<Document> {
            if content.is_empty() {
                return Err(ConfigError::parse("empty input"));
            }
            let mut entries = BTreeMap::new();
            entries.insert("content".to_string(), RawValue::from(content));
            Ok(Document::new(entries))
        }

        fn supported_extensions(&self) -> &[&str] {
            &["fixed", "fx"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let doc = FixedParser.parse("hello").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.value("content"), Some(&RawValue::from("hello")));
    }

    #[test]
    fn test_parser_error() {
        assert!(matches!(
            FixedParser.parse(""),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parser_usable_as_trait_object() {
        let parser: Box<dyn DocumentParser> = Box::new(FixedParser);
        assert_eq!(parser.supported_extensions(), &["fixed", "fx"]);
    }
}
