// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document parser.

use crate::domain::{ConfigError, Document, RawValue, Result};
use crate::ports::DocumentParser;
use serde_json::Value;

/// JSON parser implementation.
///
/// Integers that fit in an `i64` or `u64` become [`RawValue::WholeNumber`];
/// every other number, including `2.0`, becomes [`RawValue::DecimalNumber`].
///
/// # Examples
///
/// ```rust
/// use typecfg::adapters::JsonParser;
/// use typecfg::domain::RawValue;
/// use typecfg::ports::DocumentParser;
///
/// let doc = JsonParser::new().parse(r#"{"a": 1, "b": 2.0}"#).unwrap();
/// assert_eq!(doc.value("a"), Some(&RawValue::WholeNumber(1)));
/// assert_eq!(doc.value("b"), Some(&RawValue::DecimalNumber(2.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }

    fn convert(value: Value) -> Result<RawValue> {
        Ok(match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Boolean(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => RawValue::WholeNumber(i.into()),
                (None, Some(u)) => RawValue::WholeNumber(u.into()),
                (None, None) => n.as_f64().map(RawValue::DecimalNumber).ok_or_else(|| {
                    ConfigError::parse(format!("Number {} is not representable", n))
                })?,
            },
            Value::String(s) => RawValue::Text(s),
            Value::Array(items) => RawValue::Sequence(
                items
                    .into_iter()
                    .map(Self::convert)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(map) => RawValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| Self::convert(v).map(|raw| (k, raw)))
                    .collect::<Result<_>>()?,
            ),
        })
    }
}

impl DocumentParser for JsonParser {
    fn parse(&self, content: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
            source: Some(Box::new(e)),
        })?;

        Document::try_from(Self::convert(value)?)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
