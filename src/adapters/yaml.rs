// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser.

use crate::domain::{ConfigError, Document, RawValue, Result};
use crate::ports::DocumentParser;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// YAML parser implementation.
///
/// Number handling matches [`JsonParser`](crate::adapters::JsonParser). Mapping
/// keys must be strings. Tags such as `!secret value` are dropped and the
/// tagged value is kept.
///
/// # Examples
///
/// ```rust
/// use typecfg::adapters::YamlParser;
/// use typecfg::domain::RawValue;
/// use typecfg::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let doc = parser.parse("name: demo\nworkers: 4").unwrap();
/// assert_eq!(doc.value("workers"), Some(&RawValue::WholeNumber(4)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
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
            Value::Sequence(items) => RawValue::Sequence(
                items
                    .into_iter()
                    .map(Self::convert)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Mapping(map) => {
                let mut entries = BTreeMap::new();
                for (key, val) in map {
                    let key = match key {
                        Value::String(s) => s,
                        other => {
                            return Err(ConfigError::parse(format!(
                                "Mapping keys must be strings, found {:?}",
                                other
                            )))
                        }
                    };
                    entries.insert(key, Self::convert(val)?);
                }
                RawValue::Mapping(entries)
            }
            Value::Tagged(tagged) => Self::convert(tagged.value)?,
        })
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Document> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;

        Document::try_from(Self::convert(value)?)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
