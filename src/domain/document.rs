// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed, immutable key→value mapping produced by a single load.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::raw_value::RawValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// A fully parsed configuration document.
///
/// A `Document` only exists once parsing has completely succeeded, and it
/// offers no way to modify its entries afterwards. Shared references may be
/// handed to any number of threads without locking.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use typecfg::domain::{Document, RawValue};
///
/// let mut root = BTreeMap::new();
/// root.insert("name".to_string(), RawValue::from("demo"));
///
/// let doc = Document::try_from(RawValue::from(root)).unwrap();
/// assert_eq!(doc.value("name"), Some(&RawValue::from("demo")));
///
/// assert!(Document::try_from(RawValue::from(1)).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    entries: BTreeMap<String, RawValue>,
}

impl Document {
    /// Creates a document from already-decoded top-level entries.
    pub fn new(entries: BTreeMap<String, RawValue>) -> Self {
        Self { entries }
    }

    /// Returns the raw value stored under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present, even when its value is null.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the top-level keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns the number of top-level keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the document has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the top-level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl TryFrom<RawValue> for Document {
    type Error = ConfigError;

    fn try_from(value: RawValue) -> Result<Self> {
        match value {
            RawValue::Mapping(entries) => Ok(Self { entries }),
            other => Err(ConfigError::parse(format!(
                "top-level value must be a mapping, found {}",
                other.kind()
            ))),
        }
    }
}
