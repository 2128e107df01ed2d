// SPDX-License-Identifier: MIT OR Apache-2.0

//! The decoded, format-independent value stored under a configuration key.
//!
//! Parsers translate their own value trees into [`RawValue`] once, at load time.
//! The set of variants is closed so that every coercion in
//! [`coercion`](crate::domain::coercion) can match on it exhaustively.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single decoded configuration value, tagged with its native kind.
///
/// # Examples
///
/// ```
/// use typecfg::domain::RawValue;
///
/// let value = RawValue::from("hello");
/// assert_eq!(value.as_str(), Some("hello"));
/// assert_eq!(value.kind(), "text");
/// assert_eq!(value.to_string(), "\"hello\"");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// An explicit null.
    Null,
    /// A whole number. Wide enough for every `i64` and `u64` literal.
    WholeNumber(i128),
    /// A number with a fractional part, or one outside the `i64`/`u64` range.
    DecimalNumber(f64),
    /// A text value.
    Text(String),
    /// A boolean.
    Boolean(bool),
    /// An ordered sequence of values.
    Sequence(Vec<RawValue>),
    /// A nested mapping. Nested keys are not addressable through the accessors.
    Mapping(BTreeMap<String, RawValue>),
}

impl RawValue {
    /// Returns a short name for the kind of value, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::WholeNumber(_) => "whole number",
            RawValue::DecimalNumber(_) => "decimal number",
            RawValue::Text(_) => "text",
            RawValue::Boolean(_) => "boolean",
            RawValue::Sequence(_) => "sequence",
            RawValue::Mapping(_) => "mapping",
        }
    }

    /// Returns `true` for [`RawValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Returns the text if this is a [`RawValue::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`RawValue::Sequence`].
    pub fn as_sequence(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is a [`RawValue::Mapping`].
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, RawValue>> {
        match self {
            RawValue::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<i128> for RawValue {
    fn from(n: i128) -> Self {
        RawValue::WholeNumber(n)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::DecimalNumber(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Boolean(b)
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(items: Vec<RawValue>) -> Self {
        RawValue::Sequence(items)
    }
}

impl From<BTreeMap<String, RawValue>> for RawValue {
    fn from(map: BTreeMap<String, RawValue>) -> Self {
        RawValue::Mapping(map)
    }
}

fn write_json<T: Serialize + ?Sized>(f: &mut fmt::Formatter<'_>, value: &T) -> fmt::Result {
    let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&json)
}

/// Renders the value as compact JSON. Non-finite decimals, which JSON cannot
/// express, are written as `NaN`, `inf` and `-inf`.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => f.write_str("null"),
            RawValue::WholeNumber(n) => write!(f, "{}", n),
            RawValue::DecimalNumber(n) if n.is_finite() => write_json(f, n),
            RawValue::DecimalNumber(n) => write!(f, "{}", n),
            RawValue::Text(s) => write_json(f, s),
            RawValue::Boolean(b) => write!(f, "{}", b),
            RawValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            RawValue::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_json(f, key)?;
                    write!(f, ":{}", value)?;
                }
                f.write_str("}")
            }
        }
    }
}
