// SPDX-License-Identifier: MIT OR Apache-2.0

//! The set of types a caller can ask a value to be read as.

use std::fmt;

/// The type a raw configuration value is coerced into.
///
/// Every accessor call names one of these, either explicitly through
/// [`FromRawValue::TARGET`](crate::domain::FromRawValue::TARGET) or implicitly
/// through the per-type methods on [`TypedAccessor`](crate::domain::TypedAccessor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// A whole number.
    Integer,
    /// A decimal number.
    Float,
    /// A text value.
    Text,
    /// A boolean.
    Boolean,
    /// A sequence of raw values.
    Array,
}

impl TargetType {
    /// Returns the lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Integer => "integer",
            TargetType::Float => "float",
            TargetType::Text => "string",
            TargetType::Boolean => "boolean",
            TargetType::Array => "array",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
