// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-directed coercion from a [`RawValue`] into a requested Rust type.
//!
//! | target  | whole number | decimal number        | text                    | boolean | sequence |
//! |---------|--------------|-----------------------|-------------------------|---------|----------|
//! | integer | as-is        | truncated toward zero | parsed as integer       | -       | -        |
//! | float   | widened      | as-is                 | parsed as decimal       | -       | -        |
//! | string  | -            | -                     | as-is                   | -       | -        |
//! | boolean | -            | -                     | exactly `true`/`false`  | as-is   | -        |
//! | array   | -            | -                     | -                       | -       | as-is    |
//!
//! Every `-` cell, as well as null and mapping values, is a
//! [`ConfigError::TypeMismatch`]. Nothing falls back to a default.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::raw_value::RawValue;
use crate::domain::target_type::TargetType;
use std::fmt;

/// A type that can be produced from a [`RawValue`].
///
/// # Examples
///
/// ```
/// use typecfg::domain::{FromRawValue, RawValue};
///
/// assert_eq!(i64::from_raw(&RawValue::from(-2.9), "k").unwrap(), -2);
/// assert_eq!(f64::from_raw(&RawValue::from("3.1"), "k").unwrap(), 3.1);
/// assert!(bool::from_raw(&RawValue::from("yes"), "k").is_err());
/// ```
pub trait FromRawValue: Sized {
    /// The target type reported in mismatch errors.
    const TARGET: TargetType;

    /// Coerces `raw` into `Self`. `key` is only used to build errors.
    fn from_raw(raw: &RawValue, key: &str) -> Result<Self>;
}

/// A decimal whose truncated value does not fit the requested integer width.
#[derive(Debug)]
pub struct OutOfRange {
    value: f64,
    target: &'static str,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is out of range for {}", self.value, self.target)
    }
}

impl std::error::Error for OutOfRange {}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromRawValue for $t {
                const TARGET: TargetType = TargetType::Integer;

                fn from_raw(raw: &RawValue, key: &str) -> Result<Self> {
                    match raw {
                        RawValue::WholeNumber(n) => <$t>::try_from(*n)
                            .map_err(|e| ConfigError::type_mismatch_from(key, Self::TARGET, e)),
                        RawValue::DecimalNumber(f) => {
                            let t = f.trunc();
                            // MAX + 1 is exact in f64 for every width, MAX itself may not be.
                            if t.is_finite() && t >= <$t>::MIN as f64 && t < <$t>::MAX as f64 + 1.0 {
                                tracing::trace!(key, from = *f, to = t, "truncated decimal to integer");
                                Ok(t as $t)
                            } else {
                                Err(ConfigError::type_mismatch_from(
                                    key,
                                    Self::TARGET,
                                    OutOfRange { value: *f, target: stringify!($t) },
                                ))
                            }
                        }
                        RawValue::Text(s) => {
                            tracing::trace!(key, "parsing text as integer");
                            s.parse::<$t>()
                                .map_err(|e| ConfigError::type_mismatch_from(key, Self::TARGET, e))
                        }
                        RawValue::Null
                        | RawValue::Boolean(_)
                        | RawValue::Sequence(_)
                        | RawValue::Mapping(_) => Err(ConfigError::type_mismatch(key, Self::TARGET)),
                    }
                }
            }
        )*
    };
}

impl_integer!(i32, i64, u32, u64, usize);

impl FromRawValue for f64 {
    const TARGET: TargetType = TargetType::Float;

    fn from_raw(raw: &RawValue, key: &str) -> Result<Self> {
        match raw {
            RawValue::WholeNumber(n) => {
                tracing::trace!(key, "widening whole number to float");
                Ok(*n as f64)
            }
            RawValue::DecimalNumber(f) => Ok(*f),
            RawValue::Text(s) => {
                tracing::trace!(key, "parsing text as float");
                s.parse::<f64>()
                    .map_err(|e| ConfigError::type_mismatch_from(key, Self::TARGET, e))
            }
            RawValue::Null | RawValue::Boolean(_) | RawValue::Sequence(_) | RawValue::Mapping(_) => {
                Err(ConfigError::type_mismatch(key, Self::TARGET))
            }
        }
    }
}

impl FromRawValue for String {
    const TARGET: TargetType = TargetType::Text;

    fn from_raw(raw: &RawValue, key: &str) -> Result<Self> {
        match raw {
            RawValue::Text(s) => Ok(s.clone()),
            _ => Err(ConfigError::type_mismatch(key, Self::TARGET)),
        }
    }
}

impl FromRawValue for bool {
    const TARGET: TargetType = TargetType::Boolean;

    fn from_raw(raw: &RawValue, key: &str) -> Result<Self> {
        match raw {
            RawValue::Boolean(b) => Ok(*b),
            RawValue::Text(s) => match s.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ConfigError::type_mismatch(key, Self::TARGET)),
            },
            RawValue::Null
            | RawValue::WholeNumber(_)
            | RawValue::DecimalNumber(_)
            | RawValue::Sequence(_)
            | RawValue::Mapping(_) => Err(ConfigError::type_mismatch(key, Self::TARGET)),
        }
    }
}

impl FromRawValue for Vec<RawValue> {
    const TARGET: TargetType = TargetType::Array;

    fn from_raw(raw: &RawValue, key: &str) -> Result<Self> {
        match raw {
            RawValue::Sequence(items) => Ok(items.clone()),
            _ => Err(ConfigError::type_mismatch(key, Self::TARGET)),
        }
    }
}
