// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessor trait definition.
//!
//! [`TypedAccessor`] is the read API shared by [`Document`] and the loaded
//! [`Config`](crate::service::Config). Implementors only provide
//! [`lookup`](TypedAccessor::lookup); every typed getter is a provided method
//! that looks the key up and hands the raw value to [`FromRawValue`].

use crate::domain::coercion::FromRawValue;
use crate::domain::document::Document;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::raw_value::RawValue;

/// Typed, read-only access to configuration values by key.
///
/// Each call is independent and side-effect free. A missing key is always
/// [`ConfigError::NotFound`] and a value that cannot be coerced is always
/// [`ConfigError::TypeMismatch`]; no getter substitutes a default.
///
/// # Examples
///
/// ```rust
/// use typecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = Config::load_str(r#"{"port": "8080", "ratio": 2, "debug": "true"}"#)?;
///
/// assert_eq!(config.get_int("port")?, 8080);
/// assert_eq!(config.get_float("ratio")?, 2.0);
/// assert!(config.get_bool("debug")?);
/// assert!(config.get_string("missing").unwrap_err().is_not_found());
/// # Ok(())
/// # }
/// ```
pub trait TypedAccessor {
    /// Returns the raw value stored under `key`, or `NotFound`.
    fn lookup(&self, key: &str) -> Result<&RawValue>;

    /// Reads `key` and coerces it into `T`.
    fn get<T: FromRawValue>(&self, key: &str) -> Result<T> {
        T::from_raw(self.lookup(key)?, key)
    }

    /// Reads `key` into `dest`. On error `dest` is left untouched.
    ///
    /// ```rust
    /// use typecfg::prelude::*;
    ///
    /// let config = Config::load_str(r#"{"workers": 2.7, "name": 5}"#).unwrap();
    ///
    /// let mut workers = 1_i64;
    /// config.get_into("workers", &mut workers).unwrap();
    /// assert_eq!(workers, 2);
    ///
    /// let mut name = String::from("default");
    /// assert!(config.get_into("name", &mut name).is_err());
    /// assert_eq!(name, "default");
    /// ```
    fn get_into<T: FromRawValue>(&self, key: &str, dest: &mut T) -> Result<()> {
        *dest = self.get(key)?;
        Ok(())
    }

    /// Returns the raw, uncoerced value stored under `key`.
    fn raw(&self, key: &str) -> Result<&RawValue> {
        self.lookup(key)
    }

    /// Returns `true` if `key` is present, whatever its value.
    fn has(&self, key: &str) -> bool {
        self.lookup(key).is_ok()
    }

    /// Reads `key` as text.
    fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)
    }

    /// Reads `key` as text without copying it.
    fn get_str(&self, key: &str) -> Result<&str> {
        let raw = self.lookup(key)?;
        raw.as_str()
            .ok_or_else(|| ConfigError::type_mismatch(key, <String as FromRawValue>::TARGET))
    }

    /// Reads `key` as an integer.
    fn get_int(&self, key: &str) -> Result<i64> {
        self.get(key)
    }

    /// Reads `key` as a decimal number.
    fn get_float(&self, key: &str) -> Result<f64> {
        self.get(key)
    }

    /// Reads `key` as a boolean.
    fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key)
    }

    /// Reads `key` as a sequence of raw values.
    fn get_array(&self, key: &str) -> Result<Vec<RawValue>> {
        self.get(key)
    }
}

impl TypedAccessor for Document {
    fn lookup(&self, key: &str) -> Result<&RawValue> {
        self.value(key).ok_or_else(|| ConfigError::not_found(key))
    }
}
