// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed access to values in a JSON or YAML configuration document.
//!
//! A configuration document is loaded once, from a file or a string, into an
//! immutable key→value mapping. Values are then read by key with a requested
//! type, and the crate coerces between compatible representations: the text
//! `"3.1"` can be read as a float, the decimal `2.9` as the integer `2`, and
//! the text `"true"` as a boolean.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and coercion rules (`RawValue`, `Document`,
//!   `FromRawValue`, `TypedAccessor`, errors)
//! - **Ports**: The `DocumentParser` trait
//! - **Adapters**: JSON and YAML parsers
//! - **Service**: `Config`, the loaded configuration instance
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML document support (default)
//!
//! # Quick Start
//!
//! ```rust
//! use typecfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load_str(r#"{"i2": 2.0, "i3": "3", "f3": "3.1"}"#)?;
//!
//! assert_eq!(config.get_int("i2")?, 2);
//! assert_eq!(config.get_int("i3")?, 3);
//! assert_eq!(config.get_float("f3")?, 3.1);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, Document, FromRawValue, RawValue, Result, TargetType, TypedAccessor,
    };
    pub use crate::ports::DocumentParser;
    pub use crate::service::Config;

    pub use crate::adapters::JsonParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
