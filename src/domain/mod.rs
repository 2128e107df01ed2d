// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the decoded value model, the document it lives in, the
//! coercion rules that turn raw values into typed ones, and the error type.
//! It does not depend on any particular document format.

pub mod accessor;
pub mod coercion;
pub mod document;
pub mod errors;
pub mod raw_value;
pub mod target_type;

// Re-export commonly used types
pub use accessor::TypedAccessor;
pub use coercion::FromRawValue;
pub use document::Document;
pub use errors::{ConfigError, Result};
pub use raw_value::RawValue;
pub use target_type::TargetType;
