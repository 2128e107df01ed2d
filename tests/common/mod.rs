// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture helpers shared by the integration tests.

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// The document exercised by most tests: one key per target type.
#[allow(dead_code)]
pub const BASIC_JSON: &str = r#"{"intParam":1,"floatParam":1.2,"stringParam":"hello","boolParam":"true","arrayParam":["a", "b", "c"]}"#;

/// Values that only read correctly through cross-type coercion.
#[allow(dead_code)]
pub const FLEXIBLE_JSON: &str = r#"{"i1":1,"i2":2.0,"i3":"3","f1":1,"f2":2.1,"f3":"3.1"}"#;

/// Writes `content` to a temporary file ending in `suffix`.
///
/// The file is removed when the returned handle is dropped.
#[allow(dead_code)]
pub fn write_fixture(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .prefix("typecfg-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
