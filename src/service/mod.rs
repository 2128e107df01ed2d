// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the loaded configuration type.

pub mod config;

pub use config::{Config, DEFAULT_FILE_NAME};
