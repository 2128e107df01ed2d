// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The only port is [`DocumentParser`], implemented by the format adapters in
//! the adapters layer.

pub mod parser;

pub use parser::DocumentParser;
