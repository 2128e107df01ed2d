// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the typecfg crate.
//!
//! This example demonstrates:
//! - Loading a document from a file given on the command line, or from a built-in string
//! - Reading string, integer, float, boolean and array values
//! - Cross-type coercions (text to number, decimal to integer)
//! - Handling missing keys and type mismatches
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage -- path/to/config.json
//! ```

use typecfg::prelude::*;

const BUILT_IN: &str = r#"{
    "app_name": "demo",
    "port": "8080",
    "workers": 3.7,
    "timeout": 30,
    "debug": "true",
    "hosts": ["a.example", "b.example"]
}"#;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load_file(path)?,
        None => Config::load_str(BUILT_IN)?,
    };

    println!("=== typecfg: Basic Usage ===\n");
    println!("Keys: {}", config.keys().join(", "));

    println!("\n--- Typed values ---");
    match config.get_string("app_name") {
        Ok(name) => println!("✓ app_name = {}", name),
        Err(e) => println!("✗ {}", e),
    }
    match config.get_int("port") {
        Ok(port) => println!("✓ port = {} (from text)", port),
        Err(e) => println!("✗ {}", e),
    }
    match config.get_int("workers") {
        Ok(workers) => println!("✓ workers = {} (truncated)", workers),
        Err(e) => println!("✗ {}", e),
    }
    match config.get_float("timeout") {
        Ok(timeout) => println!("✓ timeout = {} seconds (widened)", timeout),
        Err(e) => println!("✗ {}", e),
    }
    match config.get_bool("debug") {
        Ok(debug) => println!("✓ debug = {}", debug),
        Err(e) => println!("✗ {}", e),
    }
    match config.get_array("hosts") {
        Ok(hosts) => {
            let rendered: Vec<String> = hosts.iter().map(ToString::to_string).collect();
            println!("✓ hosts = [{}]", rendered.join(", "));
        }
        Err(e) => println!("✗ {}", e),
    }

    println!("\n--- Errors ---");
    if let Err(e) = config.get_int("log_level") {
        println!("✗ {}", e);
    }
    if let Err(e) = config.get_bool("app_name") {
        println!("✗ {}", e);
    }

    Ok(())
}
