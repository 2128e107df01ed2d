// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for loading documents and reading typed values.

mod common;

use common::{write_fixture, BASIC_JSON, FLEXIBLE_JSON};
use std::sync::Arc;
use std::thread;
use typecfg::prelude::*;

#[test]
fn test_basic_document() {
    let config = Config::load_str(BASIC_JSON).unwrap();

    assert_eq!(config.get_int("intParam").unwrap(), 1);
    assert_eq!(config.get_float("floatParam").unwrap(), 1.2);
    assert_eq!(config.get_string("stringParam").unwrap(), "hello");
    assert!(config.get_bool("boolParam").unwrap());
    assert_eq!(
        config.get_array("arrayParam").unwrap(),
        vec![RawValue::from("a"), RawValue::from("b"), RawValue::from("c")]
    );
}

#[test]
fn test_flexible_coercions() {
    let config = Config::load_str(FLEXIBLE_JSON).unwrap();

    assert_eq!(config.get_int("i1").unwrap(), 1);
    assert_eq!(config.get_int("i2").unwrap(), 2);
    assert_eq!(config.get_int("i3").unwrap(), 3);

    assert_eq!(config.get_float("f1").unwrap(), 1.0);
    assert_eq!(config.get_float("f2").unwrap(), 2.1);
    assert_eq!(config.get_float("f3").unwrap(), 3.1);
}

#[test]
fn test_negative_decimal_truncates_toward_zero() {
    let config = Config::load_str(r#"{"up": 2.9, "down": -2.9}"#).unwrap();
    assert_eq!(config.get_int("up").unwrap(), 2);
    assert_eq!(config.get_int("down").unwrap(), -2);
}

#[test]
fn test_missing_key_is_not_found_for_every_type() {
    let config = Config::load_str(BASIC_JSON).unwrap();

    let errors = vec![
        config.get_string("nope").unwrap_err(),
        config.get_int("nope").unwrap_err(),
        config.get_float("nope").unwrap_err(),
        config.get_bool("nope").unwrap_err(),
        config.get_array("nope").unwrap_err(),
    ];
    for err in errors {
        match err {
            ConfigError::NotFound { key } => assert_eq!(key, "nope"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}

#[test]
fn test_unsupported_pairs_are_type_mismatch() {
    let config = Config::load_str(
        r#"{"n": 1, "f": 1.5, "b": true, "list": [1], "obj": {"k": 1}, "word": "maybe"}"#,
    )
    .unwrap();

    let cases: Vec<(&str, TargetType, ConfigError)> = vec![
        ("n", TargetType::Text, config.get_string("n").unwrap_err()),
        ("f", TargetType::Text, config.get_string("f").unwrap_err()),
        ("n", TargetType::Boolean, config.get_bool("n").unwrap_err()),
        ("b", TargetType::Integer, config.get_int("b").unwrap_err()),
        ("b", TargetType::Float, config.get_float("b").unwrap_err()),
        ("list", TargetType::Text, config.get_string("list").unwrap_err()),
        ("obj", TargetType::Array, config.get_array("obj").unwrap_err()),
        ("word", TargetType::Boolean, config.get_bool("word").unwrap_err()),
        ("word", TargetType::Integer, config.get_int("word").unwrap_err()),
        ("word", TargetType::Array, config.get_array("word").unwrap_err()),
    ];

    for (expected_key, expected_target, err) in cases {
        let message = err.to_string();
        match err {
            ConfigError::TypeMismatch { key, target, .. } => {
                assert_eq!(key, expected_key);
                assert_eq!(target, expected_target);
                assert!(message.contains(expected_key));
                assert!(message.contains(expected_target.as_str()));
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }
}

#[test]
fn test_array_elements_stay_raw() {
    let config = Config::load_str(r#"{"mixed": [1, "two", 3.5, false, null, [6]]}"#).unwrap();
    let items = config.get_array("mixed").unwrap();

    assert_eq!(items.len(), 6);
    assert_eq!(items[0], RawValue::WholeNumber(1));
    assert_eq!(items[1], RawValue::from("two"));
    assert_eq!(items[2], RawValue::DecimalNumber(3.5));
    assert_eq!(items[3], RawValue::Boolean(false));
    assert!(items[4].is_null());
    assert_eq!(items[5].as_sequence().map(|s| s.len()), Some(1));
}

#[test]
fn test_nested_keys_are_not_addressable() {
    let config = Config::load_str(r#"{"db": {"port": 5432}}"#).unwrap();
    assert!(config.get_int("db.port").unwrap_err().is_not_found());
    assert!(config.raw("db").unwrap().as_mapping().is_some());
}

#[test]
fn test_malformed_source_produces_no_config() {
    for content in [r#"{"a": 1,"#, "", "{", r#"{"a" 1}"#, "[1, 2, 3]"] {
        match Config::load_str(content) {
            Err(ConfigError::ParseError { .. }) => {}
            other => panic!("expected ParseError for {:?}, got {:?}", content, other),
        }
    }
}

#[test]
fn test_json_file_source() {
    let file = write_fixture(".json", BASIC_JSON);
    let config = Config::load_file(file.path()).unwrap();

    assert_eq!(config.origin(), Some(file.path()));
    assert_eq!(config.source_text(), BASIC_JSON);
    assert_eq!(config.get_int("intParam").unwrap(), 1);
}

#[test]
fn test_file_without_extension_is_json() {
    let file = write_fixture("", FLEXIBLE_JSON);
    let config = Config::load_file(file.path()).unwrap();
    assert_eq!(config.get_float("f3").unwrap(), 3.1);
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_file_source() {
    let file = write_fixture(
        ".yaml",
        "port: \"8080\"\nratio: 0.75\nenabled: true\nhosts:\n  - a\n  - b\n",
    );
    let config = Config::load_file(file.path()).unwrap();

    assert_eq!(config.get_int("port").unwrap(), 8080);
    assert_eq!(config.get_float("ratio").unwrap(), 0.75);
    assert!(config.get_bool("enabled").unwrap());
    assert_eq!(config.get_array("hosts").unwrap().len(), 2);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_fixture(".json", r#"{"truncated": "#);
    let result = Config::load_file(file.path());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load_file(dir.path());
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_independent_loads() {
    let first = Config::load_str(r#"{"k": 1}"#).unwrap();
    let second = Config::load_str(r#"{"k": 2}"#).unwrap();
    assert_eq!(first.get_int("k").unwrap(), 1);
    assert_eq!(second.get_int("k").unwrap(), 2);
}

#[test]
fn test_concurrent_readers() {
    let config = Arc::new(Config::load_str(FLEXIBLE_JSON).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(config.get_int("i2").unwrap(), 2);
                    assert_eq!(config.get_float("f3").unwrap(), 3.1);
                    assert!(config.get_bool("f3").is_err());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_custom_parser_through_port() {
    struct CsvPairs;

    impl DocumentParser for CsvPairs {
        fn parse(&self, content: &str) -> typecfg::domain::Result<Document> {
            let entries = content
                .split(',')
                .filter_map(|pair| pair.split_once(':'))
                .map(|(k, v)| (k.to_string(), RawValue::from(v)))
                .collect();
            Ok(Document::new(entries))
        }

        fn supported_extensions(&self) -> &[&str] {
            &["pairs"]
        }
    }

    let config = Config::load_str_with("workers:4,verbose:true", &CsvPairs).unwrap();
    assert_eq!(config.get_int("workers").unwrap(), 4);
    assert!(config.get_bool("verbose").unwrap());
}

#[test]
fn test_unsigned_values_above_i64_read_exactly() {
    let config =
        Config::load_str(r#"{"a": 10000000000000000001, "b": 18446744073709551615}"#).unwrap();

    assert_eq!(config.get::<u64>("a").unwrap(), 10_000_000_000_000_000_001);
    assert_eq!(config.get::<u64>("b").unwrap(), u64::MAX);
    assert!(config.get_int("b").unwrap_err().is_type_mismatch());
}
