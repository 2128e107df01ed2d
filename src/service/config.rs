// SPDX-License-Identifier: MIT OR Apache-2.0

//! The loaded configuration instance.
//!
//! A [`Config`] is produced by one successful load and is read-only from then on.
//! Typed reads go through the [`TypedAccessor`] trait.

use crate::adapters::{parser_for_path, JsonParser};
use crate::domain::{ConfigError, Document, RawValue, Result, TypedAccessor};
use crate::ports::DocumentParser;
use directories::ProjectDirs;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// File name looked up by [`Config::from_default_location`].
pub const DEFAULT_FILE_NAME: &str = "config.json";

/// A parsed configuration document together with the text it was parsed from.
///
/// # Examples
///
/// ```rust
/// use typecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = Config::load_str(
///     r#"{"intParam":1,"floatParam":1.2,"stringParam":"hello","boolParam":"true","arrayParam":["a","b","c"]}"#,
/// )?;
///
/// assert_eq!(config.get_int("intParam")?, 1);
/// assert_eq!(config.get_float("floatParam")?, 1.2);
/// assert_eq!(config.get_string("stringParam")?, "hello");
/// assert!(config.get_bool("boolParam")?);
/// assert_eq!(config.get_array("arrayParam")?.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    document: Document,
    source_text: String,
    origin: Option<PathBuf>,
}

impl Config {
    /// Parses a JSON document held in memory.
    pub fn load_str(content: &str) -> Result<Self> {
        Self::load_str_with(content, &JsonParser::new())
    }

    /// Parses a document held in memory with the given parser.
    ///
    /// ```rust
    /// # #[cfg(feature = "yaml")]
    /// # {
    /// use typecfg::adapters::YamlParser;
    /// use typecfg::prelude::*;
    ///
    /// let config = Config::load_str_with("retries: \"3\"", &YamlParser::new()).unwrap();
    /// assert_eq!(config.get_int("retries").unwrap(), 3);
    /// # }
    /// ```
    pub fn load_str_with<P>(content: &str, parser: &P) -> Result<Self>
    where
        P: DocumentParser + ?Sized,
    {
        let document = parser.parse(content)?;
        tracing::debug!(keys = document.len(), "Loaded configuration from string");

        Ok(Self {
            document,
            source_text: content.to_string(),
            origin: None,
        })
    }

    /// Reads and parses a file, choosing the format from its extension.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML when the `yaml` feature is
    /// enabled; everything else is parsed as JSON.
    ///
    /// ```rust,no_run
    /// use typecfg::prelude::*;
    ///
    /// let config = Config::load_file("/etc/myapp/config.json").unwrap();
    /// let port = config.get_int("port").unwrap();
    /// ```
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let parser = parser_for_path(path.as_ref());
        Self::load_file_with(path, &*parser)
    }

    /// Reads a file and parses it with the given parser.
    pub fn load_file_with<P, D>(path: P, parser: &D) -> Result<Self>
    where
        P: AsRef<Path>,
        D: DocumentParser + ?Sized,
    {
        let path = path.as_ref();
        let content = read_source(path)?;
        let document = parser.parse(&content)?;

        tracing::debug!(
            path = %path.display(),
            keys = document.len(),
            "Loaded configuration file"
        );

        Ok(Self {
            document,
            source_text: content,
            origin: Some(path.to_path_buf()),
        })
    }

    /// Loads `config.json` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// ```rust,no_run
    /// use typecfg::service::Config;
    ///
    /// let config = Config::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Loads `filename` from the OS-appropriate configuration directory.
    ///
    /// ```rust,no_run
    /// use typecfg::service::Config;
    ///
    /// let config = Config::with_filename("myapp", "com.example", "settings.yaml").unwrap();
    /// ```
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::Io {
                path: PathBuf::from(filename),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Failed to determine project directories",
                ),
            }
        })?;

        Self::load_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the parsed document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the text the document was parsed from.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Returns the file the document was read from, if it came from a file.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Returns the top-level keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        self.document.keys()
    }
}

impl TypedAccessor for Config {
    fn lookup(&self, key: &str) -> Result<&RawValue> {
        self.document.lookup(key)
    }
}

/// Reads the whole file. The handle is closed before this returns.
fn read_source(path: &Path) -> Result<String> {
    let io_error = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(io_error)?;

    String::from_utf8(bytes).map_err(|e| ConfigError::ParseError {
        message: format!("{} is not valid UTF-8", path.display()),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_str_keeps_source_text() {
        let text = r#"{"a": 1}"#;
        let config = Config::load_str(text).unwrap();
        assert_eq!(config.source_text(), text);
        assert!(config.origin().is_none());
        assert_eq!(config.keys(), vec!["a"]);
    }

    #[test]
    fn test_load_str_malformed() {
        let result = Config::load_str(r#"{"a": [1, 2"#);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_load_file_records_origin() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "svc"}}"#).unwrap();

        let config = Config::load_file(file.path()).unwrap();
        assert_eq!(config.origin(), Some(file.path()));
        assert_eq!(config.get_string("name").unwrap(), "svc");
    }

    #[test]
    fn test_load_file_missing_is_io_error() {
        let result = Config::load_file("/nonexistent/path/to/config.json");
        match result {
            Err(ConfigError::Io { path, source }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/to/config.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_file_invalid_utf8_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'{', 0xff, 0xfe, b'}']).unwrap();

        let result = Config::load_file(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_load_file_with_explicit_parser() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"n": 2.5}}"#).unwrap();

        let config = Config::load_file_with(file.path(), &JsonParser::new()).unwrap();
        assert_eq!(config.get_int("n").unwrap(), 2);
    }

    #[test]
    fn test_document_accessor() {
        let config = Config::load_str(r#"{"x": true}"#).unwrap();
        assert_eq!(config.document().value("x"), Some(&RawValue::Boolean(true)));
    }

    #[test]
    fn test_default_location_reports_resolved_path() {
        let result = Config::with_filename(
            "typecfg-absent-app",
            "org.example",
            "missing-settings.json",
        );
        match result {
            Err(ConfigError::Io { path, .. }) => {
                assert!(path.ends_with("missing-settings.json"), "path: {}", path.display());
            }
            other => panic!("expected I/O error, got {:?}", other),
        }

        match Config::from_default_location("typecfg-absent-app", "org.example") {
            Err(ConfigError::Io { path, .. }) => assert!(path.ends_with(DEFAULT_FILE_NAME)),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }
}
