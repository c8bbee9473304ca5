//! Configuration file parsing.
//!
//! Parses individual `.sift.toml` files into `RawConfig` structures that keep every field
//! optional until files are merged.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Parser settings section.
    pub parser: Option<RawParserSettings>,
}

/// Raw `[parser]` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawParserSettings {
    /// Maximum nesting depth of groups, phrases and field values.
    pub max_depth: Option<usize>,
    /// Maximum height of the parsed tree.
    pub max_height: Option<usize>,
    /// Keyword matching rule: "sensitive" or "insensitive".
    pub keyword_case: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.parser.is_none());
    }

    #[test]
    fn parse_parser_settings() {
        let toml = r#"
root = true

[parser]
max_depth = 8
max_height = 500
keyword_case = "insensitive"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        let parser = config.parser.unwrap();
        assert_eq!(parser.max_depth, Some(8));
        assert_eq!(parser.max_height, Some(500));
        assert_eq!(parser.keyword_case.as_deref(), Some("insensitive"));
    }

    #[test]
    fn parse_partial_parser_settings() {
        let toml = "[parser]\nmax_depth = 3\n";
        let parser = parse_config_str(toml, Path::new("test.toml"))
            .unwrap()
            .parser
            .unwrap();
        assert_eq!(parser.max_depth, Some(3));
        assert!(parser.max_height.is_none());
        assert!(parser.keyword_case.is_none());
    }

    #[test]
    fn parse_error_names_file() {
        let err = parse_config_str("[parser\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn parse_wrong_type() {
        let err = parse_config_str("[parser]\nmax_depth = \"deep\"\n", Path::new("t.toml"));
        assert!(err.is_err());
    }
}
