//! Configuration system for sift.
//!
//! sift reads optional TOML files named `.sift.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.sift.toml`
//! files found, then loading `~/.sift.toml` as the global config with lowest precedence.
//!
//! ```toml
//! [parser]
//! max_depth = 64
//! max_height = 1024
//! keyword_case = "sensitive"
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_configs, global_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawParserSettings, parse_config_file, parse_config_str};
use serde::Serialize;
use sift_query::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT, KeywordCase, ParseOptions};

/// Fully resolved configuration after merging all discovered files.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parser settings.
    pub parser: ParserSettings,
    /// Files that contributed to this configuration, highest precedence first.
    pub files: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.sift.toml` files.
    ///
    /// Returns the defaults if no configuration file is found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        merge_configs(&discover_configs(cwd)?)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Returns the effective settings as a TOML string.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            parser: SerializableParserSettings {
                max_depth: self.parser.max_depth,
                max_height: self.parser.max_height,
                keyword_case: self.parser.keyword_case.to_string(),
            },
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Parser settings after merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserSettings {
    /// Maximum nesting depth of groups, phrases and field values.
    pub max_depth: usize,
    /// Maximum height of the parsed tree.
    pub max_height: usize,
    /// Keyword matching rule.
    pub keyword_case: KeywordCase,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_height: DEFAULT_MAX_HEIGHT,
            keyword_case: KeywordCase::default(),
        }
    }
}

impl ParserSettings {
    /// Builds the options handed to the parser.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_max_depth(self.max_depth)
            .with_max_height(self.max_height)
            .with_keyword_case(self.keyword_case)
    }
}

/// TOML shape of the effective settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// The `[parser]` table.
    parser: SerializableParserSettings,
}

/// TOML shape of the `[parser]` table.
#[derive(Serialize)]
struct SerializableParserSettings {
    /// Maximum nesting depth.
    max_depth: usize,
    /// Maximum tree height.
    max_height: usize,
    /// Keyword matching rule.
    keyword_case: String,
}
