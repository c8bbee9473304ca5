//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`. Files closer to the
//! working directory win, field by field.

use std::path::PathBuf;

use sift_query::KeywordCase;

use crate::{
    Config, ConfigError, ParserSettings,
    parse::{RawConfig, RawParserSettings},
};

/// A parsed config file with its source path.
#[derive(Debug)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files into a single resolved `Config`.
///
/// Configs must be in precedence order: highest precedence first (closest to the working
/// directory), lowest precedence last (global config). For each setting the first file
/// that defines it wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let mut parser = ParserSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.parser {
            apply_raw_parser_settings(&mut parser, raw, parsed)?;
        }
    }

    Ok(Config {
        parser,
        files: configs.iter().map(|c| c.path.clone()).collect(),
    })
}

/// Applies raw parser settings to result, overwriting any present values.
fn apply_raw_parser_settings(
    result: &mut ParserSettings,
    raw: &RawParserSettings,
    source: &ParsedConfig,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.max_depth {
        result.max_depth = v;
    }
    if let Some(v) = raw.max_height {
        result.max_height = v;
    }
    if let Some(ref v) = raw.keyword_case {
        result.keyword_case = v
            .parse::<KeywordCase>()
            .map_err(|message| ConfigError::InvalidValue {
                path: source.path.clone(),
                field: "parser.keyword_case",
                message,
            })?;
    }
    Ok(())
}
