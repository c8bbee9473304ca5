//! Shared helpers for command implementations.

use sift_config::ParserSettings;
use sift_query::{KeywordCase, ParseOptions};

use crate::cli::args::ParserArgs;

/// CLI options for parser settings that can override config values.
///
/// Used by the `parse` and `check` commands.
pub struct ParserOverrides {
    /// Maximum nesting depth.
    pub max_depth: Option<usize>,
    /// Maximum tree height.
    pub max_height: Option<usize>,
    /// Whether keywords match regardless of case.
    pub ignore_keyword_case: bool,
}

impl From<&ParserArgs> for ParserOverrides {
    fn from(args: &ParserArgs) -> Self {
        Self {
            max_depth: args.max_depth,
            max_height: args.max_height,
            ignore_keyword_case: args.ignore_keyword_case,
        }
    }
}

impl ParserOverrides {
    /// Builds `ParseOptions` by applying CLI overrides to configured settings.
    pub fn build_options(&self, settings: &ParserSettings) -> ParseOptions {
        let keyword_case = if self.ignore_keyword_case {
            KeywordCase::Insensitive
        } else {
            settings.keyword_case
        };
        ParseOptions::default()
            .with_max_depth(self.max_depth.unwrap_or(settings.max_depth))
            .with_max_height(self.max_height.unwrap_or(settings.max_height))
            .with_keyword_case(keyword_case)
    }
}
