//! Parser settings.

use std::{fmt, str::FromStr};

/// Default maximum nesting of groups, phrases and field values.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default maximum height of a parsed tree.
///
/// Every operand folded into a chain adds a level, so this also caps the number of terms
/// in a flat query.
pub const DEFAULT_MAX_HEIGHT: usize = 1024;

/// How the `and`/`or` keywords are recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordCase {
    /// Only the exact lowercase spellings are keywords; `AND` is an ordinary term.
    #[default]
    Sensitive,
    /// Any ASCII casing of the keywords is accepted.
    Insensitive,
}

impl KeywordCase {
    /// Checks whether `token` spells `keyword` under this rule.
    pub fn matches(self, token: &str, keyword: &str) -> bool {
        match self {
            Self::Sensitive => token == keyword,
            Self::Insensitive => token.eq_ignore_ascii_case(keyword),
        }
    }
}

impl FromStr for KeywordCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            other => Err(format!(
                "unknown keyword case '{other}' (expected 'sensitive' or 'insensitive')"
            )),
        }
    }
}

impl fmt::Display for KeywordCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensitive => write!(f, "sensitive"),
            Self::Insensitive => write!(f, "insensitive"),
        }
    }
}

/// Settings for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of groups, phrases and field values before parsing fails.
    pub max_depth: usize,
    /// Maximum height of the finished tree before parsing fails.
    pub max_height: usize,
    /// Keyword recognition rule.
    pub keyword_case: KeywordCase,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_height: DEFAULT_MAX_HEIGHT,
            keyword_case: KeywordCase::default(),
        }
    }
}

impl ParseOptions {
    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum tree height.
    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Sets the keyword recognition rule.
    pub fn with_keyword_case(mut self, keyword_case: KeywordCase) -> Self {
        self.keyword_case = keyword_case;
        self
    }
}
