//! Error types for query parsing.
//!
//! Every failure carries the code-point offset into the top-level query where it was
//! detected, so callers can point at the offending character.

use thiserror::Error;

use crate::builder::Operator;

/// An error produced while parsing a query.
///
/// The first error aborts the parse; no partial tree is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quoted phrase was opened but never closed.
    #[error("unterminated quote")]
    UnterminatedQuote {
        /// Offset of the opening quote.
        position: usize,
    },

    /// A group was never closed, or a closing parenthesis has no matching opener.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses {
        /// Offset of the unclosed `(` or the unmatched `)`.
        position: usize,
    },

    /// An `and`/`or` keyword is missing one of its operands.
    #[error("'{operator}' is missing an operand")]
    DanglingOperator {
        /// The operator that could not be completed.
        operator: Operator,
        /// Offset of the keyword.
        position: usize,
    },

    /// A field separator is not followed by a usable value.
    #[error("field '{key}' has no value")]
    MalformedFieldValue {
        /// The field name preceding the colon.
        key: String,
        /// Offset of the colon.
        position: usize,
    },

    /// A field separator appears without a field name before it.
    #[error("field separator ':' without a field name")]
    EmptyFieldKey {
        /// Offset of the colon.
        position: usize,
    },

    /// Groups, phrases and field values are nested deeper than allowed.
    #[error("query nesting exceeds the maximum depth of {limit}")]
    RecursionLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
        /// Offset of the region that crossed the limit.
        position: usize,
    },

    /// The query folds into a tree taller than allowed, usually from a very long chain
    /// of terms.
    #[error("query tree exceeds the maximum height of {limit}")]
    HeightLimitExceeded {
        /// The configured maximum height.
        limit: usize,
        /// Offset of the operand that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the code-point offset in the query where the error was detected.
    pub fn position(&self) -> usize {
        match self {
            Self::UnterminatedQuote { position }
            | Self::UnbalancedParentheses { position }
            | Self::DanglingOperator { position, .. }
            | Self::MalformedFieldValue { position, .. }
            | Self::EmptyFieldKey { position }
            | Self::RecursionLimitExceeded { position, .. }
            | Self::HeightLimitExceeded { position, .. } => *position,
        }
    }

    /// Returns a suggestion for fixing the query.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::UnterminatedQuote { .. } => "Add a closing quote (\") to complete the phrase",
            Self::UnbalancedParentheses { .. } => {
                "Make sure every ( has a matching ) and vice versa"
            }
            Self::DanglingOperator { .. } => {
                "'and' and 'or' need an expression on both sides, e.g. 'rust or golang'"
            }
            Self::MalformedFieldValue { .. } => {
                "Put a term, a \"phrase\" or a (group) right after the colon"
            }
            Self::EmptyFieldKey { .. } => "Put a field name before the colon, e.g. 'title:guide'",
            Self::RecursionLimitExceeded { .. } => "Reduce the nesting of groups and fields",
            Self::HeightLimitExceeded { .. } => "Shorten the query or split it into several",
        }
    }

    /// Formats the error with the query and a position indicator.
    pub fn format_with_context(&self, query: &str) -> String {
        let clamped = self.position().min(query.chars().count());
        let mut result = String::new();
        result.push_str(&format!("query syntax error: {self}\n"));
        result.push_str(&format!("  {query}\n"));
        result.push_str(&format!("  {}^\n", " ".repeat(clamped)));
        result.push_str(&format!("hint: {}", self.suggestion()));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_extraction() {
        let err = ParseError::DanglingOperator {
            operator: Operator::Or,
            position: 4,
        };
        assert_eq!(err.position(), 4);
        assert_eq!(ParseError::EmptyFieldKey { position: 0 }.position(), 0);
    }

    #[test]
    fn display_names_operator_and_key() {
        let err = ParseError::DanglingOperator {
            operator: Operator::And,
            position: 4,
        };
        assert_eq!(err.to_string(), "'and' is missing an operand");

        let err = ParseError::MalformedFieldValue {
            key: "title".into(),
            position: 5,
        };
        assert_eq!(err.to_string(), "field 'title' has no value");
    }

    #[test]
    fn height_limit_message() {
        let err = ParseError::HeightLimitExceeded {
            limit: 1024,
            position: 2048,
        };
        assert_eq!(
            err.to_string(),
            "query tree exceeds the maximum height of 1024"
        );
        assert_eq!(err.position(), 2048);
        assert!(err.suggestion().contains("Shorten"));
    }

    #[test]
    fn context_points_at_position() {
        let err = ParseError::UnterminatedQuote { position: 4 };
        let display = err.format_with_context("foo \"bar");
        let lines: Vec<&str> = display.lines().collect();
        assert_eq!(lines[0], "query syntax error: unterminated quote");
        assert_eq!(lines[1], "  foo \"bar");
        assert_eq!(lines[2], "      ^");
        assert!(lines[3].starts_with("hint:"));
    }

    #[test]
    fn context_clamps_position() {
        let err = ParseError::UnbalancedParentheses { position: 99 };
        let display = err.format_with_context("(a");
        assert!(display.contains("    ^"));
    }

    #[test]
    fn context_counts_code_points() {
        let err = ParseError::EmptyFieldKey { position: 3 };
        let display = err.format_with_context("日本 :x");
        assert!(display.lines().nth(2).unwrap().ends_with("   ^"));
    }
}
