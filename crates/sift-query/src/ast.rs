//! Query abstract syntax tree.
//!
//! Represents parsed queries as trees of terms, phrases, operators and field scopes.
//! Trees are only ever complete: operators that are still waiting for an operand live in
//! [`Builder`](crate::Builder), never here.

use std::fmt;

use crate::{
    render::{CompactRenderer, QueryStringRenderer},
    visit::Visitor,
};

/// A node of a parsed query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Node {
    /// Nothing was parsed.
    #[default]
    Empty,

    /// A bare search term.
    Value(String),

    /// An exact phrase, taken from a quoted region.
    CompleteMatch(String),

    /// Conjunction: both sides must match.
    And(Box<Self>, Box<Self>),

    /// Disjunction: at least one side must match.
    Or(Box<Self>, Box<Self>),

    /// Field-scoped query: the value only applies to the named field.
    Key {
        /// Field name.
        key: String,
        /// Expression to match within that field.
        value: Box<Self>,
    },
}

impl Node {
    /// Creates a bare term.
    pub fn value(text: impl Into<String>) -> Self {
        Self::Value(text.into())
    }

    /// Creates an exact-phrase term.
    pub fn complete_match(text: impl Into<String>) -> Self {
        Self::CompleteMatch(text.into())
    }

    /// Creates a conjunction.
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Creates a disjunction.
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Creates a field-scoped query.
    pub fn key(key: impl Into<String>, value: Self) -> Self {
        Self::Key {
            key: key.into(),
            value: Box::new(value),
        }
    }

    /// Returns true for the [`Node::Empty`] node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Dispatches to the visitor handler matching this node's kind.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Empty => visitor.visit_empty(),
            Self::Value(value) => visitor.visit_value(value),
            Self::CompleteMatch(value) => visitor.visit_complete_match(value),
            Self::And(left, right) => visitor.visit_and(left, right),
            Self::Or(left, right) => visitor.visit_or(left, right),
            Self::Key { key, value } => visitor.visit_key(key, value),
        }
    }

    /// Renders the node as query text that parses back to the same tree.
    ///
    /// The rendering is exact for trees without nested `Empty` nodes whose terms and keys
    /// are plain words: non-empty, free of whitespace, quotes, parentheses and colons, and
    /// not equal to the `and`/`or` keywords. Phrases round-trip as long as they contain no
    /// quote character. Anything outside that is rendered on a best-effort basis and may
    /// parse to a different tree.
    pub fn to_query_string(&self) -> String {
        self.accept(&mut QueryStringRenderer)
    }

    /// Renders the node on a single line, e.g. `And(Value(foo), Value(bar))`.
    pub fn to_compact_string(&self) -> String {
        self.accept(&mut CompactRenderer)
    }

    /// Formats the node as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Empty => writeln!(f, "{prefix}Empty"),
            Self::Value(s) => writeln!(f, "{prefix}Value({s:?})"),
            Self::CompleteMatch(s) => writeln!(f, "{prefix}CompleteMatch({s:?})"),
            Self::And(left, right) => {
                writeln!(f, "{prefix}And")?;
                left.fmt_tree(f, indent + 1)?;
                right.fmt_tree(f, indent + 1)
            }
            Self::Or(left, right) => {
                writeln!(f, "{prefix}Or")?;
                left.fmt_tree(f, indent + 1)?;
                right.fmt_tree(f, indent + 1)
            }
            Self::Key { key, value } => {
                writeln!(f, "{prefix}Key({key:?})")?;
                value.fmt_tree(f, indent + 1)
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
