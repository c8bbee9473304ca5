//! Query parsing and AST for sift.
//!
//! This crate turns a typed search expression into a tree:
//!
//! - **Terms**: `rust` - a bare search term
//! - **Phrases**: `"error handling"` - an exact match
//! - **AND**: `rust async` or `rust and async` - both must match
//! - **OR**: `rust or golang` - alternatives
//! - **Grouping**: `(a b) or (c d)` - explicit structure
//! - **Fields**: `title:guide`, `title:"a b"`, `title:(a or b)` - field-scoped expressions
//!
//! `and` and `or` share one precedence level and fold left to right.
//!
//! # Example
//!
//! ```
//! use sift_query::{Node, parse};
//!
//! let tree = parse("title:guide (rust or golang)").unwrap();
//! assert_eq!(
//!     tree,
//!     Node::and(
//!         Node::key("title", Node::value("guide")),
//!         Node::or(Node::value("rust"), Node::value("golang")),
//!     )
//! );
//! ```

#![warn(missing_docs)]

mod ast;
mod builder;
mod error;
mod extent;
mod options;
mod parser;
mod render;
mod visit;

pub use ast::Node;
pub use builder::{Builder, Operator};
pub use error::ParseError;
pub use options::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT, KeywordCase, ParseOptions};
pub use parser::{parse, parse_with};
pub use visit::{Term, Visitor, collect_terms};
