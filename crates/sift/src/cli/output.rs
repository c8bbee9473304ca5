//! Rendering of parse results for the terminal.

use sift_query::{Node, ParseError};

use crate::cli::args::Format;

/// Renders a parsed tree in the requested format, without a trailing newline.
pub fn render(node: &Node, format: Format) -> String {
    match format {
        Format::Tree => node.to_string().trim_end().to_string(),
        Format::Compact => node.to_compact_string(),
        Format::Query => node.to_query_string(),
        Format::Debug => format!("{node:#?}"),
    }
}

/// Prints a parse error with the query and a caret under the offending position.
pub fn print_parse_error(query: &str, err: &ParseError) {
    eprintln!("{}", err.format_with_context(query));
}
