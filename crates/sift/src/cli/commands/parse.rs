//! Implementation of `sift parse`.

use std::process::ExitCode;

use sift_query::parse_with;
use tracing::debug;

use super::shared::ParserOverrides;
use crate::cli::{
    args::ParseCommand,
    context::CommandContext,
    output::{print_parse_error, render},
};

/// Parses each query and prints its tree, stopping at the first syntax error.
pub fn run(ctx: &CommandContext, cmd: &ParseCommand) -> ExitCode {
    let options = ParserOverrides::from(&cmd.parser).build_options(&ctx.config.parser);
    debug!(?options, "parsing {} queries", cmd.queries.len());

    for query in &cmd.queries {
        match parse_with(query, &options) {
            Ok(node) => println!("{}", render(&node, cmd.format)),
            Err(e) => {
                print_parse_error(query, &e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
