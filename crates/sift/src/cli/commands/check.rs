//! Implementation of `sift check`.

use std::process::ExitCode;

use sift_query::parse_with;

use super::shared::ParserOverrides;
use crate::cli::{args::CheckCommand, context::CommandContext, output::print_parse_error};

/// Validates every query, reporting each failure. Fails if any query is invalid.
pub fn run(ctx: &CommandContext, cmd: &CheckCommand) -> ExitCode {
    let options = ParserOverrides::from(&cmd.parser).build_options(&ctx.config.parser);

    let mut failures = 0usize;
    for query in &cmd.queries {
        match parse_with(query, &options) {
            Ok(_) => {
                if !cmd.quiet {
                    println!("ok: {query}");
                }
            }
            Err(e) => {
                failures += 1;
                print_parse_error(query, &e);
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        eprintln!("{failures} of {} queries invalid", cmd.queries.len());
        ExitCode::FAILURE
    }
}
