//! Command-line interface for the sift query language.

mod cli;

use std::process::ExitCode;

use cli::{CommandContext, args::parse_cli, commands, logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.global.verbose);

    let ctx = match CommandContext::load(cli.global.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
