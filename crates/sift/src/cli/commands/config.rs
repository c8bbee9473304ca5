//! Implementation of `sift config`.

use std::process::ExitCode;

use tracing::debug;

use crate::cli::context::CommandContext;

/// Shows the configuration files in effect and the merged settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    debug!(cwd = %ctx.cwd.display(), "showing configuration");
    if config.files.is_empty() {
        println!("# No configuration files found.");
    } else {
        println!("# Configuration files (highest precedence first):");
        for path in &config.files {
            println!("#   {}", path.display());
        }
    }
    println!();
    print!("{}", config.settings_to_toml());
    ExitCode::SUCCESS
}
