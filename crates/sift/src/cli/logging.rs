//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output. `SIFT_LOG` takes an
//! `EnvFilter` directive and wins over the `-v` count.

use std::{env, io};

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "SIFT_LOG";

/// Returns the default filter directive for a verbosity count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber.
pub fn init(verbose: u8) {
    let filter = env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: could not initialize logging: {e}");
    }
}
