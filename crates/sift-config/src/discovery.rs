//! Configuration file discovery.
//!
//! Walks up from the working directory collecting `.sift.toml` files, parsing each one as
//! it is found. A file with `root = true` ends the walk; otherwise the global
//! `~/.sift.toml` is appended with the lowest precedence.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::{ConfigError, merge::ParsedConfig, parse::parse_config_file};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".sift.toml";

/// Discovers and parses every configuration file relevant to `cwd`.
///
/// Returns configs in precedence order: closest to `cwd` first, global last. Files above
/// a root config are never read, so a broken file there cannot fail the load.
pub fn discover_configs(cwd: &Path) -> Result<Vec<ParsedConfig>, ConfigError> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            continue;
        }
        let parsed = read(path)?;
        let is_root = parsed.config.root == Some(true);
        configs.push(parsed);
        if is_root {
            debug!(dir = %dir.display(), "root config found, stopping discovery");
            return Ok(configs);
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !configs.iter().any(|c| c.path == global)
    {
        configs.push(read(global)?);
    }

    Ok(configs)
}

/// Parses the config file at `path`.
fn read(path: PathBuf) -> Result<ParsedConfig, ConfigError> {
    debug!(path = %path.display(), "reading config");
    let config = parse_config_file(&path)?;
    Ok(ParsedConfig { path, config })
}

/// Returns the path to the global configuration file (`~/.sift.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}
