//! Command implementations

pub mod dispatch;
pub mod env;
pub mod flags;
pub mod platform;

use anyhow::{Context, Result};

use hostflags::core::{BuildMode, PlatformKind};
use hostflags::util::config::{global_config_path, load_config, project_config_path};
use hostflags::util::Config;

/// Load the merged global and project config for the working directory.
pub fn current_config() -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let global = global_config_path();
    Ok(load_config(global.as_deref(), &project_config_path(&cwd)))
}

/// Platform from the command line, else from config, else the host.
pub fn resolve_platform(cli: Option<&str>, config: &Config) -> PlatformKind {
    match cli {
        Some(id) => PlatformKind::from_identifier(id),
        None => config.platform(),
    }
}

/// Mode from the command line, else from config, else debug.
pub fn resolve_mode(cli: Option<BuildMode>, config: &Config) -> BuildMode {
    cli.or_else(|| config.mode()).unwrap_or_default()
}
