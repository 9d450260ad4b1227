//! Configuration file support for hostflags.
//!
//! Two configuration file locations are read:
//! - Global: `~/.hostflags/config.toml` - User-wide defaults
//! - Project: `.hostflags/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{BuildMode, PlatformKind};

/// hostflags configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildSettings,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Platform identifier to use instead of the host's (e.g., "win32")
    pub platform: Option<String>,

    /// Default build mode (debug, release)
    pub mode: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.platform.is_some() {
            self.build.platform = other.build.platform;
        }
        if other.build.mode.is_some() {
            self.build.mode = other.build.mode;
        }
    }

    /// The platform identifier to build for: the override, else the host's.
    pub fn platform_identifier(&self) -> &str {
        self.build
            .platform
            .as_deref()
            .unwrap_or(PlatformKind::host_identifier())
    }

    /// The platform to build for.
    pub fn platform(&self) -> PlatformKind {
        PlatformKind::from_identifier(self.platform_identifier())
    }

    /// Parse the build mode from config string.
    pub fn mode(&self) -> Option<BuildMode> {
        let mode = self.build.mode.as_ref()?;
        match mode.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                tracing::warn!("ignoring configured mode: {}", e);
                None
            }
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.hostflags/config.toml)
/// 2. Global config (~/.hostflags/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    // Load global config first
    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    // Project config overrides global
    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global hostflags config directory (~/.hostflags).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".hostflags"))
}

/// Get the global config path (~/.hostflags/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.hostflags/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".hostflags").join("config.toml")
}
