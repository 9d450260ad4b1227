//! Build mode (debug or release).

use std::fmt;

use thiserror::Error;

/// Compilation configuration a flag list is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildMode {
    /// Unoptimized build with debug info (default)
    #[default]
    Debug,
    /// Optimized build
    Release,
}

impl BuildMode {
    /// Both modes, debug first.
    pub const ALL: [BuildMode; 2] = [BuildMode::Debug, BuildMode::Release];

    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }
}

/// Error returned when parsing an invalid build mode string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid build mode '{0}', valid values: debug, release")]
pub struct BuildModeParseError(pub String);

impl std::str::FromStr for BuildMode {
    type Err = BuildModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" | "dev" => Ok(BuildMode::Debug),
            "release" => Ok(BuildMode::Release),
            _ => Err(BuildModeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("debug".parse::<BuildMode>().unwrap(), BuildMode::Debug);
        assert_eq!("Release".parse::<BuildMode>().unwrap(), BuildMode::Release);
        assert_eq!("dev".parse::<BuildMode>().unwrap(), BuildMode::Debug);
    }

    #[test]
    fn test_parse_error() {
        let err = "fast".parse::<BuildMode>().unwrap_err();
        assert_eq!(err, BuildModeParseError("fast".to_string()));
        assert!(err.to_string().contains("debug, release"));
    }

    #[test]
    fn test_default_is_debug() {
        assert_eq!(BuildMode::default(), BuildMode::Debug);
    }
}
