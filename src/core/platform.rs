//! Host platform classification.
//!
//! Platforms are identified by the same short strings a build host reports
//! (`win32`, `darwin`, `linux`, ...). Only `win32` and `darwin` are treated
//! specially; every other identifier is classified as a generic Unix.

use std::fmt;

/// The platform family a flag set is selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlatformKind {
    /// Microsoft Windows (MSVC toolchain)
    Windows,
    /// Apple macOS
    MacOs,
    /// Linux and any unrecognized platform
    #[default]
    OtherUnix,
}

impl PlatformKind {
    /// Identifier reported for Windows hosts.
    pub const WINDOWS_ID: &'static str = "win32";
    /// Identifier reported for macOS hosts.
    pub const MACOS_ID: &'static str = "darwin";
    /// Identifier reported for Linux hosts.
    pub const LINUX_ID: &'static str = "linux";

    /// Classify a platform identifier.
    ///
    /// This never fails: anything other than `win32` or `darwin` maps to
    /// [`PlatformKind::OtherUnix`].
    pub fn from_identifier(id: &str) -> Self {
        match id {
            Self::WINDOWS_ID => PlatformKind::Windows,
            Self::MACOS_ID => PlatformKind::MacOs,
            other => {
                if other != Self::LINUX_ID {
                    tracing::debug!("unrecognized platform `{}`, using unix flags", other);
                }
                PlatformKind::OtherUnix
            }
        }
    }

    /// The identifier of the platform this process runs on.
    pub fn host_identifier() -> &'static str {
        match std::env::consts::OS {
            "windows" => Self::WINDOWS_ID,
            "macos" => Self::MACOS_ID,
            other => other,
        }
    }

    /// Classify the host platform.
    ///
    /// Reads the host on every call; callers that need a stable value should
    /// hold on to the result.
    pub fn host() -> Self {
        Self::from_identifier(Self::host_identifier())
    }

    /// Canonical identifier for this platform kind.
    pub fn identifier(&self) -> &'static str {
        match self {
            PlatformKind::Windows => Self::WINDOWS_ID,
            PlatformKind::MacOs => Self::MACOS_ID,
            PlatformKind::OtherUnix => Self::LINUX_ID,
        }
    }

    /// Get the platform name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Windows => "windows",
            PlatformKind::MacOs => "macos",
            PlatformKind::OtherUnix => "unix",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers() {
        assert_eq!(PlatformKind::from_identifier("win32"), PlatformKind::Windows);
        assert_eq!(PlatformKind::from_identifier("darwin"), PlatformKind::MacOs);
        assert_eq!(PlatformKind::from_identifier("linux"), PlatformKind::OtherUnix);
    }

    #[test]
    fn test_unknown_identifiers_fall_back_to_unix() {
        for id in ["linux2", "freebsd", "sunos5", "cygwin", "", "Win32", "windows", "macos"] {
            assert_eq!(PlatformKind::from_identifier(id), PlatformKind::OtherUnix, "{id}");
        }
    }

    #[test]
    fn test_identifier_round_trip() {
        for kind in [PlatformKind::Windows, PlatformKind::MacOs, PlatformKind::OtherUnix] {
            assert_eq!(PlatformKind::from_identifier(kind.identifier()), kind);
        }
    }

    #[test]
    fn test_host_matches_build_target() {
        let expected = if cfg!(target_os = "windows") {
            PlatformKind::Windows
        } else if cfg!(target_os = "macos") {
            PlatformKind::MacOs
        } else {
            PlatformKind::OtherUnix
        };
        assert_eq!(PlatformKind::host(), expected);
    }
}
