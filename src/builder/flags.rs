//! Per-platform compiler and linker flag tables.
//!
//! Each platform has one immutable [`FlagSet`] holding token lists for the C
//! compiler, the C++ compiler, the linker and the preprocessor. Every list is
//! split into a common part and a debug/release part; resolving a list for a
//! [`BuildMode`] yields the common tokens followed by the mode tokens.

use std::fmt;

use thiserror::Error;

use crate::core::{BuildMode, Language, PlatformKind};

/// Tokens shared by both modes plus the tokens specific to each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagGroup {
    pub common: &'static [&'static str],
    pub debug: &'static [&'static str],
    pub release: &'static [&'static str],
}

impl FlagGroup {
    /// A group with no tokens at all.
    pub const EMPTY: FlagGroup = FlagGroup {
        common: &[],
        debug: &[],
        release: &[],
    };

    /// The mode-specific tokens.
    pub fn for_mode(&self, mode: BuildMode) -> &'static [&'static str] {
        match mode {
            BuildMode::Debug => self.debug,
            BuildMode::Release => self.release,
        }
    }

    /// Common tokens followed by the tokens for `mode`.
    pub fn resolve(&self, mode: BuildMode) -> Vec<String> {
        self.common
            .iter()
            .chain(self.for_mode(mode))
            .map(|token| token.to_string())
            .collect()
    }
}

/// Which list of a [`FlagSet`] to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// C compiler flags
    C,
    /// C++ compiler flags
    Cxx,
    /// Linker flags
    Link,
    /// Preprocessor definitions
    Defines,
}

impl FlagKind {
    /// All kinds in display order.
    pub const ALL: [FlagKind; 4] = [FlagKind::Defines, FlagKind::C, FlagKind::Cxx, FlagKind::Link];

    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagKind::C => "c",
            FlagKind::Cxx => "c++",
            FlagKind::Link => "link",
            FlagKind::Defines => "defines",
        }
    }
}

impl From<Language> for FlagKind {
    fn from(lang: Language) -> Self {
        match lang {
            Language::C => FlagKind::C,
            Language::Cxx => FlagKind::Cxx,
        }
    }
}

/// Error returned when parsing an invalid flag kind string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid flag kind '{0}', valid values: c, c++, link, defines")]
pub struct FlagKindParseError(pub String);

impl std::str::FromStr for FlagKind {
    type Err = FlagKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "cc" => Ok(FlagKind::C),
            "c++" | "cpp" | "cxx" => Ok(FlagKind::Cxx),
            "link" | "ld" => Ok(FlagKind::Link),
            "defines" | "defs" => Ok(FlagKind::Defines),
            _ => Err(FlagKindParseError(s.to_string())),
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete flag and define lists for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSet {
    pub c: FlagGroup,
    pub cxx: FlagGroup,
    pub link: FlagGroup,
    pub defines: FlagGroup,
}

const MSVC_DEBUG: &[&str] = &["/Z7", "/W4", "/Od", "/MDd"];
const MSVC_RELEASE: &[&str] = &["/W1", "/O2", "/Ot", "/MD"];

impl FlagSet {
    /// MSVC flags.
    pub const WINDOWS: FlagSet = FlagSet {
        c: FlagGroup {
            common: &["/nologo", "/FC", "/openmp"],
            debug: MSVC_DEBUG,
            release: MSVC_RELEASE,
        },
        cxx: FlagGroup {
            common: &["/EHsc", "/nologo", "/GR", "/FC", "/openmp"],
            debug: MSVC_DEBUG,
            release: MSVC_RELEASE,
        },
        link: FlagGroup {
            common: &[],
            debug: &["/DEBUG"],
            release: &["/RELEASE"],
        },
        defines: FlagGroup {
            common: &["WIN32", "_MBCS"],
            debug: &["_DEBUG", "__Debug__", "_CRT_SECURE_NO_WARNINGS"],
            release: &["NDEBUG", "_CRT_SECURE_NO_WARNINGS"],
        },
    };

    /// Apple clang flags.
    pub const MACOS: FlagSet = FlagSet {
        c: FlagGroup {
            common: &["-arch", "x86_64"],
            debug: &["-g"],
            release: &["-O2"],
        },
        cxx: FlagGroup {
            common: &["-arch", "x86_64"],
            debug: &["-g"],
            release: &["-O2"],
        },
        link: FlagGroup::EMPTY,
        defines: FlagGroup {
            common: &["OSX"],
            debug: &["_DEBUG", "__Debug__"],
            release: &["NDEBUG"],
        },
    };

    /// Linux, and the fallback for unrecognized platforms.
    pub const UNIX: FlagSet = FlagSet {
        c: FlagGroup {
            common: &["-fPIC"],
            debug: &["-g"],
            release: &["-O2"],
        },
        cxx: FlagGroup {
            common: &["-fPIC"],
            debug: &["-g"],
            release: &["-O2"],
        },
        link: FlagGroup::EMPTY,
        defines: FlagGroup {
            common: &["LINUX", "POSIX"],
            debug: &["_DEBUG", "__Debug__"],
            release: &["NDEBUG"],
        },
    };

    /// Select the flag set for a platform.
    pub fn for_platform(platform: PlatformKind) -> FlagSet {
        match platform {
            PlatformKind::Windows => FlagSet::WINDOWS,
            PlatformKind::MacOs => FlagSet::MACOS,
            PlatformKind::OtherUnix => FlagSet::UNIX,
        }
    }

    /// The group for a flag kind.
    pub fn group(&self, kind: FlagKind) -> &FlagGroup {
        match kind {
            FlagKind::C => &self.c,
            FlagKind::Cxx => &self.cxx,
            FlagKind::Link => &self.link,
            FlagKind::Defines => &self.defines,
        }
    }
}

/// Resolved flag lists for one platform.
///
/// A table is a plain value: build it once with [`FlagTable::new`] and pass
/// it to whatever needs flags. Accessors allocate a fresh list on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagTable {
    platform: PlatformKind,
    set: FlagSet,
}

impl FlagTable {
    /// Create the table for a platform.
    pub fn new(platform: PlatformKind) -> Self {
        FlagTable {
            platform,
            set: FlagSet::for_platform(platform),
        }
    }

    /// Create the table for a platform identifier such as `win32`.
    pub fn from_identifier(id: &str) -> Self {
        Self::new(PlatformKind::from_identifier(id))
    }

    /// Create the table for the host platform.
    pub fn host() -> Self {
        Self::new(PlatformKind::host())
    }

    /// The platform this table was built for.
    pub fn platform(&self) -> PlatformKind {
        self.platform
    }

    /// The underlying flag set.
    pub fn flag_set(&self) -> &FlagSet {
        &self.set
    }

    /// Resolve one list for a mode.
    pub fn resolve(&self, kind: FlagKind, mode: BuildMode) -> Vec<String> {
        self.set.group(kind).resolve(mode)
    }

    /// Compiler flags for a front end.
    pub fn compile_flags(&self, lang: Language, mode: BuildMode) -> Vec<String> {
        self.resolve(lang.into(), mode)
    }

    /// Preprocessor definitions for debug builds.
    pub fn debug_defines(&self) -> Vec<String> {
        self.resolve(FlagKind::Defines, BuildMode::Debug)
    }

    /// Preprocessor definitions for release builds.
    pub fn release_defines(&self) -> Vec<String> {
        self.resolve(FlagKind::Defines, BuildMode::Release)
    }

    /// C compiler flags for debug builds.
    pub fn c_debug_flags(&self) -> Vec<String> {
        self.resolve(FlagKind::C, BuildMode::Debug)
    }

    /// C compiler flags for release builds.
    pub fn c_release_flags(&self) -> Vec<String> {
        self.resolve(FlagKind::C, BuildMode::Release)
    }

    /// C++ compiler flags for debug builds.
    pub fn cpp_debug_flags(&self) -> Vec<String> {
        self.resolve(FlagKind::Cxx, BuildMode::Debug)
    }

    /// C++ compiler flags for release builds.
    pub fn cpp_release_flags(&self) -> Vec<String> {
        self.resolve(FlagKind::Cxx, BuildMode::Release)
    }

    /// Linker flags for debug builds.
    pub fn link_debug_flags(&self) -> Vec<String> {
        self.resolve(FlagKind::Link, BuildMode::Debug)
    }

    /// Linker flags for release builds.
    pub fn link_release_flags(&self) -> Vec<String> {
        self.resolve(FlagKind::Link, BuildMode::Release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATFORMS: [PlatformKind; 3] = [
        PlatformKind::Windows,
        PlatformKind::MacOs,
        PlatformKind::OtherUnix,
    ];

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    type Accessor = fn(&FlagTable) -> Vec<String>;

    const ACCESSORS: [(&str, Accessor); 8] = [
        ("debug_defines", FlagTable::debug_defines),
        ("release_defines", FlagTable::release_defines),
        ("c_debug_flags", FlagTable::c_debug_flags),
        ("c_release_flags", FlagTable::c_release_flags),
        ("cpp_debug_flags", FlagTable::cpp_debug_flags),
        ("cpp_release_flags", FlagTable::cpp_release_flags),
        ("link_debug_flags", FlagTable::link_debug_flags),
        ("link_release_flags", FlagTable::link_release_flags),
    ];

    /// Expected output of each accessor, in `ACCESSORS` order.
    fn expected_lists(platform: PlatformKind) -> [&'static [&'static str]; 8] {
        match platform {
            PlatformKind::Windows => [
                &["WIN32", "_MBCS", "_DEBUG", "__Debug__", "_CRT_SECURE_NO_WARNINGS"],
                &["WIN32", "_MBCS", "NDEBUG", "_CRT_SECURE_NO_WARNINGS"],
                &["/nologo", "/FC", "/openmp", "/Z7", "/W4", "/Od", "/MDd"],
                &["/nologo", "/FC", "/openmp", "/W1", "/O2", "/Ot", "/MD"],
                &["/EHsc", "/nologo", "/GR", "/FC", "/openmp", "/Z7", "/W4", "/Od", "/MDd"],
                &["/EHsc", "/nologo", "/GR", "/FC", "/openmp", "/W1", "/O2", "/Ot", "/MD"],
                &["/DEBUG"],
                &["/RELEASE"],
            ],
            PlatformKind::MacOs => [
                &["OSX", "_DEBUG", "__Debug__"],
                &["OSX", "NDEBUG"],
                &["-arch", "x86_64", "-g"],
                &["-arch", "x86_64", "-O2"],
                &["-arch", "x86_64", "-g"],
                &["-arch", "x86_64", "-O2"],
                &[],
                &[],
            ],
            PlatformKind::OtherUnix => [
                &["LINUX", "POSIX", "_DEBUG", "__Debug__"],
                &["LINUX", "POSIX", "NDEBUG"],
                &["-fPIC", "-g"],
                &["-fPIC", "-O2"],
                &["-fPIC", "-g"],
                &["-fPIC", "-O2"],
                &[],
                &[],
            ],
        }
    }

    #[test]
    fn test_all_accessors_match_literal_tables() {
        for platform in PLATFORMS {
            let table = FlagTable::new(platform);
            for ((name, accessor), expected) in ACCESSORS.iter().zip(expected_lists(platform)) {
                assert_eq!(accessor(&table), strings(expected), "{platform} {name}");
            }
        }
    }

    #[test]
    fn test_accessors_are_idempotent() {
        for platform in PLATFORMS {
            let table = FlagTable::new(platform);
            for (name, accessor) in ACCESSORS {
                assert_eq!(accessor(&table), accessor(&table), "{platform} {name}");
            }
        }
    }

    #[test]
    fn test_unknown_platform_uses_unix_set() {
        for id in ["linux", "linux2", "freebsd14", "sunos5", "aix"] {
            let table = FlagTable::from_identifier(id);
            assert_eq!(*table.flag_set(), FlagSet::UNIX);
            assert_eq!(table.platform(), PlatformKind::OtherUnix);
        }
    }

    #[test]
    fn test_unix_values() {
        let table = FlagTable::new(PlatformKind::OtherUnix);
        assert_eq!(table.cpp_release_flags(), vec!["-fPIC", "-O2"]);
        assert_eq!(table.c_debug_flags(), vec!["-fPIC", "-g"]);
        assert_eq!(table.release_defines(), vec!["LINUX", "POSIX", "NDEBUG"]);
        assert_eq!(table.debug_defines(), vec!["LINUX", "POSIX", "_DEBUG", "__Debug__"]);
        assert!(table.link_debug_flags().is_empty());
        assert!(table.link_release_flags().is_empty());
    }

    #[test]
    fn test_windows_values() {
        let table = FlagTable::from_identifier("win32");
        assert_eq!(table.link_debug_flags(), vec!["/DEBUG"]);
        assert_eq!(table.link_release_flags(), vec!["/RELEASE"]);
        assert_eq!(
            table.c_debug_flags(),
            vec!["/nologo", "/FC", "/openmp", "/Z7", "/W4", "/Od", "/MDd"]
        );
        assert_eq!(
            table.cpp_release_flags(),
            vec!["/EHsc", "/nologo", "/GR", "/FC", "/openmp", "/W1", "/O2", "/Ot", "/MD"]
        );
        assert_eq!(
            table.debug_defines(),
            vec!["WIN32", "_MBCS", "_DEBUG", "__Debug__", "_CRT_SECURE_NO_WARNINGS"]
        );
        assert_eq!(
            table.release_defines(),
            vec!["WIN32", "_MBCS", "NDEBUG", "_CRT_SECURE_NO_WARNINGS"]
        );
    }

    #[test]
    fn test_macos_values() {
        let table = FlagTable::from_identifier("darwin");
        assert_eq!(table.c_release_flags(), vec!["-arch", "x86_64", "-O2"]);
        assert_eq!(table.cpp_debug_flags(), vec!["-arch", "x86_64", "-g"]);
        assert_eq!(table.debug_defines(), vec!["OSX", "_DEBUG", "__Debug__"]);
        assert_eq!(table.release_defines(), vec!["OSX", "NDEBUG"]);
        assert!(table.link_debug_flags().is_empty());
    }

    #[test]
    fn test_no_empty_tokens() {
        for platform in PLATFORMS {
            let table = FlagTable::new(platform);
            for kind in FlagKind::ALL {
                for mode in BuildMode::ALL {
                    assert!(table.resolve(kind, mode).iter().all(|t| !t.trim().is_empty()));
                }
            }
        }
    }

    #[test]
    fn test_compile_flags_follow_language() {
        let table = FlagTable::new(PlatformKind::Windows);
        assert_eq!(
            table.compile_flags(Language::C, BuildMode::Release),
            table.c_release_flags()
        );
        assert_eq!(
            table.compile_flags(Language::Cxx, BuildMode::Debug),
            table.cpp_debug_flags()
        );
    }

    #[test]
    fn test_flag_kind_parse() {
        assert_eq!("cpp".parse::<FlagKind>().unwrap(), FlagKind::Cxx);
        assert_eq!("ld".parse::<FlagKind>().unwrap(), FlagKind::Link);
        assert_eq!("defs".parse::<FlagKind>().unwrap(), FlagKind::Defines);
        assert!("asm".parse::<FlagKind>().is_err());
    }
}
