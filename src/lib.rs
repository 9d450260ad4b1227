//! hostflags - per-platform compiler and linker flags for native builds
//!
//! This crate supplies the inputs a C/C++ build system needs from the host
//! platform: resolved compiler, linker and preprocessor flag lists for debug
//! and release builds, toolchain tweaks applied to a build environment, and
//! the extension rules that route source files to a compiler front end.

pub mod builder;
pub mod core;
pub mod util;

pub use self::builder::{BuildEnv, ExtensionRegistry, FlagSet, FlagTable};
pub use self::core::{BuildMode, Language, PlatformKind};
