//! Core platform and build-mode types.

pub mod language;
pub mod mode;
pub mod platform;

pub use language::Language;
pub use mode::{BuildMode, BuildModeParseError};
pub use platform::PlatformKind;
