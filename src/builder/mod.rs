//! Build inputs: flag tables, environment customization and extension rules.

pub mod environment;
pub mod extension;
pub mod flags;

pub use environment::{customize_environment, customize_host_environment, BuildEnv, EnvValue};
pub use extension::{register_objc_rule, CompiledTask, ExtensionRegistry};
pub use flags::{FlagGroup, FlagKind, FlagKindParseError, FlagSet, FlagTable};
