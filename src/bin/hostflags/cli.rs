//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};

use hostflags::builder::FlagKind;
use hostflags::core::BuildMode;

/// hostflags - Per-platform compiler and linker flags for C/C++ builds
#[derive(Parser)]
#[command(name = "hostflags")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved compile/link flags and defines
    Flags(FlagsArgs),

    /// Show the customized build environment
    Env(EnvArgs),

    /// Show which compiler front end handles each source file
    Dispatch(DispatchArgs),

    /// Show the detected platform
    Platform,
}

#[derive(Args)]
pub struct FlagsArgs {
    /// Build mode (debug, release)
    #[arg(short, long, env = "HOSTFLAGS_MODE")]
    pub mode: Option<BuildMode>,

    /// Platform identifier to use instead of the host's (e.g., win32, darwin, linux)
    #[arg(long, env = "HOSTFLAGS_PLATFORM")]
    pub platform: Option<String>,

    /// Only show one list (c, c++, link, defines)
    #[arg(short, long)]
    pub kind: Option<FlagKind>,
}

#[derive(Args)]
pub struct EnvArgs {
    /// Platform identifier to use instead of the host's
    #[arg(long, env = "HOSTFLAGS_PLATFORM")]
    pub platform: Option<String>,

    /// Existing linker flag to seed LINKFLAGS with
    #[arg(long = "linkflag", allow_hyphen_values = true)]
    pub linkflags: Vec<String>,

    /// Print as JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DispatchArgs {
    /// Source files to look up
    #[arg(required = true)]
    pub files: Vec<std::path::PathBuf>,

    /// Build mode whose compile flags are shown
    #[arg(short, long, env = "HOSTFLAGS_MODE")]
    pub mode: Option<BuildMode>,

    /// Platform identifier to use instead of the host's
    #[arg(long, env = "HOSTFLAGS_PLATFORM")]
    pub platform: Option<String>,
}
