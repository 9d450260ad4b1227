//! hostflags CLI - per-platform compiler and linker flags

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("hostflags=debug")
    } else {
        EnvFilter::new("hostflags=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Flags(args) => commands::flags::execute(args),
        Commands::Env(args) => commands::env::execute(args),
        Commands::Dispatch(args) => commands::dispatch::execute(args),
        Commands::Platform => commands::platform::execute(),
    }
}
