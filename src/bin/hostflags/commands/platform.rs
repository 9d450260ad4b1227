//! `hostflags platform` command

use anyhow::Result;

use hostflags::core::PlatformKind;

use super::current_config;

pub fn execute() -> Result<()> {
    let config = current_config()?;

    println!("Host:     {}", PlatformKind::host_identifier());
    match &config.build.platform {
        Some(id) => println!("Override: {}", id),
        None => println!("Override: none"),
    }
    println!("Platform: {}", config.platform());

    Ok(())
}
