//! `hostflags env` command

use anyhow::{Context, Result};

use crate::cli::EnvArgs;
use hostflags::builder::environment::{customize_environment, BuildEnv, LINKFLAGS};

use super::{current_config, resolve_platform};

pub fn execute(args: EnvArgs) -> Result<()> {
    let config = current_config()?;
    let platform = resolve_platform(args.platform.as_deref(), &config);

    let mut env = BuildEnv::new();
    if !args.linkflags.is_empty() {
        env.append_value(LINKFLAGS, args.linkflags);
    }

    customize_environment(&mut env, platform);

    let output = if args.json {
        serde_json::to_string_pretty(&env).context("failed to serialize environment")?
    } else {
        toml::to_string(&env).context("failed to serialize environment")?
    };
    print!("{}", output);
    if args.json {
        println!();
    }

    Ok(())
}
