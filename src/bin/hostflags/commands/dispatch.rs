//! `hostflags dispatch` command

use anyhow::Result;

use crate::cli::DispatchArgs;
use hostflags::builder::{register_objc_rule, ExtensionRegistry, FlagTable};

use super::{current_config, resolve_mode, resolve_platform};

pub fn execute(args: DispatchArgs) -> Result<()> {
    let config = current_config()?;
    let table = FlagTable::new(resolve_platform(args.platform.as_deref(), &config));
    let mode = resolve_mode(args.mode, &config);

    let mut registry = ExtensionRegistry::new();
    register_objc_rule(&mut registry);

    for file in &args.files {
        match registry.task_for(file) {
            Some(task) => {
                println!(
                    "{} -> {} ({})",
                    task.source.display(),
                    task.language,
                    task.object.display()
                );
                println!("  {}", table.compile_flags(task.language, mode).join(" "));
            }
            None => println!("{} -> no rule", file.display()),
        }
    }

    Ok(())
}
