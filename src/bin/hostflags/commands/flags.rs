//! `hostflags flags` command

use anyhow::Result;

use crate::cli::FlagsArgs;
use hostflags::builder::{FlagKind, FlagTable};

use super::{current_config, resolve_mode, resolve_platform};

pub fn execute(args: FlagsArgs) -> Result<()> {
    let config = current_config()?;
    let platform = resolve_platform(args.platform.as_deref(), &config);
    let mode = resolve_mode(args.mode, &config);

    tracing::debug!("resolving {} flags for {}", mode, platform);
    let table = FlagTable::new(platform);

    let kinds: Vec<FlagKind> = match args.kind {
        Some(kind) => vec![kind],
        None => FlagKind::ALL.to_vec(),
    };

    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("# {} ({})", kind, mode);
        for token in table.resolve(*kind, mode) {
            println!("{}", token);
        }
    }

    Ok(())
}
