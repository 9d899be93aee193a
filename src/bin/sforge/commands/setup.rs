use anyhow::Result;

use crate::cli::SetupArgs;
use crate::config::load_workflow_config;
use crate::display::{Context as DisplayContext, Progress};
use crate::io::ensure_dir;

const TOTAL_STEPS: u8 = 2;

pub fn run_setup(args: SetupArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading workflow config");
    let config = load_workflow_config(&args.config)?;
    let dirs = config.directories()?;
    progress.complete_step(
        "Reading workflow config",
        &[format!("Loaded {}", args.config.display())],
    );

    progress.step("Creating directories");
    let mut created = Vec::with_capacity(dirs.len());
    for dir in dirs {
        ensure_dir(dir)?;
        created.push(format!("Created or verified: {}", dir.display()));
    }
    progress.complete_step("Creating directories", &created);

    if ctx.interactive {
        progress.finish("Workflow directories ready");
    } else {
        for line in &created {
            eprintln!("{line}");
        }
    }

    Ok(())
}
