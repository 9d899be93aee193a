use anyhow::{Context, Result};

use stoich_forge::match_chain_ids;

use crate::cli::ChainsArgs;
use crate::display::{Context as DisplayContext, print_summary};
use crate::util::convert::policy_display_name;

pub fn run_chains(args: ChainsArgs, ctx: DisplayContext) -> Result<()> {
    let mapping = match_chain_ids(&args.basename, args.policy.into())
        .with_context(|| format!("Cannot map chain ids for '{}'", args.basename))?;

    if ctx.interactive {
        print_summary(
            "Chain Mapping",
            &[
                ("Basename", args.basename.clone()),
                ("Policy", policy_display_name(args.policy).to_string()),
                ("Template chains", mapping.template_labels.len().to_string()),
                ("Target chains", mapping.target_labels.len().to_string()),
            ],
        );
    }

    println!("{mapping}");
    Ok(())
}
