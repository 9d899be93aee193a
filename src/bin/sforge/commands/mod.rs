mod chains;
mod json;
mod multisets;
mod setup;

use chains::run_chains;
use json::run_json;
use multisets::run_multisets;
use setup::run_setup;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Json(args) => run_json(args, ctx),
        Command::Multisets(args) => run_multisets(args, ctx),
        Command::Chains(args) => run_chains(args, ctx),
        Command::Setup(args) => run_setup(args, ctx),
    }
}
