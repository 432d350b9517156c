//! Command dispatch.

pub mod config_cmd;
pub mod list;
pub mod show;

use pokedex_core::Pokedex;

use crate::cli::Command;
use crate::config::OutputContext;
use crate::error::CliError;

/// Route a network-backed command to its handler.
pub async fn dispatch(cmd: Command, dex: &Pokedex, ctx: OutputContext) -> Result<(), CliError> {
    match cmd {
        Command::List(args) => list::handle(dex, args, ctx).await,
        Command::Show(args) => show::handle(dex, args, ctx).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
