mod cli;
mod commands;
mod config;
mod error;
mod format;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokedex_core::Pokedex;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands never touch the network
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "pokedex", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let cfg = config::apply_overrides(config::load_config_or_default(), &cli.global);
            let ctx = config::resolve_output(&cfg, &cli.global)?;
            let dex = Pokedex::new(config::resolve_dex_config(&cfg)?)?;

            tracing::debug!(command = ?cmd, base_url = %dex.config().base_url, "dispatching command");
            commands::dispatch(cmd, &dex, ctx).await
        }
    }
}
