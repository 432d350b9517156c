//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Show: effective config after file, env, and flags ───────
        ConfigCommand::Show => {
            let cfg = config::apply_overrides(config::load_config_or_default(), global);
            let format = global.output.unwrap_or(OutputFormat::Table);
            let out = output::render_card(
                format,
                &cfg,
                |c| {
                    toml::to_string_pretty(c)
                        .map_or_else(|_| format!("{c:#?}"), |s| s.trim_end().to_owned())
                },
                |_| config::config_path().display().to_string(),
            )?;
            output::emit(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── Init: write defaults ────────────────────────────────────
        ConfigCommand::Init { force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let written = config::save_config(&Config::default())?;
            if !global.quiet {
                eprintln!("Wrote {}", written.display());
            }
            Ok(())
        }
    }
}
