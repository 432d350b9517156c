//! CLI configuration: thin wrapper around `pokedex_config`.
//!
//! Applies `GlobalOpts` flag overrides (--api-url, --limit, ...) on top of
//! the file + environment config.

use clap::ValueEnum;

use pokedex_core::DexConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub use pokedex_config::{Config, config_path, load_config_or_default, save_config};

/// Resolved presentation settings for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct OutputContext {
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

/// Merge CLI flag overrides into the loaded config. Flags win.
pub fn apply_overrides(mut cfg: Config, global: &GlobalOpts) -> Config {
    if let Some(ref url) = global.api_url {
        cfg.api_url.clone_from(url);
    }
    if let Some(limit) = global.limit {
        cfg.limit = limit;
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout_secs = Some(timeout);
    }
    if let Some(ref locale) = global.locale {
        cfg.locale.clone_from(locale);
    }
    cfg
}

/// Translate the effective config into the core loader config.
pub fn resolve_dex_config(cfg: &Config) -> Result<DexConfig, CliError> {
    Ok(cfg.to_dex_config()?)
}

/// Output format and color: flag > config file > default.
pub fn resolve_output(cfg: &Config, global: &GlobalOpts) -> Result<OutputContext, CliError> {
    let format = match global.output {
        Some(format) => format,
        None => OutputFormat::from_str(&cfg.output, true).map_err(|_| CliError::Validation {
            field: "output".into(),
            reason: format!("unknown output format '{}'", cfg.output),
        })?,
    };
    let color = match global.color {
        Some(mode) => mode,
        None => ColorMode::from_str(&cfg.color, true).map_err(|_| CliError::Validation {
            field: "color".into(),
            reason: format!("expected 'auto', 'always', or 'never', got '{}'", cfg.color),
        })?,
    };

    Ok(OutputContext {
        format,
        color: output::should_color(color),
        quiet: global.quiet,
    })
}
