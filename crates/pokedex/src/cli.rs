//! Clap derive structures for the `pokedex` CLI.
//!
//! Defines the command tree, global flags, and shared output enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// pokedex -- browse Pokémon from the command line
#[derive(Debug, Parser)]
#[command(
    name = "pokedex",
    version,
    about = "Browse the Pokédex from the command line",
    long_about = "Lists and inspects Pokémon fetched live from PokéAPI.\n\n\
        Every command re-fetches from the network; nothing is cached.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// PokéAPI root URL (overrides config)
    #[arg(long, env = "POKEDEX_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Number of Pokémon in the catalog
    #[arg(long, short = 'l', env = "POKEDEX_LIMIT", global = true)]
    pub limit: Option<u32>,

    /// Request timeout in seconds (0 = wait indefinitely)
    #[arg(long, env = "POKEDEX_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Language code for flavor text and genus
    #[arg(long, env = "POKEDEX_LOCALE", global = true)]
    pub locale: Option<String>,

    /// Output format
    #[arg(long, short = 'o', env = "POKEDEX_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalog, optionally filtered by name
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show full details for one Pokémon
    #[command(alias = "get")]
    Show(ShowArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring to match against names
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Pokédex number or name
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
