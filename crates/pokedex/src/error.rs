//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use pokedex_config::ConfigError;
use pokedex_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach PokéAPI at {url}")]
    #[diagnostic(
        code(pokedex::connection_failed),
        help(
            "Check your network connection.\n\
             To use a mirror, pass --api-url or set api_url in the config file."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(pokedex::timeout),
        help("Increase the timeout with --timeout, or pass --timeout 0 to wait indefinitely.")
    )]
    Timeout,

    // ── Loading ──────────────────────────────────────────────────────
    #[error("Pokémon '{identifier}' not found")]
    #[diagnostic(
        code(pokedex::not_found),
        help("Run: pokedex list --search <name> to find the right name or number")
    )]
    NotFound { identifier: String },

    #[error("Could not load the Pokédex: {message}")]
    #[diagnostic(
        code(pokedex::load_failed),
        help("No partial results are shown. Check your connection and try again.")
    )]
    LoadFailed { message: String },

    #[error("API error: {message}")]
    #[diagnostic(code(pokedex::api_error))]
    Api { message: String },

    // ── Validation / configuration ───────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(pokedex::validation))]
    Validation { field: String, reason: String },

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(pokedex::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(pokedex::config))]
    Config(ConfigError),

    #[error("Could not render output: {message}")]
    #[diagnostic(code(pokedex::render))]
    Render { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Config(ConfigError::Validation { .. }) => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Timeout => CliError::Timeout,

            CoreError::NotFound { identifier } => CliError::NotFound { identifier },

            err @ (CoreError::IndexFetch { .. }
            | CoreError::DetailFetch { .. }
            | CoreError::Superseded) => CliError::LoadFailed {
                message: err.to_string(),
            },

            CoreError::Api { message, status: _ } | CoreError::Internal(message) => {
                CliError::Api { message }
            }

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}
