// ── Core error types ──
//
// User-facing errors from pokedex-core. Consumers never see raw HTTP or
// JSON failures; the `From<pokedex_api::Error>` impl and the per-leg
// constructors below translate them into load-level variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Load failures ────────────────────────────────────────────────
    /// The index (name/URL list) could not be fetched or decoded.
    #[error("Failed to fetch the Pokémon index: {reason}")]
    IndexFetch { reason: String },

    /// One of the fan-out detail fetches failed; the whole catalog is discarded.
    #[error("Failed to fetch Pokémon details from {url}: {reason}")]
    DetailFetch { url: String, reason: String },

    #[error("Pokémon not found: {identifier}")]
    NotFound { identifier: String },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Load ordering ────────────────────────────────────────────────
    /// A newer load was issued before this one finished; its result was dropped.
    #[error("Load superseded by a newer request")]
    Superseded,

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Classify an index-fetch failure.
    pub(crate) fn index_fetch(err: pokedex_api::Error) -> Self {
        match Self::from(err) {
            Self::Api { message, .. } | Self::Internal(message) => Self::IndexFetch { reason: message },
            Self::NotFound { identifier } => Self::IndexFetch {
                reason: format!("index endpoint not found ({identifier})"),
            },
            other => other,
        }
    }

    /// Classify a failure of one fan-out detail fetch.
    pub(crate) fn detail_fetch(url: &str, err: pokedex_api::Error) -> Self {
        match Self::from(err) {
            Self::Api { message, .. } | Self::Internal(message) => Self::DetailFetch {
                url: url.to_owned(),
                reason: message,
            },
            Self::NotFound { .. } => Self::DetailFetch {
                url: url.to_owned(),
                reason: "not found".into(),
            },
            other => other,
        }
    }

    /// Classify a failure of the load-bearing entity leg of a detail load.
    pub(crate) fn entity_fetch(identifier: &str, err: pokedex_api::Error) -> Self {
        if err.is_not_found() {
            return Self::NotFound {
                identifier: identifier.to_owned(),
            };
        }
        Self::from(err)
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<pokedex_api::Error> for CoreError {
    fn from(err: pokedex_api::Error) -> Self {
        match err {
            pokedex_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            pokedex_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            pokedex_api::Error::ClientBuild(message) => CoreError::Config { message },
            pokedex_api::Error::Status { status: 404, url, .. } => {
                CoreError::NotFound { identifier: url }
            }
            pokedex_api::Error::Status {
                status,
                url,
                message,
            } => CoreError::Api {
                message: format!("HTTP {status} from {url}: {message}"),
                status: Some(status),
            },
            pokedex_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
