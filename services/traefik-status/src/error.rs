//! Error types for the traefik-status service

/// Errors that can occur while starting or running the service
#[derive(Debug, thiserror::Error)]
pub enum TraefikStatusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Why a single fetch cycle against the Traefik API failed.
///
/// None of these are fatal. The refresh controller folds them into the
/// `error` field of the snapshot it returns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Traefik {0} is not configured")]
    ConfigMissing(&'static str),

    #[error("Traefik API rejected the request with HTTP {status_code}")]
    UpstreamRejected { status_code: u16 },

    #[error("Failed to parse Traefik API response: {0}")]
    ParseFailure(String),

    #[error("Failed to reach Traefik API: {0}")]
    NetworkFailure(String),
}

/// Result type alias for traefik-status operations
pub type Result<T> = std::result::Result<T, TraefikStatusError>;
