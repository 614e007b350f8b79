use thiserror::Error;

/// Errors from repository operations (used by trait definitions in supportdesk-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors from a single completion request.
///
/// Every variant is recoverable from the customer's point of view: the
/// support service answers with the fallback apology and escalates.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("response contained no candidate text")]
    EmptyCandidate,
}

/// Errors raised while loading startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("invalid configuration value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Errors raised while loading the FAQ knowledge base.
#[derive(Debug, Error)]
pub enum FaqError {
    #[error("failed to read FAQ file: {0}")]
    Io(String),

    #[error("failed to parse FAQ file: {0}")]
    Parse(String),
}
