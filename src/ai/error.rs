//! Error types for the move proposer

/// Failure of a single proposer call
///
/// Never retried: the caller reports it and stops.
#[derive(Debug, thiserror::Error)]
pub enum ProposerError {
    /// No credential entered yet
    #[error("no Gemini API key configured")]
    MissingCredential,

    /// Transport-level failure talking to the service
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Gemini API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Prompt was refused by the service's safety filters
    #[error("prompt blocked: {reason}")]
    Blocked { reason: String },

    /// Response contained no text to take a move from
    #[error("empty response from model")]
    EmptyResponse,

    /// Any other generator failure
    #[error("{0}")]
    Service(String),
}

/// Result type alias for proposer operations
pub type ProposerResult<T> = Result<T, ProposerError>;
