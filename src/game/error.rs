//! Error types for game module
//!
//! Covers the two ways a candidate move string can be rejected before it
//! reaches the board: it does not decode into a coordinate move at all, or it
//! decodes but is not legal in the current position.

/// Errors raised while validating a candidate move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// String is not a structurally valid coordinate move
    #[error("Failed to parse move: {input}, error: {reason}")]
    Parse { input: String, reason: String },

    /// Move decodes but is not in the position's legal-move set
    #[error("Illegal move: {input}")]
    Illegal {
        input: String,
        fen: String,
        legal_moves: Vec<String>,
    },
}

impl MoveError {
    /// The offending candidate string
    pub fn input(&self) -> &str {
        match self {
            MoveError::Parse { input, .. } | MoveError::Illegal { input, .. } => input,
        }
    }

    pub fn is_illegal(&self) -> bool {
        matches!(self, MoveError::Illegal { .. })
    }
}

/// Result type alias for move validation
pub type MoveResult<T> = Result<T, MoveError>;
