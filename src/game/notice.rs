//! User-visible banners
//!
//! Every interaction produces zero or more notices that the page renders as
//! success/info/warning/error banners. Notices carry optional detail lines
//! (FEN, legal moves) shown underneath the banner text.

use super::error::MoveError;
use crate::ai::ProposerError;
use serde::Serialize;

/// Banner severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    /// CSS class used by the page templates
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Info => "notice-info",
            NoticeLevel::Warning => "notice-warning",
            NoticeLevel::Error => "notice-error",
        }
    }
}

/// Who produced a rejected move string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    User,
    Proposer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub details: Vec<String>,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn with_detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    /// Banner for a move string that failed parsing or legality
    ///
    /// Parse failures are errors naming the string; illegal moves are
    /// warnings that list the FEN and the legal moves for diagnosis.
    pub fn rejected_move(err: &MoveError, source: MoveSource) -> Self {
        match (err, source) {
            (MoveError::Parse { input, reason }, MoveSource::User) => {
                Notice::error(format!("❌ Failed to parse move: {input}, error: {reason}"))
            }
            (MoveError::Parse { input, reason }, MoveSource::Proposer) => Notice::error(format!(
                "❌ Failed to parse Gemini's move: {input}, error: {reason}"
            )),
            (
                MoveError::Illegal {
                    input,
                    fen,
                    legal_moves,
                },
                source,
            ) => {
                let message = match source {
                    MoveSource::User => format!("❌ Illegal move: {input}"),
                    MoveSource::Proposer => format!("❌ Gemini suggested illegal move: {input}"),
                };
                Notice::warning(message)
                    .with_detail(format!("FEN: {fen}"))
                    .with_detail(format!("Legal Moves: [{}]", legal_moves.join(", ")))
            }
        }
    }

    /// Banner for a failed call to the text-generation service
    pub fn proposer_failure(err: &ProposerError) -> Self {
        Notice::error(format!("error: {err}"))
    }
}
