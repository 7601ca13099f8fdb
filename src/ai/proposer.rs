//! Move proposer
//!
//! Turns a position into a prompt, sends it to a [`TextGenerator`] and takes
//! the first whitespace-delimited token of the answer as the candidate move.
//! The candidate is NOT validated here; callers pass it through
//! [`crate::game::BoardState::apply`].

use super::error::{ProposerError, ProposerResult};
use super::prompt::build_move_prompt;
use crate::game::board_state::{fen_of, legal_moves_uci};
use crate::game::moves::side_role;
use async_trait::async_trait;
use shakmaty::{Chess, Color};
use tracing::{info, warn};

/// Prompt-in / text-out completion service
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete `prompt` using `credential` for authentication
    async fn generate(&self, credential: &str, prompt: &str) -> ProposerResult<String>;
}

/// Ask the generator for a move in `position`
///
/// `role` names the side the model plays; `None` asks for a suggestion
/// without a persona side. Returns the lowercased first token of the answer.
pub async fn propose_move(
    generator: &dyn TextGenerator,
    credential: &str,
    position: &Chess,
    role: Option<Color>,
) -> ProposerResult<String> {
    if credential.trim().is_empty() {
        return Err(ProposerError::MissingCredential);
    }

    let legal_moves = legal_moves_uci(position);
    let prompt = build_move_prompt(&fen_of(position), &legal_moves, role.map(side_role));

    let text = generator.generate(credential, &prompt).await.map_err(|e| {
        warn!("[PROPOSER] Generator failed: {}", e);
        e
    })?;

    let candidate = first_token(&text).ok_or(ProposerError::EmptyResponse)?;
    info!("[PROPOSER] Candidate move: {}", candidate);
    Ok(candidate)
}

/// First whitespace-delimited token, lowercased
pub fn first_token(text: &str) -> Option<String> {
    text.split_whitespace().next().map(str::to_lowercase)
}
