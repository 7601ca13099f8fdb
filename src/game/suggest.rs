//! Human vs board with on-demand Gemini suggestions
//!
//! Three independent handlers against one shared position: play a move typed
//! by the user, ask the proposer to play one move for the side to move, and
//! reset. Handlers never fail outward; every problem becomes a notice.

use super::board_state::BoardState;
use super::notice::{MoveSource, Notice};
use super::outcome::GameOutcome;
use crate::ai::{propose_move, TextGenerator};
use shakmaty::Square;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct SuggestSession {
    board: BoardState,
    last_move: Option<(Square, Square)>,
}

impl SuggestSession {
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// From/to squares of the most recent move, for the board arrow
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// Terminal status of the shared position
    pub fn status(&self) -> Option<GameOutcome> {
        self.board.outcome()
    }

    /// Play a user-entered move
    ///
    /// Blank input is ignored. A successful move produces no notice; parse
    /// failures and illegal moves produce one and leave the board as it was.
    pub fn submit_move(&mut self, input: &str) -> Option<Notice> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        match self.board.apply(input) {
            Ok(applied) => {
                info!("[SUGGEST] User played {}", applied.notation);
                self.last_move = Some(applied.highlight());
                None
            }
            Err(e) => {
                warn!("[SUGGEST] Rejected user move: {}", e);
                Some(Notice::rejected_move(&e, MoveSource::User))
            }
        }
    }

    /// Ask the proposer for one move and play it
    pub async fn ask_proposer(&mut self, generator: &dyn TextGenerator, credential: &str) -> Notice {
        let candidate = match propose_move(generator, credential, self.board.position(), None).await {
            Ok(candidate) => candidate,
            Err(e) => {
                warn!("[SUGGEST] Proposer failed: {}", e);
                return Notice::proposer_failure(&e);
            }
        };

        match self.board.apply(&candidate) {
            Ok(applied) => {
                info!("[SUGGEST] Gemini played {}", applied.notation);
                self.last_move = Some(applied.highlight());
                Notice::success(format!("Gemini suggests move: {}", applied.notation))
            }
            Err(e) => {
                warn!("[SUGGEST] Rejected proposer move: {}", e);
                Notice::rejected_move(&e, MoveSource::Proposer)
            }
        }
    }

    /// Restore the starting position
    pub fn reset(&mut self) -> Notice {
        self.board.reset();
        self.last_move = None;
        info!("[SUGGEST] Game reset");
        Notice::success("Game reset!")
    }
}
