//! Game outcome classification
//!
//! Decides how a game ended once the battle loop stops, or whether a position
//! reached in the suggest page is terminal.
//!
//! # Terminal positions
//!
//! - **Checkmate**: side to move is in check with no legal moves; the winner
//!   is the side that is NOT to move
//! - **Stalemate**: side to move has no legal moves and is not in check
//! - **InsufficientMaterial**: neither side can deliver mate
//! - **SeventyFiveMoves**: 150 half-moves without a capture or pawn move
//! - **FivefoldRepetition**: the same position occurred five times
//!
//! # Non-terminal endings
//!
//! The battle loop can also stop on a position that is still playable:
//!
//! - **TurnLimit**: the configured maximum number of turns was played
//! - **Interrupted**: the proposer failed or answered with a bad move

use super::moves::side_name;
use super::notice::Notice;
use shakmaty::{Chess, Color, Position};

/// Half-move clock value at which the game is drawn automatically
pub const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;

/// Occurrences of one position that end the game
pub const FIVEFOLD_REPETITION: u32 = 5;

/// How a game, or one run of the battle loop, ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Side to move is mated
    Checkmate { winner: Color },

    /// Side to move has no legal moves but is not in check
    Stalemate,

    /// Neither side has mating material (e.g. K vs K, K+B vs K)
    InsufficientMaterial,

    /// Seventy-five moves by each side without a capture or pawn move
    SeventyFiveMoves,

    /// Same position reached for the fifth time
    FivefoldRepetition,

    /// Loop stopped because the turn counter reached its maximum
    TurnLimit,

    /// Loop stopped on a proposer, parse or legality failure
    Interrupted,
}

impl GameOutcome {
    /// Terminal status of a position, ignoring repetition
    ///
    /// Checked in the order checkmate, stalemate, insufficient material,
    /// seventy-five-move rule. Returns `None` while the game can go on.
    pub fn of_position(position: &Chess) -> Option<GameOutcome> {
        if position.is_checkmate() {
            Some(GameOutcome::Checkmate {
                winner: !position.turn(),
            })
        } else if position.is_stalemate() {
            Some(GameOutcome::Stalemate)
        } else if position.is_insufficient_material() {
            Some(GameOutcome::InsufficientMaterial)
        } else if position.halfmoves() >= SEVENTY_FIVE_MOVE_HALFMOVES {
            Some(GameOutcome::SeventyFiveMoves)
        } else {
            None
        }
    }

    /// Whether the position itself ended the game
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::TurnLimit | GameOutcome::Interrupted)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            GameOutcome::Stalemate
                | GameOutcome::InsufficientMaterial
                | GameOutcome::SeventyFiveMoves
                | GameOutcome::FivefoldRepetition
        )
    }

    /// Human-readable description shown at the end of a game
    pub fn message(&self) -> String {
        match self {
            GameOutcome::Checkmate { winner } => {
                format!("🏁 Checkmate! {} wins.", side_name(*winner))
            }
            GameOutcome::Stalemate => "⚖️ Game ends in stalemate.".to_string(),
            GameOutcome::InsufficientMaterial => {
                "⚖️ Draw due to insufficient material.".to_string()
            }
            GameOutcome::SeventyFiveMoves => "⚖️ Draw by the seventy-five-move rule.".to_string(),
            GameOutcome::FivefoldRepetition => "⚖️ Draw by fivefold repetition.".to_string(),
            GameOutcome::TurnLimit => "🔚 Max turns reached.".to_string(),
            GameOutcome::Interrupted => "🔚 Game stopped before a result was reached.".to_string(),
        }
    }

    /// Banner for the outcome: checkmate is a success, everything else info
    pub fn notice(&self) -> Notice {
        match self {
            GameOutcome::Checkmate { .. } => Notice::success(self.message()),
            _ => Notice::info(self.message()),
        }
    }
}
