//! Live game position and validated move application
//!
//! [`BoardState`] wraps the rules library's position together with the
//! repetition table. Both the battle loop and the suggest handlers play moves
//! only through [`BoardState::apply`], which parses, validates and applies in
//! one step and leaves the position untouched on any failure.

use super::error::{MoveError, MoveResult};
use super::moves::{AppliedMove, CoordinateMove};
use super::outcome::{GameOutcome, FIVEFOLD_REPETITION};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Position};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BoardState {
    position: Chess,
    /// Occurrence count per position key (placement, turn, castling, ep)
    repetitions: HashMap<String, u32>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::from_position(Chess::default())
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position
    pub fn from_position(position: Chess) -> Self {
        let mut state = Self {
            position,
            repetitions: HashMap::new(),
        };
        state.record_repetition();
        state
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Restore the standard starting arrangement
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Full FEN of the current position
    pub fn fen(&self) -> String {
        fen_of(&self.position)
    }

    /// Legal moves in coordinate notation
    pub fn legal_moves_uci(&self) -> Vec<String> {
        legal_moves_uci(&self.position)
    }

    /// Parse `candidate`, check it against the legal-move set and play it
    ///
    /// # Errors
    ///
    /// - [`MoveError::Parse`] when the string is not a coordinate move
    /// - [`MoveError::Illegal`] when it is not legal here; the error carries
    ///   the FEN and legal moves for diagnosis
    ///
    /// The position is only mutated on `Ok`.
    pub fn apply(&mut self, candidate: &str) -> MoveResult<AppliedMove> {
        let parsed: CoordinateMove = candidate.parse()?;

        let mv = match parsed.to_uci().to_move(&self.position) {
            Ok(mv) if self.position.is_legal(&mv) => mv,
            _ => {
                return Err(MoveError::Illegal {
                    input: candidate.to_string(),
                    fen: self.fen(),
                    legal_moves: self.legal_moves_uci(),
                })
            }
        };

        let side = self.position.turn();
        self.position.play_unchecked(&mv);
        self.record_repetition();

        debug!("[BOARD] {:?} played {} -> {}", side, parsed, self.fen());

        Ok(AppliedMove {
            side,
            notation: parsed.to_string(),
            from: parsed.from,
            to: parsed.to,
        })
    }

    /// Terminal status including fivefold repetition
    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::of_position(&self.position).or_else(|| {
            (self.repetition_count() >= FIVEFOLD_REPETITION)
                .then_some(GameOutcome::FivefoldRepetition)
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// How many times the current position has occurred
    pub fn repetition_count(&self) -> u32 {
        self.repetitions
            .get(&repetition_key(&self.position))
            .copied()
            .unwrap_or(0)
    }

    fn record_repetition(&mut self) {
        *self
            .repetitions
            .entry(repetition_key(&self.position))
            .or_insert(0) += 1;
    }
}

/// FEN string for any position
pub fn fen_of(position: &Chess) -> String {
    Fen::from_position(position.clone(), EnPassantMode::Legal).to_string()
}

/// Legal moves of a position in coordinate notation
pub fn legal_moves_uci(position: &Chess) -> Vec<String> {
    position
        .legal_moves()
        .iter()
        .map(|m| m.to_uci(CastlingMode::Standard).to_string())
        .collect()
}

/// FEN without the move clocks
fn repetition_key(position: &Chess) -> String {
    fen_of(position)
        .split_whitespace()
        .take(4)
        .collect::<Vec<_>>()
        .join(" ")
}
