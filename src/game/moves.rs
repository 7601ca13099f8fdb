//! Coordinate move notation
//!
//! The only move wire format in the application: from-square, to-square and
//! an optional promotion letter, e.g. `e2e4` or `e7e8q`. Both user input and
//! the proposer's answer go through [`CoordinateMove::from_str`].

use super::error::{MoveError, MoveResult};
use shakmaty::uci::UciMove;
use shakmaty::{Color, Role, Square};
use std::fmt;
use std::str::FromStr;

/// A structurally valid move in coordinate notation
///
/// Parsing only checks the shape of the string and the squares it names.
/// Whether the move can actually be played is decided against a position by
/// [`crate::game::BoardState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl CoordinateMove {
    /// UCI form handed to the rules library
    pub fn to_uci(self) -> UciMove {
        UciMove::Normal {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl FromStr for CoordinateMove {
    type Err = MoveError;

    fn from_str(s: &str) -> MoveResult<Self> {
        let reject = |reason: &str| MoveError::Parse {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        if !(4..=5).contains(&s.len()) {
            return Err(reject("expected 4 or 5 characters"));
        }

        match UciMove::from_ascii(s.as_bytes()) {
            Ok(UciMove::Normal {
                from,
                to,
                promotion,
            }) => {
                if from == to {
                    return Err(reject("from and to squares are the same"));
                }
                Ok(CoordinateMove {
                    from,
                    to,
                    promotion,
                })
            }
            Ok(_) => Err(reject("not a from/to coordinate move")),
            Err(e) => Err(reject(&e.to_string())),
        }
    }
}

impl fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

/// A move that passed validation and was played on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    /// Side that made the move
    pub side: Color,
    /// Normalised coordinate notation
    pub notation: String,
    pub from: Square,
    pub to: Square,
}

impl AppliedMove {
    /// Squares for the last-move arrow
    pub fn highlight(&self) -> (Square, Square) {
        (self.from, self.to)
    }
}

/// Display name of a side, as used in notices and the move history
pub fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// Lowercase role label used in the proposer prompt
pub fn side_role(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}
