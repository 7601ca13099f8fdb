//! Move history for the battle page
//!
//! Each successfully applied move appends one [`HistoryEntry`]: which side
//! moved, a snapshot of the position after the move, and the squares to
//! highlight. Entries are never modified once appended; the page renders one
//! board per entry.

use super::moves::{side_name, AppliedMove};
use shakmaty::{Chess, Color, Square};

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub side: Color,
    /// Position after the move
    pub snapshot: Chess,
    /// From/to squares of the move, drawn as an arrow
    pub highlight: (Square, Square),
    pub notation: String,
}

impl HistoryEntry {
    pub fn new(applied: &AppliedMove, snapshot: Chess) -> Self {
        Self {
            side: applied.side,
            snapshot,
            highlight: applied.highlight(),
            notation: applied.notation.clone(),
        }
    }

    /// "White" / "Black"
    pub fn side_label(&self) -> &'static str {
        side_name(self.side)
    }
}

/// Chronological list of moves played in the current battle
///
/// Index 0 is White's first move, index 1 Black's reply, and so on.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    pub fn add_move(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn last_move(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Moves in coordinate notation, oldest first
    pub fn notations(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.notation.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BoardState;

    #[test]
    fn test_history_default_empty() {
        //! New history has no moves
        let history = MoveHistory::default();
        assert!(history.is_empty());
        assert!(history.last_move().is_none());
    }

    #[test]
    fn test_add_and_clear() {
        //! Entries keep order and clear empties the list
        let mut board = BoardState::new();
        let mut history = MoveHistory::default();

        for mv in ["e2e4", "c7c5"] {
            let applied = board.apply(mv).unwrap();
            history.add_move(HistoryEntry::new(&applied, board.position().clone()));
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.notations(), vec!["e2e4", "c7c5"]);
        let last = history.last_move().unwrap();
        assert_eq!(last.side_label(), "Black");
        assert_eq!(last.highlight, (Square::C7, Square::C5));

        history.clear();
        assert!(history.is_empty());
    }
}
