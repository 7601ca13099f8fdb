//! Gemini vs Gemini battle loop
//!
//! The model plays both sides. One call to [`BattleSession::start`] runs a
//! whole game (or as much of it as the turn limit allows) and returns every
//! notice produced on the way.
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Running ──(terminal | turn limit | failure)──▶ Terminated
//!   ▲                                                               │
//!   └───────────────────────────reset───────────────────────────────┘
//! ```
//!
//! While running, each iteration asks the proposer for the side to move and
//! applies the answer through [`BoardState::apply`]. A proposer failure, an
//! unparsable answer or an illegal move stops the loop immediately; nothing
//! is retried. The position and the turn counter only change together, after
//! a move has been confirmed legal.

use super::board_state::BoardState;
use super::history::{HistoryEntry, MoveHistory};
use super::notice::{MoveSource, Notice};
use super::outcome::GameOutcome;
use crate::ai::{propose_move, TextGenerator};
use crate::core::config::{clamp_max_turns, DEFAULT_MAX_TURNS};
use tracing::{info, warn};

/// Phase of the battle loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    #[default]
    Idle,
    Running,
    Terminated,
}

/// Everything one run of the loop produced
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub notices: Vec<Notice>,
    pub outcome: GameOutcome,
    pub turns_played: u32,
}

/// Per-session state of the battle page
#[derive(Debug, Clone)]
pub struct BattleSession {
    board: BoardState,
    history: MoveHistory,
    turn_count: u32,
    max_turns: u32,
    phase: LoopPhase,
    outcome: Option<GameOutcome>,
}

impl Default for BattleSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}

impl BattleSession {
    pub fn new(max_turns: u32) -> Self {
        Self {
            board: BoardState::new(),
            history: MoveHistory::default(),
            turn_count: 0,
            max_turns: clamp_max_turns(max_turns),
            phase: LoopPhase::Idle,
            outcome: None,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Update the limit; values outside 1..=200 are clamped
    pub fn set_max_turns(&mut self, max_turns: u32) {
        self.max_turns = clamp_max_turns(max_turns);
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Outcome of the last finished run, if any
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Back to the starting position with empty history and zero turns
    pub fn reset(&mut self) -> Notice {
        self.clear();
        self.phase = LoopPhase::Idle;
        info!("[BATTLE] Game reset");
        Notice::success("Game reset!")
    }

    fn clear(&mut self) {
        self.board.reset();
        self.history.clear();
        self.turn_count = 0;
        self.outcome = None;
    }

    /// Play a fresh game to completion
    ///
    /// Always starts from the initial position, whatever state the previous
    /// run left behind.
    pub async fn start(
        &mut self,
        generator: &dyn TextGenerator,
        credential: &str,
    ) -> BattleReport {
        self.clear();
        self.phase = LoopPhase::Running;

        let mut notices = vec![Notice::success("Game started!")];
        info!("[BATTLE] Game started, max turns {}", self.max_turns);

        let mut interrupted = false;
        while !self.board.is_terminal() && self.turn_count < self.max_turns {
            let side = self.board.turn();

            let candidate =
                match propose_move(generator, credential, self.board.position(), Some(side)).await
                {
                    Ok(candidate) => candidate,
                    Err(e) => {
                        warn!("[BATTLE] Proposer failed on turn {}: {}", self.turn_count + 1, e);
                        notices.push(Notice::proposer_failure(&e));
                        interrupted = true;
                        break;
                    }
                };

            match self.board.apply(&candidate) {
                Ok(applied) => {
                    self.history
                        .add_move(HistoryEntry::new(&applied, self.board.position().clone()));
                    self.turn_count += 1;
                    info!(
                        "[BATTLE] Turn {} - {:?} played {}",
                        self.turn_count, applied.side, applied.notation
                    );
                }
                Err(e) => {
                    warn!("[BATTLE] Rejected move from proposer: {}", e);
                    notices.push(Notice::rejected_move(&e, MoveSource::Proposer));
                    interrupted = true;
                    break;
                }
            }
        }

        self.phase = LoopPhase::Terminated;
        let outcome = self.board.outcome().unwrap_or(if interrupted {
            GameOutcome::Interrupted
        } else {
            GameOutcome::TurnLimit
        });
        self.outcome = Some(outcome);
        notices.push(outcome.notice());

        info!(
            "[BATTLE] Finished after {} turns: {:?}",
            self.turn_count, outcome
        );

        BattleReport {
            notices,
            outcome,
            turns_played: self.turn_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ScriptedGenerator;
    use crate::game::NoticeLevel;
    use shakmaty::{Color, Position, Role, Square};

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_new_session_is_idle() {
        //! Fresh session sits at the start with no turns
        let session = BattleSession::default();
        assert_eq!(session.phase(), LoopPhase::Idle);
        assert_eq!(session.turn_count(), 0);
        assert_eq!(session.max_turns(), DEFAULT_MAX_TURNS);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_max_turns_clamped() {
        //! Limit stays within 1..=200
        let mut session = BattleSession::new(0);
        assert_eq!(session.max_turns(), 1);
        session.set_max_turns(500);
        assert_eq!(session.max_turns(), 200);
    }

    #[tokio::test]
    async fn test_single_move_then_turn_limit() {
        //! e2e4 with a one-turn limit: pawn moves, Black to move, one entry
        let generator = ScriptedGenerator::new(["e2e4"]);
        let mut session = BattleSession::new(1);

        let report = session.start(&generator, "key").await;

        assert_eq!(report.outcome, GameOutcome::TurnLimit);
        assert_eq!(report.turns_played, 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.board().turn(), Color::Black);
        assert_eq!(
            session.board().position().board().role_at(Square::E4),
            Some(Role::Pawn)
        );
        assert_eq!(session.phase(), LoopPhase::Terminated);
        assert_eq!(report.notices.first().unwrap().message, "Game started!");
        assert_eq!(report.notices.last().unwrap().message, "🔚 Max turns reached.");
    }

    #[tokio::test]
    async fn test_parse_failure_halts() {
        //! z9z9 is reported and the board is untouched
        let generator = ScriptedGenerator::new(["z9z9", "e2e4"]);
        let mut session = BattleSession::new(10);

        let report = session.start(&generator, "key").await;

        assert_eq!(report.outcome, GameOutcome::Interrupted);
        assert_eq!(session.turn_count(), 0);
        assert_eq!(session.board().fen(), START_FEN);
        assert_eq!(generator.calls(), 1);
        assert!(report
            .notices
            .iter()
            .any(|n| n.level == NoticeLevel::Error && n.message.contains("z9z9")));
    }

    #[tokio::test]
    async fn test_illegal_move_halts_with_legal_moves() {
        //! e2e5 from the start is a warning listing legal moves
        let generator = ScriptedGenerator::new(["e2e5"]);
        let mut session = BattleSession::new(10);

        let report = session.start(&generator, "key").await;

        let warning = report
            .notices
            .iter()
            .find(|n| n.level == NoticeLevel::Warning)
            .expect("illegal move warning");
        assert_eq!(warning.message, "❌ Gemini suggested illegal move: e2e5");
        assert!(warning.details.iter().any(|d| d.contains("e2e4")));
        assert_eq!(session.board().fen(), START_FEN);
        assert!(session.history().is_empty());
        assert_eq!(report.outcome, GameOutcome::Interrupted);
    }

    #[tokio::test]
    async fn test_proposer_failure_halts() {
        //! Failure mid-game keeps the moves made so far
        let generator = ScriptedGenerator::new(["e2e4"]).then_fail("rate limited");
        let mut session = BattleSession::new(10);

        let report = session.start(&generator, "key").await;

        assert_eq!(report.turns_played, 1);
        assert_eq!(report.outcome, GameOutcome::Interrupted);
        assert!(report
            .notices
            .iter()
            .any(|n| n.level == NoticeLevel::Error && n.message.contains("rate limited")));
    }

    #[tokio::test]
    async fn test_missing_credential_halts_before_call() {
        //! Empty credential never reaches the generator
        let generator = ScriptedGenerator::new(["e2e4"]);
        let mut session = BattleSession::default();

        let report = session.start(&generator, "").await;

        assert_eq!(generator.calls(), 0);
        assert_eq!(report.outcome, GameOutcome::Interrupted);
    }

    #[tokio::test]
    async fn test_turn_limit_stops_calls() {
        //! Counter at maximum: proposer is not asked again
        let generator = ScriptedGenerator::new(["e2e4", "e7e5", "g1f3", "b8c6"]);
        let mut session = BattleSession::new(2);

        let report = session.start(&generator, "key").await;

        assert_eq!(generator.calls(), 2);
        assert_eq!(session.turn_count(), 2);
        assert_eq!(session.history().len(), 2);
        assert_eq!(report.outcome, GameOutcome::TurnLimit);
    }

    #[tokio::test]
    async fn test_checkmate_reports_winner() {
        //! Fool's mate ends the loop early with Black as winner
        let generator = ScriptedGenerator::new(["f2f3", "e7e5", "g2g4", "d8h4", "e2e4"]);
        let mut session = BattleSession::new(10);

        let report = session.start(&generator, "key").await;

        assert_eq!(
            report.outcome,
            GameOutcome::Checkmate {
                winner: Color::Black
            }
        );
        assert_eq!(generator.calls(), 4);
        assert_eq!(report.turns_played, 4);
        let last = report.notices.last().unwrap();
        assert_eq!(last.level, NoticeLevel::Success);
        assert_eq!(last.message, "🏁 Checkmate! Black wins.");
    }

    #[tokio::test]
    async fn test_history_roles_alternate() {
        //! Prompts and history alternate white/black
        let generator = ScriptedGenerator::new(["d2d4", "d7d5"]);
        let mut session = BattleSession::new(2);
        session.start(&generator, "key").await;

        let sides: Vec<_> = session.history().iter().map(|e| e.side_label()).collect();
        assert_eq!(sides, vec!["White", "Black"]);
        let prompts = generator.prompts();
        assert!(prompts[0].contains("playing as white"));
        assert!(prompts[1].contains("playing as black"));
    }

    #[tokio::test]
    async fn test_restart_and_reset_clear_state() {
        //! Start always begins fresh; reset returns to Idle at the start position
        let generator = ScriptedGenerator::new(["e2e4", "c2c4"]);
        let mut session = BattleSession::new(1);

        session.start(&generator, "key").await;
        let report = session.start(&generator, "key").await;
        assert_eq!(report.turns_played, 1);
        assert_eq!(session.history().notations(), vec!["c2c4"]);

        let notice = session.reset();
        assert_eq!(notice.message, "Game reset!");
        assert_eq!(session.phase(), LoopPhase::Idle);
        assert_eq!(session.turn_count(), 0);
        assert!(session.history().is_empty());
        assert!(session.outcome().is_none());
        assert_eq!(session.board().fen(), START_FEN);
    }
}
