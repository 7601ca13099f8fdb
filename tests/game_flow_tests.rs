//! Game Flow Integration Tests
//!
//! Full games through the library API:
//! - Model-vs-model games ending in mate or repetition
//! - Mixed user and model play on the suggest board
//! - Draw detection from arbitrary positions

use gemini_chess::ai::ScriptedGenerator;
use gemini_chess::game::{
    BattleSession, BoardState, GameOutcome, LoopPhase, NoticeLevel, SuggestSession,
};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color};

const KEY: &str = "test-key";

/// Helper to build a board from a FEN string
fn board_from_fen(fen: &str) -> BoardState {
    let position: Chess = fen
        .parse::<Fen>()
        .expect("valid FEN")
        .into_position(CastlingMode::Standard)
        .expect("legal position");
    BoardState::from_position(position)
}

// ============================================================================
// Battle Games
// ============================================================================

#[tokio::test]
async fn test_scholars_mate_battle() {
    let generator = ScriptedGenerator::new([
        "e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7", "a7a6",
    ]);
    let mut battle = BattleSession::new(20);

    let report = battle.start(&generator, KEY).await;

    assert_eq!(report.turns_played, 7);
    assert_eq!(
        report.outcome,
        GameOutcome::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(generator.calls(), 7, "No call once the game is over");
    assert_eq!(battle.phase(), LoopPhase::Terminated);

    let last = report.notices.last().expect("outcome notice");
    assert_eq!(last.level, NoticeLevel::Success);
    assert!(last.message.contains("White wins"));
}

#[tokio::test]
async fn test_prompts_follow_side_to_move() {
    let generator = ScriptedGenerator::new(["e2e4", "c7c5"]);
    let mut battle = BattleSession::new(2);

    battle.start(&generator, KEY).await;

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("playing as white."));
    assert!(prompts[0].contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    assert!(prompts[1].contains("playing as black."));
    assert!(prompts[1].contains("e7e5"), "Black's legal moves are listed");
    assert_eq!(battle.history().notations(), vec!["e2e4", "c7c5"]);
}

#[tokio::test]
async fn test_knight_shuffle_ends_in_fivefold_repetition() {
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    let generator = ScriptedGenerator::new(shuffle.iter().copied().cycle().take(40));
    let mut battle = BattleSession::new(50);

    let report = battle.start(&generator, KEY).await;

    assert_eq!(report.outcome, GameOutcome::FivefoldRepetition);
    assert_eq!(report.turns_played, 16);
    assert_eq!(battle.board().repetition_count(), 5);
}

#[tokio::test]
async fn test_model_reply_with_extra_text() {
    let generator = ScriptedGenerator::new(["E2E4 is a classic opening", "e7e5\nbecause"]);
    let mut battle = BattleSession::new(2);

    let report = battle.start(&generator, KEY).await;

    assert_eq!(report.outcome, GameOutcome::TurnLimit);
    assert_eq!(battle.history().notations(), vec!["e2e4", "e7e5"]);
}

// ============================================================================
// Suggest Board
// ============================================================================

#[tokio::test]
async fn test_user_and_model_alternate() {
    let generator = ScriptedGenerator::new(["e7e5", "b8c6"]);
    let mut session = SuggestSession::default();

    assert!(session.submit_move("e2e4").is_none());
    let notice = session.ask_proposer(&generator, KEY).await;
    assert_eq!(notice.message, "Gemini suggests move: e7e5");

    assert!(session.submit_move("  g1f3  ").is_none());
    session.ask_proposer(&generator, KEY).await;

    assert_eq!(session.board().turn(), Color::White);
    assert!(session
        .board()
        .fen()
        .starts_with("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w"));
    assert!(session.status().is_none());
}

#[tokio::test]
async fn test_rejected_moves_leave_board_alone() {
    let generator = ScriptedGenerator::new(["e2e4"]);
    let mut session = SuggestSession::default();
    session.submit_move("d2d4");
    let before = session.board().fen();

    let notice = session.submit_move("d4d6").expect("illegal move notice");
    assert_eq!(notice.level, NoticeLevel::Warning);

    // Model answers with a White move while Black is to play
    let notice = session.ask_proposer(&generator, KEY).await;
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(notice.message.contains("e2e4"));

    assert_eq!(session.board().fen(), before);
}

// ============================================================================
// Draw Detection
// ============================================================================

#[test]
fn test_capture_leaves_insufficient_material() {
    let mut board = board_from_fen("k7/8/8/8/8/8/1r6/K7 w - - 0 1");
    assert!(board.outcome().is_none());

    board.apply("a1b2").expect("king takes rook");

    assert_eq!(board.outcome(), Some(GameOutcome::InsufficientMaterial));
}

#[test]
fn test_seventy_five_move_rule() {
    let mut board = board_from_fen("k7/8/8/8/8/8/8/KR6 w - - 149 100");
    assert!(board.outcome().is_none());

    board.apply("a1a2").expect("quiet king move");

    let outcome = board.outcome();
    assert_eq!(outcome, Some(GameOutcome::SeventyFiveMoves));
    assert!(outcome.is_some_and(|o| o.is_draw()));
}

#[test]
fn test_promotion_in_play() {
    let mut board = board_from_fen("k7/4P3/8/8/8/8/8/K7 w - - 0 1");

    assert!(board.apply("e7e8").is_err(), "Promotion piece is required");
    let applied = board.apply("e7e8q").expect("promotion to queen");

    assert_eq!(applied.notation, "e7e8q");
    assert!(board.fen().starts_with("k3Q3/"));
}
