//! Chess game orchestration
//!
//! - [`board_state`]: live position plus the one validated move routine
//! - [`moves`]: coordinate move notation
//! - [`battle`]: model-vs-model loop
//! - [`suggest`]: user moves plus on-demand model moves
//! - [`outcome`], [`history`], [`notice`]: results, move log, banners

pub mod battle;
pub mod board_state;
pub mod error;
pub mod history;
pub mod moves;
pub mod notice;
pub mod outcome;
pub mod suggest;

pub use battle::{BattleReport, BattleSession, LoopPhase};
pub use board_state::BoardState;
pub use error::{MoveError, MoveResult};
pub use history::{HistoryEntry, MoveHistory};
pub use moves::{AppliedMove, CoordinateMove};
pub use notice::{MoveSource, Notice, NoticeLevel};
pub use outcome::GameOutcome;
pub use suggest::SuggestSession;
