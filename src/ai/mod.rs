//! Move selection through a text-generation model
//!
//! - [`proposer`]: prompt → model → first token as candidate move
//! - [`gemini`]: REST client for Google's Gemini API
//! - [`scripted`]: canned-answer generator for tests and offline runs

pub mod error;
pub mod gemini;
pub mod prompt;
pub mod proposer;
pub mod scripted;

pub use error::{ProposerError, ProposerResult};
pub use gemini::GeminiClient;
pub use proposer::{first_token, propose_move, TextGenerator};
pub use scripted::ScriptedGenerator;
