//! Application configuration
//!
//! Parsed from the command line with environment fallbacks. `.env` is loaded
//! by the binary before parsing, so every option can live there.
//!
//! | Flag                  | Environment               | Default                                    |
//! |-----------------------|---------------------------|--------------------------------------------|
//! | `--bind`              | `CHESS_BIND_ADDR`         | `0.0.0.0:3000`                             |
//! | `--model`             | `GEMINI_MODEL`            | `gemini-1.5-flash`                         |
//! | `--api-base`          | `GEMINI_API_BASE`         | `https://generativelanguage.googleapis.com`|
//! | `--default-max-turns` | `CHESS_DEFAULT_MAX_TURNS` | `10`                                       |
//! | `--board-theme`       | `CHESS_BOARD_THEME`       | `classic`                                  |
//! | `--session-idle-minutes` | `CHESS_SESSION_IDLE_MINUTES` | `60`                                |
//!
//! The Gemini API key is NOT configured here: each user enters their own on
//! the page.

use super::error::{ConfigError, ConfigResult};
use crate::ai::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::rendering::BoardTheme;
use clap::Parser;
use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Allowed values for the per-game turn limit
pub const MAX_TURNS_RANGE: RangeInclusive<u32> = 1..=200;

/// Turn limit shown on a fresh battle page
pub const DEFAULT_MAX_TURNS: u32 = 10;

/// Minutes without a request before a browser session is dropped
pub const DEFAULT_SESSION_IDLE_MINUTES: u64 = 60;

/// Force a turn limit into [`MAX_TURNS_RANGE`]
pub fn clamp_max_turns(value: u32) -> u32 {
    value.clamp(*MAX_TURNS_RANGE.start(), *MAX_TURNS_RANGE.end())
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gemini-chess",
    version,
    about = "Watch Gemini play chess against itself, or ask it for a move"
)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "CHESS_BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Gemini model used for move selection
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the generative language API
    #[arg(long, env = "GEMINI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Initial value of the max-turns input
    #[arg(
        long,
        env = "CHESS_DEFAULT_MAX_TURNS",
        default_value_t = DEFAULT_MAX_TURNS,
        value_parser = clap::value_parser!(u32).range(1..=200)
    )]
    pub default_max_turns: u32,

    /// Color theme of the rendered boards
    #[arg(long, env = "CHESS_BOARD_THEME", value_enum, default_value_t = BoardTheme::Classic)]
    pub board_theme: BoardTheme,

    /// Idle minutes after which a browser session is discarded
    #[arg(
        long,
        env = "CHESS_SESSION_IDLE_MINUTES",
        default_value_t = DEFAULT_SESSION_IDLE_MINUTES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub session_idle_minutes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            default_max_turns: DEFAULT_MAX_TURNS,
            board_theme: BoardTheme::Classic,
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
        }
    }
}

impl AppConfig {
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes * 60)
    }

    /// Check values clap cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(ConfigError::InvalidApiBase {
                value: self.api_base.clone(),
            });
        }
        if !MAX_TURNS_RANGE.contains(&self.default_max_turns) {
            return Err(ConfigError::MaxTurnsOutOfRange {
                value: self.default_max_turns,
            });
        }
        if self.session_idle_minutes == 0 {
            return Err(ConfigError::ZeroSessionIdle);
        }
        Ok(())
    }
}
