//! Error types for core module
//!
//! Startup configuration problems. Runtime problems during play never reach
//! this level; they become notices on the page.

use thiserror::Error;

/// Errors in the application configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Model name is blank
    #[error("Gemini model name must not be empty")]
    EmptyModel,

    /// API base is not an HTTP(S) URL
    #[error("Gemini API base must be an http(s) URL, got {value:?}")]
    InvalidApiBase { value: String },

    /// Default turn limit outside 1..=200
    #[error("Default max turns {value} is outside 1..=200")]
    MaxTurnsOutOfRange { value: u32 },

    /// Sessions would expire immediately
    #[error("Session idle timeout must be at least one minute")]
    ZeroSessionIdle,
}

/// Result type alias for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;
