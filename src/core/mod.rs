//! Application-wide configuration and startup errors

pub mod config;
pub mod error;

pub use config::{AppConfig, DEFAULT_MAX_TURNS, DEFAULT_SESSION_IDLE_MINUTES, MAX_TURNS_RANGE};
pub use error::{ConfigError, ConfigResult};
