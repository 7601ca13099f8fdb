//! HTTP shell around the two pages
//!
//! - [`api`]: routes, handlers and shared state
//! - [`session`]: cookie-keyed in-memory sessions
//! - [`pages`]: server-rendered HTML

pub mod api;
pub mod pages;
pub mod session;

pub use api::{router, AppState};
pub use session::{Session, SessionStore, SESSION_COOKIE};
