//! In-memory per-browser session state
//!
//! Each browser gets a UUID in the `chess_session` cookie. The store maps it
//! to that browser's [`Session`]: the credential it entered plus the state of
//! both pages. A session that sees no request for the idle timeout is dropped
//! the next time a new session is created; its browser then starts over.
//!
//! The map itself sits behind a short-lived sync lock; each session has its
//! own async lock that a handler holds for the whole interaction, so two
//! requests from one browser run one after the other while different
//! browsers never wait on each other.

use crate::game::{BattleSession, SuggestSession};
use axum::http::{header, HeaderMap};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "chess_session";

/// Idle time after which a session is discarded
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// State of one browser session
pub struct Session {
    /// Gemini API key exactly as entered; never logged
    pub credential: String,
    pub battle: BattleSession,
    pub suggest: SuggestSession,
}

impl Session {
    pub fn new(default_max_turns: u32) -> Self {
        Self {
            credential: String::new(),
            battle: BattleSession::new(default_max_turns),
            suggest: SuggestSession::default(),
        }
    }

    pub fn has_credential(&self) -> bool {
        !self.credential.trim().is_empty()
    }
}

pub type SharedSession = Arc<AsyncMutex<Session>>;

struct StoredSession {
    session: SharedSession,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, StoredSession>>>,
    default_max_turns: u32,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(default_max_turns: u32) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            default_max_turns,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Session named by the request's cookie, or a fresh one
    ///
    /// Unknown, expired or malformed ids (e.g. after a restart) get a new
    /// session under a new id. Creating a session first drops every session
    /// idle for at least the timeout.
    pub fn resolve(&self, headers: &HeaderMap) -> (Uuid, SharedSession) {
        let now = Instant::now();
        let mut sessions = self.sessions.lock();

        if let Some(id) = session_id(headers) {
            if let Some(stored) = sessions.get_mut(&id) {
                if now.duration_since(stored.last_seen) < self.idle_timeout {
                    stored.last_seen = now;
                    return (id, Arc::clone(&stored.session));
                }
            }
        }

        let before = sessions.len();
        sessions.retain(|_, stored| now.duration_since(stored.last_seen) < self.idle_timeout);
        if sessions.len() < before {
            debug!("[SESSION] Evicted {} idle sessions", before - sessions.len());
        }

        let id = Uuid::new_v4();
        let session = Arc::new(AsyncMutex::new(Session::new(self.default_max_turns)));
        sessions.insert(
            id,
            StoredSession {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );
        info!("[SESSION] Created session {} ({} active)", id, sessions.len());
        (id, session)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

/// Session id from the `Cookie` header(s), if present and well-formed
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value for a session id
pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
