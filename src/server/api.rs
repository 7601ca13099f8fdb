use super::pages;
use super::session::{session_cookie, SessionStore};
use crate::ai::TextGenerator;
use crate::game::Notice;
use crate::rendering::RenderOptions;
use axum::{
    extract::{Form, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    // Shared by every session; the credential comes from the session
    pub generator: Arc<dyn TextGenerator>,
    pub board: RenderOptions,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, default_max_turns: u32) -> Self {
        Self {
            sessions: SessionStore::new(default_max_turns),
            generator,
            board: RenderOptions::default(),
        }
    }

    pub fn with_render_options(mut self, board: RenderOptions) -> Self {
        self.board = board;
        self
    }

    pub fn with_session_idle_timeout(mut self, timeout: Duration) -> Self {
        self.sessions = self.sessions.with_idle_timeout(timeout);
        self
    }
}

#[derive(Deserialize)]
pub struct StartForm {
    #[serde(default)]
    pub max_turns: String,
}

#[derive(Deserialize)]
pub struct MoveForm {
    #[serde(default)]
    pub mv: String,
}

#[derive(Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub return_to: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/battle", get(battle_view))
        .route("/battle/start", post(battle_start))
        .route("/battle/reset", post(battle_reset))
        .route("/suggest", get(suggest_view))
        .route("/suggest/move", post(suggest_move))
        .route("/suggest/ask", post(suggest_ask))
        .route("/suggest/reset", post(suggest_reset))
        .route("/credentials", post(save_credentials))
        .with_state(state)
}

/// Page HTML plus the session cookie
fn page_response(id: Uuid, html: String) -> Response {
    ([(header::SET_COOKIE, session_cookie(id))], Html(html)).into_response()
}

async fn index() -> Html<String> {
    Html(pages::index_page())
}

async fn health() -> &'static str {
    "ok"
}

async fn battle_view(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, session) = state.sessions.resolve(&headers);
    let session = session.lock().await;
    page_response(id, pages::battle_page(&session, &[], &state.board))
}

async fn battle_start(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<StartForm>,
) -> Response {
    let (id, shared) = state.sessions.resolve(&headers);
    let mut guard = shared.lock().await;
    let session = &mut *guard;

    // Unparsable input keeps the previous limit
    if let Ok(max_turns) = form.max_turns.trim().parse::<u32>() {
        session.battle.set_max_turns(max_turns);
    }

    info!("[SERVER] Battle start for session {}", id);
    let report = session
        .battle
        .start(state.generator.as_ref(), &session.credential)
        .await;

    page_response(id, pages::battle_page(session, &report.notices, &state.board))
}

async fn battle_reset(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, shared) = state.sessions.resolve(&headers);
    let mut session = shared.lock().await;
    let notice = session.battle.reset();
    page_response(id, pages::battle_page(&session, &[notice], &state.board))
}

async fn suggest_view(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, session) = state.sessions.resolve(&headers);
    let session = session.lock().await;
    page_response(id, pages::suggest_page(&session, &[], &state.board))
}

async fn suggest_move(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<MoveForm>,
) -> Response {
    let (id, shared) = state.sessions.resolve(&headers);
    let mut session = shared.lock().await;
    let notices: Vec<Notice> = session.suggest.submit_move(&form.mv).into_iter().collect();
    page_response(id, pages::suggest_page(&session, &notices, &state.board))
}

async fn suggest_ask(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, shared) = state.sessions.resolve(&headers);
    let mut guard = shared.lock().await;
    let session = &mut *guard;

    let notice = session
        .suggest
        .ask_proposer(state.generator.as_ref(), &session.credential)
        .await;

    page_response(id, pages::suggest_page(session, &[notice], &state.board))
}

async fn suggest_reset(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, shared) = state.sessions.resolve(&headers);
    let mut session = shared.lock().await;
    let notice = session.suggest.reset();
    page_response(id, pages::suggest_page(&session, &[notice], &state.board))
}

async fn save_credentials(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let (id, shared) = state.sessions.resolve(&headers);
    let mut session = shared.lock().await;

    // A blank submission keeps whatever key was saved before
    let notices = if form.api_key.trim().is_empty() {
        vec![Notice::info("No API key entered; the current setting is unchanged.")]
    } else {
        session.credential = form.api_key;
        info!("[SESSION] API key saved for session {}", id);
        vec![Notice::success("✅ API key saved!")]
    };

    let html = match form.return_to.as_str() {
        "suggest" => pages::suggest_page(&session, &notices, &state.board),
        _ => pages::battle_page(&session, &notices, &state.board),
    };
    page_response(id, html)
}
