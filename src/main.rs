use anyhow::Context;
use clap::Parser;
use gemini_chess::ai::GeminiClient;
use gemini_chess::core::AppConfig;
use gemini_chess::rendering::RenderOptions;
use gemini_chess::server::{self, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::parse();
    config.validate()?;

    let generator = Arc::new(GeminiClient::new(&config.api_base, &config.model));
    info!(
        "[SERVER] Using model {} at {}",
        generator.model(),
        config.api_base
    );

    let board = RenderOptions {
        theme: config.board_theme,
        ..RenderOptions::default()
    };
    info!(
        "[SERVER] Board theme {}, sessions expire after {} idle minutes",
        config.board_theme.name(),
        config.session_idle_minutes
    );

    let state = AppState::new(generator, config.default_max_turns)
        .with_render_options(board)
        .with_session_idle_timeout(config.session_idle_timeout());
    let app = server::router(state);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("[SERVER] Listening on http://{}", config.bind);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
