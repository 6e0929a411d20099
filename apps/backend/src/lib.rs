pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use accent_core::{default_bank, parse, Question, QuizSettings};
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<[Question]>,
    pub sessions: Arc<SessionStore>,
    pub settings: QuizSettings,
    pub tick_period: Duration,
    /// Grace period before a finished session is evicted.
    pub session_ttl: Duration,
}

impl AppState {
    pub fn new(bank: Vec<Question>, config: &Config) -> Self {
        Self {
            bank: bank.into(),
            sessions: Arc::new(SessionStore::new()),
            settings: QuizSettings {
                time_limit: config.time_limit,
            },
            tick_period: config.tick_period,
            session_ttl: config.session_ttl,
        }
    }
}

/// Load the configured question bank, or the built-in one.
pub fn load_bank(config: &Config) -> anyhow::Result<Vec<Question>> {
    match &config.bank_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading question bank {}", path.display()))?;
            parse(&content).with_context(|| format!("parsing question bank {}", path.display()))
        }
        None => Ok(default_bank()?),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/validate", post(routes::validate::validate))
        .route("/api/compare", post(routes::validate::compare))
        .route("/api/questions", get(routes::quiz::questions))
        .route("/api/quiz", post(routes::quiz::start))
        .route(
            "/api/quiz/:id",
            get(routes::quiz::status).delete(routes::quiz::remove),
        )
        .route("/api/quiz/:id/answer", post(routes::quiz::answer))
        .route("/api/quiz/:id/next", post(routes::quiz::next))
        .route("/api/quiz/:id/restart", post(routes::quiz::restart))
        .route("/api/quiz/:id/summary", get(routes::quiz::summary))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading question bank...");
    let bank = load_bank(&config)?;
    tracing::info!(questions = bank.len(), "Question bank loaded");

    let state = AppState::new(bank, &config);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
