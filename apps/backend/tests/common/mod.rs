//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the router to an in-memory session store
//! - Helpers for starting and driving quiz sessions

pub mod fixtures;

use std::time::Duration;

use axum::Router;
use axum_test::TestServer;
use uuid::Uuid;

use accent_quiz_server::config::Config;
use accent_quiz_server::{build_router, load_bank, AppState};

/// Test context holding the application state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context with the built-in bank and default settings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with a short countdown.
    pub fn with_countdown(time_limit: u32, tick_period: Duration) -> Self {
        Self::with_config(Config {
            time_limit,
            tick_period,
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let bank = load_bank(&config).expect("Failed to load question bank");
        let state = AppState::new(bank, &config);
        let app = build_router(state.clone());

        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to create test server")
    }
}

/// Start a quiz and return its session ID.
pub async fn start_quiz(server: &TestServer) -> Uuid {
    let response = server.post("/api/quiz").await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    body["session_id"]
        .as_str()
        .and_then(|id| id.parse().ok())
        .expect("session_id in start response")
}
