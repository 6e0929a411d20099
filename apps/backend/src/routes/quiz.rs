//! Quiz session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::timer::spawn_countdown;
use crate::AppState;
use accent_core::QuizSession;

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("quiz session {}", id))
}

/// GET /api/questions
pub async fn questions(State(state): State<AppState>) -> Json<Vec<QuestionView>> {
    Json(
        state
            .bank
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionView::new(index, question))
            .collect(),
    )
}

/// POST /api/quiz
pub async fn start(State(state): State<AppState>) -> (StatusCode, Json<StartQuizResponse>) {
    let session = QuizSession::new(state.bank.clone(), state.settings);
    let question = session.current_question().map(|q| QuestionView::new(0, q));
    let total_questions = session.total_questions();
    let generation = session.generation();

    let session_id = state.sessions.insert(session).await;
    spawn_countdown(
        state.sessions.clone(),
        session_id,
        generation,
        state.tick_period,
        state.session_ttl,
    );
    tracing::info!(%session_id, time_limit = state.settings.time_limit, "quiz started");

    (
        StatusCode::CREATED,
        Json(StartQuizResponse {
            session_id,
            time_limit: state.settings.time_limit,
            total_questions,
            question,
        }),
    )
}

/// GET /api/quiz/:id
pub async fn status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizStateResponse>> {
    state
        .sessions
        .with(id, |session| QuizStateResponse::from_session(id, session))
        .await
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// POST /api/quiz/:id/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    let response = state
        .sessions
        .with_mut(id, |session| {
            let rule = session.current_question().and_then(|q| q.rule.clone());
            let verdict = session.submit(&request.answer)?;
            Ok::<_, ApiError>(AnswerResponse {
                verdict,
                rule,
                score: session.score(),
                time_remaining: session.time_remaining(),
            })
        })
        .await
        .ok_or_else(|| not_found(id))?
        .inspect_err(|err| tracing::warn!(%id, error = %err, "answer rejected"))?;

    tracing::debug!(
        %id,
        category = response.verdict.category.as_str(),
        score = response.score,
        "answer graded"
    );
    Ok(Json(response))
}

/// POST /api/quiz/:id/next
pub async fn next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NextResponse>> {
    let response = state
        .sessions
        .with_mut(id, |session| {
            let question = session.advance()?.cloned();
            let index = session.index();
            Ok::<_, ApiError>(NextResponse {
                status: session.status(),
                score: session.score(),
                question: question.map(|q| QuestionView::new(index, &q)),
            })
        })
        .await
        .ok_or_else(|| not_found(id))??;

    if response.status.is_finished() {
        tracing::info!(%id, score = response.score, "quiz completed");
    }
    Ok(Json(response))
}

/// POST /api/quiz/:id/restart
pub async fn restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizStateResponse>> {
    let (response, generation) = state
        .sessions
        .with_mut(id, |session| {
            session.restart();
            (
                QuizStateResponse::from_session(id, session),
                session.generation(),
            )
        })
        .await
        .ok_or_else(|| not_found(id))?;

    spawn_countdown(
        state.sessions.clone(),
        id,
        generation,
        state.tick_period,
        state.session_ttl,
    );
    tracing::info!(%id, generation, "quiz restarted");

    Ok(Json(response))
}

/// GET /api/quiz/:id/summary
pub async fn summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizSummary>> {
    state
        .sessions
        .with(id, |session| session.summary())
        .await
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// DELETE /api/quiz/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    if !state.sessions.remove(id).await {
        return Err(not_found(id));
    }
    tracing::info!(%id, "quiz session removed");

    Ok(Json(serde_json::json!({ "deleted": true })))
}
