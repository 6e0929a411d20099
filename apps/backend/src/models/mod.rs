//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from accent-core
pub use accent_core::{
    AnswerRecord, FeedbackCategory, Question, QuestionKind, QuizSummary, SessionStatus,
    ValidationVerdict,
};
use accent_core::QuizSession;

// === Validation ===

/// Request body for POST /api/validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub submitted: String,
    pub reference: String,
}

/// Request body for POST /api/compare
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub a: String,
    pub b: String,
}

/// Response for POST /api/compare
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub equivalent: bool,
}

// === Quiz ===

/// A question as shown to the player (no answer, no rule).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub index: usize,
    pub prompt: String,
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl QuestionView {
    pub fn new(index: usize, question: &Question) -> Self {
        Self {
            index,
            prompt: question.prompt.clone(),
            kind: question.kind,
            options: question.options.clone(),
        }
    }
}

/// Response for POST /api/quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartQuizResponse {
    pub session_id: Uuid,
    pub time_limit: u32,
    pub total_questions: usize,
    pub question: Option<QuestionView>,
}

/// Response for GET /api/quiz/:id and POST /api/quiz/:id/restart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizStateResponse {
    pub session_id: Uuid,
    pub status: SessionStatus,
    pub index: usize,
    pub total_questions: usize,
    pub score: usize,
    pub time_remaining: u32,
    pub answered: bool,
    pub started_at: DateTime<Utc>,
    pub question: Option<QuestionView>,
}

impl QuizStateResponse {
    pub fn from_session(session_id: Uuid, session: &QuizSession) -> Self {
        Self {
            session_id,
            status: session.status(),
            index: session.index(),
            total_questions: session.total_questions(),
            score: session.score(),
            time_remaining: session.time_remaining(),
            answered: session.is_answered(),
            started_at: session.started_at(),
            question: session
                .current_question()
                .map(|q| QuestionView::new(session.index(), q)),
        }
    }
}

/// Request body for POST /api/quiz/:id/answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

/// Response for POST /api/quiz/:id/answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(flatten)]
    pub verdict: ValidationVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub score: usize,
    pub time_remaining: u32,
}

/// Response for POST /api/quiz/:id/next
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextResponse {
    pub status: SessionStatus,
    pub score: usize,
    pub question: Option<QuestionView>,
}
