//! Core library for the Spanish accentuation quiz.
//!
//! Provides:
//! - Answer validation with accent-aware feedback
//! - Question bank parser and the built-in bank
//! - Quiz session state (score, answer log, countdown)
//! - Shared types (Question, ValidationVerdict, QuizSummary, etc.)

pub mod bank;
pub mod error;
pub mod matching;
pub mod parser;
pub mod session;
pub mod types;

pub use bank::default_bank;
pub use error::{ParseError, Result, SessionError};
pub use matching::{base_equals, strip_diacritics, validate};
pub use parser::parse;
pub use session::QuizSession;
pub use types::{
    AnswerRecord, FeedbackCategory, Question, QuestionKind, QuizSettings, QuizSummary,
    SessionStatus, ValidationVerdict,
};
