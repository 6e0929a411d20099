//! Core types for the accentuation quiz.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::base_equals;

/// Feedback category of a graded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    /// Submitted word matches the reference exactly.
    Exact,
    /// Same word once diacritics are removed, but the tilde is wrong or missing.
    AccentMismatch,
    /// A different word altogether.
    WrongWord,
}

impl FeedbackCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::AccentMismatch => "accent_mismatch",
            Self::WrongWord => "wrong_word",
        }
    }
}

/// Result of comparing a submitted word against the reference word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// True only when `category` is [`FeedbackCategory::Exact`].
    pub correct: bool,
    pub category: FeedbackCategory,
    /// Human-readable feedback, mentions the reference word on a miss.
    pub message: String,
}

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "text-input")]
    TextInput,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::TextInput => "text-input",
        }
    }
}

/// A quiz question parsed from a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Option<i64>,
    pub prompt: String,
    pub kind: QuestionKind,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub line_number: usize,
}

impl Question {
    /// Resolve user input to one of the options.
    ///
    /// An exact option wins. Otherwise the input must be the same base word
    /// (ignoring case and accents) as exactly one option; options that only
    /// differ in case or accents are never guessed between.
    pub fn find_option(&self, input: &str) -> Option<&str> {
        if let Some(option) = self.options.iter().find(|option| option.as_str() == input) {
            return Some(option);
        }

        let mut matches = self.options.iter().filter(|option| base_equals(option, input));
        match (matches.next(), matches.next()) {
            (Some(option), None) => Some(option),
            _ => None,
        }
    }
}

/// One graded answer in a session's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub prompt: String,
    pub submitted: String,
    pub expected: String,
    pub correct: bool,
    pub category: FeedbackCategory,
    pub feedback: String,
    pub answered_at: DateTime<Utc>,
}

/// Quiz session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Countdown length in ticks.
    pub time_limit: u32,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self { time_limit: 60 }
    }
}

/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    /// Every question was shown.
    Completed,
    /// The countdown reached zero first.
    TimedOut,
}

impl SessionStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// End-of-quiz results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: usize,
    /// Size of the question bank, answered or not.
    pub total_questions: usize,
    pub answered: usize,
    pub status: SessionStatus,
    pub time_remaining: u32,
    pub answers: Vec<AnswerRecord>,
}
