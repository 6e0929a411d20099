//! Error types for accent-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a question bank.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing question at line {line}")]
    MissingQuestion { line: usize },

    #[error("missing answer at line {line}")]
    MissingAnswer { line: usize },

    #[error("invalid ID format at line {line}: {value}")]
    InvalidId { line: usize, value: String },

    #[error("duplicate ID {id} at line {line}")]
    DuplicateId { id: i64, line: usize },

    #[error("answer {answer:?} at line {line} is not one of the options")]
    AnswerNotInOptions { line: usize, answer: String },

    #[error("question bank contains no questions")]
    EmptyBank,
}

/// Errors raised when a quiz session rejects an action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("quiz session has already finished")]
    Finished,

    #[error("question {index} was already answered")]
    AlreadyAnswered { index: usize },

    #[error("{input:?} is not one of the options")]
    UnknownOption { input: String },
}
