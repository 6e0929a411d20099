//! Quiz session state: question cursor, score, answer log and countdown.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::SessionError;
use crate::matching::validate;
use crate::types::{
    AnswerRecord, Question, QuestionKind, QuizSettings, QuizSummary, SessionStatus,
    ValidationVerdict,
};

/// One run through a question bank.
///
/// The session never grades by itself: answers go through [`validate`]
/// and the verdict is recorded. Time advances only through [`QuizSession::tick`],
/// so the owner decides how often a tick happens.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Arc<[Question]>,
    settings: QuizSettings,
    index: usize,
    score: usize,
    answered_current: bool,
    time_remaining: u32,
    status: SessionStatus,
    answers: Vec<AnswerRecord>,
    generation: u64,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(questions: Arc<[Question]>, settings: QuizSettings) -> Self {
        let status = initial_status(&questions);
        Self {
            questions,
            settings,
            index: 0,
            score: 0,
            answered_current: false,
            time_remaining: settings.time_limit,
            status,
            answers: Vec::new(),
            generation: 0,
            started_at: Utc::now(),
        }
    }

    /// Start over with the same questions and a full countdown.
    pub fn restart(&mut self) {
        self.index = 0;
        self.score = 0;
        self.answered_current = false;
        self.time_remaining = self.settings.time_limit;
        self.status = initial_status(&self.questions);
        self.answers.clear();
        self.generation += 1;
        self.started_at = Utc::now();
    }

    /// The question being shown, if the session is still running.
    pub fn current_question(&self) -> Option<&Question> {
        if self.status.is_finished() {
            return None;
        }
        self.questions.get(self.index)
    }

    /// Grade an answer to the current question and record it.
    ///
    /// Multiple-choice input must name one of the options; the matched option
    /// text is what gets graded. Text input is graded as typed.
    pub fn submit(&mut self, input: &str) -> Result<ValidationVerdict, SessionError> {
        if self.status.is_finished() {
            return Err(SessionError::Finished);
        }
        if self.answered_current {
            return Err(SessionError::AlreadyAnswered { index: self.index });
        }

        let question = self
            .questions
            .get(self.index)
            .ok_or(SessionError::Finished)?;

        let submitted = match question.kind {
            QuestionKind::MultipleChoice => question
                .find_option(input)
                .ok_or_else(|| SessionError::UnknownOption {
                    input: input.to_string(),
                })?
                .to_string(),
            QuestionKind::TextInput => input.to_string(),
        };

        let verdict = validate(&submitted, &question.answer);
        if verdict.correct {
            self.score += 1;
        }

        self.answers.push(AnswerRecord {
            question_index: self.index,
            prompt: question.prompt.clone(),
            submitted,
            expected: question.answer.clone(),
            correct: verdict.correct,
            category: verdict.category,
            feedback: verdict.message.clone(),
            answered_at: Utc::now(),
        });
        self.answered_current = true;

        Ok(verdict)
    }

    /// Move to the next question, unanswered or not.
    ///
    /// Returns `None` once the bank is exhausted, which completes the session.
    pub fn advance(&mut self) -> Result<Option<&Question>, SessionError> {
        if self.status.is_finished() {
            return Err(SessionError::Finished);
        }

        self.index += 1;
        self.answered_current = false;

        if self.index >= self.questions.len() {
            self.status = SessionStatus::Completed;
            return Ok(None);
        }
        Ok(self.questions.get(self.index))
    }

    /// Consume one unit of the countdown.
    pub fn tick(&mut self) -> SessionStatus {
        if self.status.is_finished() {
            return self.status;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.status = SessionStatus::TimedOut;
        }
        self.status
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            score: self.score,
            total_questions: self.questions.len(),
            answered: self.answers.len(),
            status: self.status,
            time_remaining: self.time_remaining,
            answers: self.answers.clone(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_answered(&self) -> bool {
        self.answered_current
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Bumped on every restart; lets a countdown driver detect it is stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

fn initial_status(questions: &[Question]) -> SessionStatus {
    if questions.is_empty() {
        SessionStatus::Completed
    } else {
        SessionStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::default_bank;
    use crate::types::FeedbackCategory;
    use pretty_assertions::assert_eq;

    fn session(time_limit: u32) -> QuizSession {
        let questions: Arc<[Question]> = default_bank().unwrap().into();
        QuizSession::new(questions, QuizSettings { time_limit })
    }

    #[test]
    fn starts_on_first_question() {
        let s = session(60);
        assert_eq!(s.status(), SessionStatus::InProgress);
        assert_eq!(s.index(), 0);
        assert_eq!(s.time_remaining(), 60);
        assert_eq!(s.current_question().unwrap().answer, "ca-FE");
    }

    #[test]
    fn full_run_records_score_and_log() {
        let mut s = session(60);

        let verdict = s.submit("ca-FE").unwrap();
        assert_eq!(verdict.category, FeedbackCategory::Exact);
        s.advance().unwrap();

        let verdict = s.submit("arbol").unwrap();
        assert_eq!(verdict.category, FeedbackCategory::AccentMismatch);
        s.advance().unwrap();

        let verdict = s.submit("El").unwrap();
        assert_eq!(verdict.category, FeedbackCategory::AccentMismatch);
        assert!(s.advance().unwrap().is_none());

        assert_eq!(s.status(), SessionStatus::Completed);
        let summary = s.summary();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.total_questions, 3);
        assert_eq!(summary.answered, 3);
        assert_eq!(summary.answers[1].submitted, "arbol");
        assert_eq!(summary.answers[1].expected, "árbol");
        assert!(!summary.answers[2].correct);
    }

    #[test]
    fn text_input_is_not_trimmed() {
        let mut s = session(60);
        s.advance().unwrap();
        let verdict = s.submit(" árbol").unwrap();
        assert_eq!(verdict.category, FeedbackCategory::WrongWord);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn choice_input_resolves_to_single_option() {
        let bank = crate::parser::parse("Q: ¿Tipo de 'árbol'?\nO: aguda\nO: llana\nA: llana").unwrap();
        let mut s = QuizSession::new(bank.into(), QuizSettings::default());
        let verdict = s.submit("LLANA").unwrap();
        assert!(verdict.correct);
        assert_eq!(s.answers()[0].submitted, "llana");
    }

    #[test]
    fn choice_input_matching_several_options_is_rejected() {
        let mut s = session(60);
        assert_eq!(
            s.submit("Ca-Fe").unwrap_err(),
            SessionError::UnknownOption {
                input: "Ca-Fe".to_string()
            }
        );
        assert_eq!(s.score(), 0);
        assert!(s.answers().is_empty());

        // the listed option is still graded as written
        let verdict = s.submit("CA-fe").unwrap();
        assert_eq!(verdict.category, FeedbackCategory::WrongWord);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut s = session(60);
        let err = s.submit("té").unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownOption {
                input: "té".to_string()
            }
        );
        assert!(!s.is_answered());
        assert!(s.answers().is_empty());
    }

    #[test]
    fn second_answer_is_rejected() {
        let mut s = session(60);
        s.submit("CA-fe").unwrap();
        assert_eq!(
            s.submit("ca-FE").unwrap_err(),
            SessionError::AlreadyAnswered { index: 0 }
        );
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn skipping_questions_is_allowed() {
        let mut s = session(60);
        s.advance().unwrap();
        s.advance().unwrap();
        assert!(s.advance().unwrap().is_none());
        assert_eq!(s.summary().answered, 0);
        assert_eq!(s.advance().unwrap_err(), SessionError::Finished);
    }

    #[test]
    fn countdown_times_out() {
        let mut s = session(3);
        assert_eq!(s.tick(), SessionStatus::InProgress);
        assert_eq!(s.tick(), SessionStatus::InProgress);
        assert_eq!(s.tick(), SessionStatus::TimedOut);
        assert_eq!(s.time_remaining(), 0);
        assert!(s.current_question().is_none());
        assert_eq!(s.submit("ca-FE").unwrap_err(), SessionError::Finished);
        // further ticks are no-ops
        assert_eq!(s.tick(), SessionStatus::TimedOut);
    }

    #[test]
    fn ticks_after_completion_keep_status() {
        let mut s = session(2);
        for _ in 0..3 {
            s.advance().unwrap();
        }
        assert_eq!(s.tick(), SessionStatus::Completed);
        assert_eq!(s.time_remaining(), 2);
    }

    #[test]
    fn restart_resets_state() {
        let mut s = session(2);
        s.submit("ca-FE").unwrap();
        s.tick();
        s.tick();
        assert_eq!(s.status(), SessionStatus::TimedOut);

        s.restart();
        assert_eq!(s.status(), SessionStatus::InProgress);
        assert_eq!(s.score(), 0);
        assert_eq!(s.index(), 0);
        assert_eq!(s.time_remaining(), 2);
        assert!(s.answers().is_empty());
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn empty_bank_is_complete() {
        let s = QuizSession::new(Vec::<Question>::new().into(), QuizSettings::default());
        assert_eq!(s.status(), SessionStatus::Completed);
        assert!(s.current_question().is_none());
    }
}
