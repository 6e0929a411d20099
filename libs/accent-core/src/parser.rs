//! Parser for question bank files.
//!
//! # Format
//! ```text
//! ID: 1
//! Q: ¿Cuál es la sílaba tónica de 'café'?
//! O: ca-FE
//! O: CA-fe
//! A: ca-FE
//! R: Aguda terminada en vocal.
//!
//! Q: Escribe la palabra 'arbol' con la acentuación correcta.
//! A: árbol
//! R: Llana terminada en consonante.
//! Multiple lines are supported for prompts and rules.
//! ```
//!
//! Questions with `O:` lines are multiple-choice, the rest are text-input.
//! Lines starting with `#` are comments.

use crate::error::{ParseError, Result};
use crate::types::{Question, QuestionKind};
use std::collections::HashSet;

/// Parse question bank content into questions.
pub fn parse(content: &str) -> Result<Vec<Question>> {
    let mut questions = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut parser = Parser::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        if let Some(done) = parser.process_line(line, line_num)? {
            push_question(done, &mut questions, &mut seen_ids)?;
        }
    }

    if let Some(done) = parser.finalize()? {
        push_question(done, &mut questions, &mut seen_ids)?;
    }

    if questions.is_empty() {
        return Err(ParseError::EmptyBank);
    }
    Ok(questions)
}

fn push_question(
    question: Question,
    questions: &mut Vec<Question>,
    seen_ids: &mut HashSet<i64>,
) -> Result<()> {
    if let Some(id) = question.id {
        if !seen_ids.insert(id) {
            return Err(ParseError::DuplicateId {
                id,
                line: question.line_number,
            });
        }
    }
    questions.push(question);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Prompt,
    Rule,
}

struct QuestionBuilder {
    id: Option<i64>,
    prompt: Option<String>,
    answer: Option<String>,
    options: Vec<String>,
    rule: Option<String>,
    start_line: usize,
}

impl QuestionBuilder {
    fn new(start_line: usize) -> Self {
        Self {
            id: None,
            prompt: None,
            answer: None,
            options: Vec::new(),
            rule: None,
            start_line,
        }
    }

    fn build(self) -> Result<Question> {
        let prompt = self.prompt.ok_or(ParseError::MissingQuestion {
            line: self.start_line,
        })?;
        let answer = self.answer.ok_or(ParseError::MissingAnswer {
            line: self.start_line,
        })?;

        let kind = if self.options.is_empty() {
            QuestionKind::TextInput
        } else {
            if !self.options.contains(&answer) {
                return Err(ParseError::AnswerNotInOptions {
                    line: self.start_line,
                    answer,
                });
            }
            QuestionKind::MultipleChoice
        };

        Ok(Question {
            id: self.id,
            prompt: prompt.trim().to_string(),
            kind,
            answer,
            options: self.options,
            rule: self
                .rule
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            line_number: self.start_line,
        })
    }
}

struct Parser {
    current: Option<QuestionBuilder>,
    current_field: Option<Field>,
    buffer: Vec<String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            current: None,
            current_field: None,
            buffer: Vec::new(),
        }
    }

    /// Feed one line; returns a question when this line closed the previous one.
    fn process_line(&mut self, line: &str, line_num: usize) -> Result<Option<Question>> {
        match Self::parse_line(line) {
            LineType::Id(id_str) => return self.handle_id(id_str, line_num),
            LineType::Question(text) => return self.handle_question(text, line_num),
            LineType::Option(text) => self.handle_option(text, line_num),
            LineType::Answer(text) => self.handle_answer(text, line_num),
            LineType::Rule(text) => self.handle_rule(text, line_num),
            LineType::Text(text) => self.buffer.push(text.to_string()),
            LineType::Empty => self.buffer.push(String::new()),
            LineType::Comment => {}
        }
        Ok(None)
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("ID:") {
            LineType::Id(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("Q:") {
            LineType::Question(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("O:") {
            LineType::Option(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("A:") {
            LineType::Answer(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("R:") {
            LineType::Rule(rest.trim())
        } else if trimmed.starts_with('#') {
            LineType::Comment
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(line)
        }
    }

    fn handle_id(&mut self, id_str: &str, line_num: usize) -> Result<Option<Question>> {
        let id = id_str.parse::<i64>().map_err(|_| ParseError::InvalidId {
            line: line_num,
            value: id_str.to_string(),
        })?;

        let finished = self.close_started()?;
        self.current
            .get_or_insert_with(|| QuestionBuilder::new(line_num))
            .id = Some(id);
        self.current_field = None;
        Ok(finished)
    }

    fn handle_question(&mut self, text: &str, line_num: usize) -> Result<Option<Question>> {
        // A bare ID line keeps its builder open for this prompt
        let finished = self.close_started()?;
        self.current
            .get_or_insert_with(|| QuestionBuilder::new(line_num));
        self.current_field = Some(Field::Prompt);
        self.buffer.push(text.to_string());
        Ok(finished)
    }

    fn handle_option(&mut self, text: &str, line_num: usize) {
        self.flush_buffer();
        self.current_field = None;
        self.current
            .get_or_insert_with(|| QuestionBuilder::new(line_num))
            .options
            .push(text.to_string());
    }

    fn handle_answer(&mut self, text: &str, line_num: usize) {
        self.flush_buffer();
        self.current_field = None;
        self.current
            .get_or_insert_with(|| QuestionBuilder::new(line_num))
            .answer = Some(text.to_string());
    }

    fn handle_rule(&mut self, text: &str, line_num: usize) {
        self.flush_buffer();
        self.current
            .get_or_insert_with(|| QuestionBuilder::new(line_num));
        self.current_field = Some(Field::Rule);
        self.buffer.push(text.to_string());
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let content = self.buffer.join("\n");
        self.buffer.clear();

        if let Some(ref mut question) = self.current {
            match self.current_field {
                Some(Field::Prompt) => question.prompt = Some(content),
                Some(Field::Rule) => question.rule = Some(content),
                None => {}
            }
        }
    }

    fn started(&self) -> bool {
        self.current_field.is_some()
            || self.current.as_ref().is_some_and(|q| {
                q.prompt.is_some() || q.answer.is_some() || q.rule.is_some() || !q.options.is_empty()
            })
    }

    /// Build the current question if it already has content.
    fn close_started(&mut self) -> Result<Option<Question>> {
        if self.started() {
            self.take_current()
        } else {
            self.flush_buffer();
            Ok(None)
        }
    }

    fn take_current(&mut self) -> Result<Option<Question>> {
        self.flush_buffer();
        self.current_field = None;
        self.current.take().map(QuestionBuilder::build).transpose()
    }

    fn finalize(mut self) -> Result<Option<Question>> {
        self.take_current()
    }
}

enum LineType<'a> {
    Id(&'a str),
    Question(&'a str),
    Option(&'a str),
    Answer(&'a str),
    Rule(&'a str),
    Text(&'a str),
    Empty,
    Comment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_text_input_question() {
        let input = "Q: Escribe 'arbol' con tilde.\nA: árbol\nR: Llana terminada en consonante.";
        let questions = parse(input).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].kind, QuestionKind::TextInput);
        assert_eq!(questions[0].prompt, "Escribe 'arbol' con tilde.");
        assert_eq!(questions[0].answer, "árbol");
        assert_eq!(questions[0].rule.as_deref(), Some("Llana terminada en consonante."));
        assert!(questions[0].options.is_empty());
    }

    #[test]
    fn parse_multiple_choice_question() {
        let input = "ID: 3\nQ: ¿'El' o 'Él'?\nO: El\nO: Él\nA: Él";
        let questions = parse(input).unwrap();
        assert_eq!(questions[0].id, Some(3));
        assert_eq!(questions[0].kind, QuestionKind::MultipleChoice);
        assert_eq!(questions[0].options, vec!["El", "Él"]);
        assert_eq!(questions[0].rule, None);
    }

    #[test]
    fn parse_multiline_prompt_and_rule() {
        let input = "Q: Line 1\nLine 2\nA: sí\nR: Rule 1\n\nRule 3";
        let questions = parse(input).unwrap();
        assert_eq!(questions[0].prompt, "Line 1\nLine 2");
        assert_eq!(questions[0].rule.as_deref(), Some("Rule 1\n\nRule 3"));
    }

    #[test]
    fn parse_multiple_questions_without_ids() {
        let input = "Q: Q1\nA: uno\n\nQ: Q2\nO: dos\nO: tres\nA: dos\n\nQ: Q3\nA: tres";
        let questions = parse(input).unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].line_number, 4);
        assert_eq!(questions[2].prompt, "Q3");
    }

    #[test]
    fn parse_mixed_id_and_no_id() {
        let input = "Q: No ID\nA: uno\n\nID: 5\nQ: Has ID\nA: dos";
        let questions = parse(input).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, None);
        assert_eq!(questions[1].id, Some(5));
        assert_eq!(questions[1].prompt, "Has ID");
    }

    #[test]
    fn parse_skips_comments() {
        let input = "# Tabla 1\nQ: Q1\n# nota\nA: uno";
        let questions = parse(input).unwrap();
        assert_eq!(questions[0].prompt, "Q1");
    }

    #[test]
    fn reject_duplicate_ids() {
        let input = "ID: 1\nQ: Q1\nA: A1\n\nID: 1\nQ: Q2\nA: A2";
        let result = parse(input);
        assert!(matches!(result, Err(ParseError::DuplicateId { id: 1, .. })));
    }

    #[test]
    fn reject_invalid_id() {
        let result = parse("ID: uno\nQ: Q1\nA: A1");
        assert_eq!(
            result,
            Err(ParseError::InvalidId {
                line: 1,
                value: "uno".to_string()
            })
        );
    }

    #[test]
    fn reject_missing_question() {
        let result = parse("ID: 1\nA: Answer only");
        assert!(matches!(result, Err(ParseError::MissingQuestion { .. })));
    }

    #[test]
    fn reject_missing_answer() {
        let result = parse("ID: 1\nQ: Question only");
        assert!(matches!(result, Err(ParseError::MissingAnswer { .. })));
    }

    #[test]
    fn reject_answer_outside_options() {
        let result = parse("Q: Elige\nO: El\nO: Él\nA: Ella");
        assert_eq!(
            result,
            Err(ParseError::AnswerNotInOptions {
                line: 1,
                answer: "Ella".to_string()
            })
        );
    }

    #[test]
    fn reject_empty_content() {
        assert_eq!(parse(""), Err(ParseError::EmptyBank));
        assert_eq!(parse("# only comments\n\n"), Err(ParseError::EmptyBank));
    }
}
