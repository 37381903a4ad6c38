use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::PhaseId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("lesson question cannot be empty")]
    EmptyQuestion,

    #[error("lesson needs at least 2 options, got {count}")]
    TooFewOptions { count: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct option {correct} is out of range for {len} options")]
    CorrectOutOfRange { correct: usize, len: usize },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated lesson as it appears in catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDraft {
    pub title: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub icon: String,
    pub phase: PhaseId,
}

impl LessonDraft {
    /// Validate the draft into a `Lesson`.
    ///
    /// Question text keeps its inner line breaks; code snippets rely on them.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` when a text field is blank, fewer than two options
    /// are given, or `correct` does not index into `options`.
    pub fn validate(self) -> Result<Lesson, LessonError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        if self.question.trim().is_empty() {
            return Err(LessonError::EmptyQuestion);
        }
        if self.options.len() < 2 {
            return Err(LessonError::TooFewOptions {
                count: self.options.len(),
            });
        }
        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(LessonError::EmptyOption { index });
        }
        if self.correct >= self.options.len() {
            return Err(LessonError::CorrectOutOfRange {
                correct: self.correct,
                len: self.options.len(),
            });
        }

        Ok(Lesson {
            title: title.to_string(),
            question: self.question.trim().to_string(),
            options: self.options,
            correct_option: self.correct,
            explanation: self.explanation.trim().to_string(),
            icon: self.icon.trim().to_string(),
            phase: self.phase,
        })
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// One multiple-choice question with exactly one correct option.
///
/// A lesson has no id of its own; its position in the catalog identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    title: String,
    question: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
    icon: String,
    phase: PhaseId,
}

impl Lesson {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn phase(&self) -> PhaseId {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LessonDraft {
        LessonDraft {
            title: "Loops".to_string(),
            question: "Which loop fits a known number of repetitions?".to_string(),
            options: vec!["while".into(), "foreach".into(), "for".into()],
            correct: 2,
            explanation: "Use for when the count is known.".to_string(),
            icon: "🔄".to_string(),
            phase: PhaseId::new(1),
        }
    }

    #[test]
    fn validate_accepts_well_formed_draft() {
        let lesson = draft().validate().unwrap();
        assert_eq!(lesson.title(), "Loops");
        assert_eq!(lesson.option_count(), 3);
        assert_eq!(lesson.option(2), Some("for"));
        assert!(lesson.is_correct(2));
        assert!(!lesson.is_correct(0));
        assert_eq!(lesson.phase(), PhaseId::new(1));
    }

    #[test]
    fn question_keeps_inner_line_breaks() {
        let mut d = draft();
        d.question = "Complete:\nif (_____) { }\n".to_string();
        let lesson = d.validate().unwrap();
        assert_eq!(lesson.question(), "Complete:\nif (_____) { }");
    }

    #[test]
    fn correct_index_must_be_in_range() {
        let mut d = draft();
        d.correct = 3;
        let err = d.validate().unwrap_err();
        assert_eq!(err, LessonError::CorrectOutOfRange { correct: 3, len: 3 });
    }

    #[test]
    fn single_option_is_rejected() {
        let mut d = draft();
        d.options.truncate(1);
        d.correct = 0;
        assert_eq!(d.validate().unwrap_err(), LessonError::TooFewOptions { count: 1 });
    }

    #[test]
    fn blank_option_is_rejected() {
        let mut d = draft();
        d.options[1] = "  ".to_string();
        assert_eq!(d.validate().unwrap_err(), LessonError::EmptyOption { index: 1 });
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut d = draft();
        d.title = String::new();
        assert_eq!(d.validate().unwrap_err(), LessonError::EmptyTitle);
    }
}
