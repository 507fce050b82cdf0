//! Quiz content types and generation configuration
//!
//! This module defines the shared content vocabulary of the crate: the
//! question record produced by the external generation collaborator, and
//! the configuration both duel participants must agree on. Once received,
//! a [`Question`] is treated as opaque and immutable; the core never
//! rewrites generated content.

use garde::Validate;
use serde::{Deserialize, Serialize};

/// The kinds of questions the generation collaborator may produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// A question with several options, exactly one of them correct
    MultipleChoice,
    /// A statement to be judged true or false
    TrueFalse,
    /// A sentence with a short missing word or two to fill in
    FillBlanks,
}

impl QuestionType {
    /// Whether answers to this question type are picked from the options
    ///
    /// Choice-type questions must carry their correct answer among the
    /// options; fill-in-the-blanks answers are free text.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::MultipleChoice | Self::TrueFalse)
    }
}

/// Requested difficulty of the generated questions
///
/// The variants are ordered from easiest to hardest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for a first pass over the material
    #[display("easy")]
    Easy,
    /// The default level
    #[display("medium")]
    Medium,
    /// Requires close reading of the lesson
    #[display("hard")]
    Hard,
}

/// Language the questions are written in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Language {
    /// Arabic
    #[display("ar")]
    #[serde(rename = "ar")]
    Arabic,
    /// English
    #[display("en")]
    #[serde(rename = "en")]
    English,
    /// German
    #[display("de")]
    #[serde(rename = "de")]
    German,
}

/// Configuration for a quiz-generation request
///
/// Owned by whichever side starts the quiz and transmitted inside
/// `InitQuiz` so both duel participants play against an identical config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuizConfig {
    /// Target number of questions
    #[garde(range(
        min = crate::constants::quiz::MIN_QUESTION_COUNT,
        max = crate::constants::quiz::MAX_QUESTION_COUNT,
    ))]
    pub count: usize,
    /// Requested difficulty level
    #[garde(skip)]
    pub difficulty: Difficulty,
    /// Language the questions should be written in
    #[garde(skip)]
    pub language: Language,
    /// Question types the generator is allowed to produce, never empty
    #[garde(length(min = 1))]
    pub allowed_types: Vec<QuestionType>,
}

impl Default for QuizConfig {
    /// Five medium multiple-choice questions in Arabic, matching the
    /// configuration screen's initial selection
    fn default() -> Self {
        Self {
            count: 5,
            difficulty: Difficulty::Medium,
            language: Language::Arabic,
            allowed_types: vec![QuestionType::MultipleChoice],
        }
    }
}

/// A single generated question
///
/// Produced entirely by the external generation collaborator; the core
/// validates its shape on receipt and treats it as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[garde(context(QuestionContext))]
pub struct Question {
    /// Generator-assigned identifier, unique within one quiz
    #[garde(length(min = 1))]
    pub id: String,
    /// The kind of question this is
    #[garde(skip)]
    pub kind: QuestionType,
    /// The prompt text shown to the player
    #[garde(length(min = 1, max = crate::constants::quiz::MAX_PROMPT_LENGTH))]
    pub prompt: String,
    /// Ordered answer options presented to the player
    #[garde(
        length(max = crate::constants::quiz::MAX_OPTION_COUNT),
        inner(length(max = crate::constants::quiz::MAX_OPTION_LENGTH))
    )]
    pub options: Vec<String>,
    /// The correct answer value
    ///
    /// For choice-type questions this must be one of `options`.
    #[garde(custom(validate_correct_answer))]
    pub correct_answer: String,
}

/// Checks that a choice-type question's correct answer is one of its options
fn validate_correct_answer(value: &str, context: &QuestionContext) -> garde::Result {
    if !context.kind.is_choice() || context.options.iter().any(|o| o == value) {
        Ok(())
    } else {
        Err(garde::Error::new(
            "correct answer is not among the question's options",
        ))
    }
}

/// Validation context for [`Question`]
///
/// Garde passes the whole struct as context so the correct-answer check
/// can see the option list and question kind.
#[derive(Debug)]
pub struct QuestionContext {
    /// The question kind being validated
    kind: QuestionType,
    /// The option list being validated against
    options: Vec<String>,
}

impl From<&Question> for QuestionContext {
    fn from(question: &Question) -> Self {
        Self {
            kind: question.kind,
            options: question.options.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiple_choice(correct: &str) -> Question {
        Question {
            id: "q1".to_owned(),
            kind: QuestionType::MultipleChoice,
            prompt: "What orbits the Earth?".to_owned(),
            options: vec![
                "The Moon".to_owned(),
                "The Sun".to_owned(),
                "Mars".to_owned(),
                "Venus".to_owned(),
            ],
            correct_answer: correct.to_owned(),
        }
    }

    #[test]
    fn test_question_with_listed_answer_is_valid() {
        let question = multiple_choice("The Moon");
        assert!(question.validate_with(&(&question).into()).is_ok());
    }

    #[test]
    fn test_question_with_unlisted_answer_is_invalid() {
        let question = multiple_choice("Jupiter");
        assert!(question.validate_with(&(&question).into()).is_err());
    }

    #[test]
    fn test_fill_blanks_answer_may_be_free_text() {
        let question = Question {
            id: "q2".to_owned(),
            kind: QuestionType::FillBlanks,
            prompt: "Water boils at ___ degrees Celsius.".to_owned(),
            options: vec![],
            correct_answer: "100".to_owned(),
        };
        assert!(question.validate_with(&(&question).into()).is_ok());
    }

    #[test]
    fn test_config_rejects_zero_count() {
        let config = QuizConfig {
            count: 0,
            ..QuizConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_empty_type_set() {
        let config = QuizConfig {
            allowed_types: vec![],
            ..QuizConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = QuizConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"language\":\"ar\""));
        assert!(json.contains("\"multiple_choice\""));

        let back: QuizConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.count, 5);
        assert_eq!(back.allowed_types, vec![QuestionType::MultipleChoice]);
    }
}
