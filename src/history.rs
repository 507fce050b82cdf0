//! Completed-quiz history
//!
//! This module holds the record types for the persistent history feature:
//! an append-only list of the most recent completed quiz attempts, newest
//! first, capped at ten entries. The core only shapes the data; reading it
//! at startup and writing it after every completed quiz is the embedding
//! application's job, so the whole list serializes as one JSON value.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;
use web_time::SystemTime;

use crate::{
    constants::history::{MAX_SAVED_QUIZZES, MAX_TITLE_LENGTH},
    quiz::{Question, QuizConfig},
};

/// A completed quiz attempt retained for replay
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQuiz {
    /// Unique identifier of this history entry
    pub id: Uuid,
    /// When the quiz was created
    pub created_at: SystemTime,
    /// Short display title derived from the first question
    pub title: String,
    /// The full question set, replayable as a solo quiz
    pub questions: Vec<Question>,
    /// The configuration the quiz was generated with
    pub config: QuizConfig,
    /// Best score achieved on this quiz, if recorded
    pub best_score: Option<u64>,
}

impl SavedQuiz {
    /// Creates a history entry for a freshly generated quiz
    ///
    /// The title is the first question's prompt truncated to a fixed
    /// length, with an ellipsis when anything was cut off.
    pub fn new(questions: Vec<Question>, config: QuizConfig) -> Self {
        let title = questions
            .first()
            .map_or_else(String::new, |q| truncate_title(&q.prompt));

        Self {
            id: Uuid::new_v4(),
            created_at: SystemTime::now(),
            title,
            questions,
            config,
            best_score: None,
        }
    }
}

/// Truncates a prompt to the history title length, by characters
fn truncate_title(prompt: &str) -> String {
    if prompt.chars().count() <= MAX_TITLE_LENGTH {
        prompt.to_owned()
    } else {
        let mut title: String = prompt.chars().take(MAX_TITLE_LENGTH).collect();
        title.push_str("...");
        title
    }
}

/// The capped list of recently completed quizzes, newest first
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<SavedQuiz>,
}

impl History {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed quiz, evicting the oldest entry past the cap
    ///
    /// # Arguments
    ///
    /// * `saved` - The entry to prepend
    pub fn push(&mut self, saved: SavedQuiz) {
        self.entries.insert(0, saved);
        self.entries.truncate(MAX_SAVED_QUIZZES);
    }

    /// The retained entries, newest first
    pub fn entries(&self) -> &[SavedQuiz] {
        &self.entries
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no quiz has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionType;

    fn quiz(prompt: &str) -> Vec<Question> {
        vec![Question {
            id: "q0".to_owned(),
            kind: QuestionType::MultipleChoice,
            prompt: prompt.to_owned(),
            options: vec!["right".to_owned(), "wrong".to_owned()],
            correct_answer: "right".to_owned(),
        }]
    }

    #[test]
    fn test_title_comes_from_first_question() {
        let saved = SavedQuiz::new(quiz("Short prompt?"), QuizConfig::default());
        assert_eq!(saved.title, "Short prompt?");
    }

    #[test]
    fn test_long_title_is_truncated_with_ellipsis() {
        let prompt = "Which of the following rivers is the longest river on Earth?";
        let saved = SavedQuiz::new(quiz(prompt), QuizConfig::default());

        assert_eq!(saved.title.chars().count(), MAX_TITLE_LENGTH + 3);
        assert!(saved.title.ends_with("..."));
        assert!(prompt.starts_with(saved.title.trim_end_matches("...")));
    }

    #[test]
    fn test_history_keeps_newest_first() {
        let mut history = History::new();
        history.push(SavedQuiz::new(quiz("First?"), QuizConfig::default()));
        history.push(SavedQuiz::new(quiz("Second?"), QuizConfig::default()));

        assert_eq!(history.entries()[0].title, "Second?");
        assert_eq!(history.entries()[1].title, "First?");
    }

    #[test]
    fn test_history_caps_at_ten_entries() {
        let mut history = History::new();
        for i in 0..15 {
            history.push(SavedQuiz::new(quiz(&format!("Q{i}?")), QuizConfig::default()));
        }

        assert_eq!(history.len(), MAX_SAVED_QUIZZES);
        assert_eq!(history.entries()[0].title, "Q14?");
        assert_eq!(history.entries()[9].title, "Q5?");
    }

    #[test]
    fn test_history_serialization_round_trip() {
        let mut history = History::new();
        history.push(SavedQuiz::new(quiz("Round trip?"), QuizConfig::default()));

        let json = serde_json::to_string(&history).unwrap();
        let back: History = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.entries()[0].title, "Round trip?");
        assert_eq!(back.entries()[0].id, history.entries()[0].id);
    }
}
