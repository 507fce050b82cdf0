//! Configuration constants for the QuizSnap game system
//!
//! This module contains all the configuration limits and constraints
//! used throughout the crate to ensure data integrity and provide
//! consistent boundaries for different components.

/// Quiz content configuration constants
pub mod quiz {
    /// Minimum number of questions that can be requested for a quiz
    pub const MIN_QUESTION_COUNT: usize = 1;
    /// Maximum number of questions that can be requested for a quiz
    pub const MAX_QUESTION_COUNT: usize = 20;
    /// Maximum length of a question prompt in characters
    pub const MAX_PROMPT_LENGTH: usize = 400;
    /// Maximum number of answer options for a single question
    pub const MAX_OPTION_COUNT: usize = 8;
    /// Maximum length of a single answer option in characters
    pub const MAX_OPTION_LENGTH: usize = 200;
}

/// Duel synchronization configuration constants
pub mod duel {
    use web_time::Duration;

    /// Fixed feedback-display cooldown after every answer submission
    ///
    /// While the cooldown is pending the player's `is_waiting` flag gates
    /// further submissions, preventing double-scoring from rapid input.
    pub const ANSWER_COOLDOWN: Duration = Duration::from_millis(800);
}

/// Room code configuration constants
pub mod room_code {
    /// Smallest valid room code (inclusive), the first 6-digit number
    pub const MIN_VALUE: u32 = 100_000;
    /// Largest valid room code (inclusive)
    pub const MAX_VALUE: u32 = 999_999;
}

/// Quiz history configuration constants
pub mod history {
    /// Number of completed quizzes retained in the history list
    pub const MAX_SAVED_QUIZZES: usize = 10;
    /// Length the history title is truncated to, in characters
    pub const MAX_TITLE_LENGTH: usize = 30;
}
