//! Per-participant progress state
//!
//! This module contains the authoritative progress record for one quiz
//! participant. Two instances live during a duel: the local player's own
//! state, advanced only by local answer submissions, and the opponent's
//! state, which is only ever overwritten wholesale by received `Progress`
//! messages and never locally mutated.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::quiz::Question;

/// Transient per-answer feedback shown to the player
///
/// This is UI-facing state carried along with the progress record; it is
/// not required for protocol correctness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    /// No feedback is being displayed
    #[default]
    None,
    /// The last submission was correct
    Correct,
    /// The last submission was wrong
    Wrong,
    /// The player is considering the current question
    Thinking,
}

/// Outcome of a single accepted answer submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the submitted answer matched the correct one
    pub correct: bool,
    /// Whether this submission exhausted the question list
    pub finished: bool,
}

/// Errors that can occur when submitting an answer
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The feedback cooldown from the previous answer is still running
    #[error("submission rejected while the feedback cooldown is running")]
    CoolingDown,
    /// Every question has already been answered
    #[error("the quiz is already finished")]
    Finished,
}

/// Progress record for one quiz participant
///
/// Created with all fields at their zero defaults at the start of every
/// quiz attempt, solo or duel, and discarded when the player returns to
/// the menu. Serialized verbatim as the payload of `Progress` messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Count of correct answers so far, never decremented
    pub score: u64,
    /// Zero-based index of the next question to answer
    ///
    /// Monotonically increasing, bounded by the question count. Only the
    /// local submission transition advances it; message receipt never does.
    pub current_question_index: usize,
    /// Attempt count per question identifier
    ///
    /// Present in the model but not written by any current transition;
    /// reserved for retry tracking.
    pub attempts: HashMap<String, u64>,
    /// True exactly when every question has been answered
    pub is_finished: bool,
    /// True while the post-answer feedback cooldown is running
    ///
    /// Acts as a debounce lock: submissions are rejected while set.
    pub is_waiting: bool,
    /// Feedback currently displayed for the last action
    pub last_action_status: ActionStatus,
}

impl PlayerState {
    /// Submits an answer to the current question
    ///
    /// On acceptance the score is incremented for a correct answer, the
    /// question index advances by one, the feedback cooldown starts, and
    /// completion is recorded once the index reaches the question count.
    /// The caller is expected to call [`PlayerState::end_cooldown`] after
    /// [`crate::constants::duel::ANSWER_COOLDOWN`] has elapsed.
    ///
    /// # Arguments
    ///
    /// * `questions` - The quiz being played
    /// * `answer` - The player's answer value
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::CoolingDown`] while `is_waiting` is set and
    /// [`SubmitError::Finished`] once the question list is exhausted.
    pub fn submit_answer(
        &mut self,
        questions: &[Question],
        answer: &str,
    ) -> Result<Outcome, SubmitError> {
        if self.is_waiting {
            return Err(SubmitError::CoolingDown);
        }

        let Some(question) = questions.get(self.current_question_index) else {
            return Err(SubmitError::Finished);
        };

        let correct = question.correct_answer == answer;
        if correct {
            self.score += 1;
        }

        self.current_question_index += 1;
        self.is_finished = self.current_question_index >= questions.len();
        self.is_waiting = true;
        self.last_action_status = if correct {
            ActionStatus::Correct
        } else {
            ActionStatus::Wrong
        };

        Ok(Outcome {
            correct,
            finished: self.is_finished,
        })
    }

    /// Ends the feedback-display cooldown
    ///
    /// Clears the transient feedback and, unless the quiz is finished,
    /// releases the submission lock. A finished player stays locked; the
    /// record is discarded on return to the menu, not reused.
    pub fn end_cooldown(&mut self) {
        self.last_action_status = ActionStatus::None;
        if !self.is_finished {
            self.is_waiting = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionType;

    fn quiz(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| Question {
                id: format!("q{i}"),
                kind: QuestionType::MultipleChoice,
                prompt: format!("Question {i}?"),
                options: vec!["right".to_owned(), "wrong".to_owned()],
                correct_answer: "right".to_owned(),
            })
            .collect()
    }

    fn answer_and_release(
        state: &mut PlayerState,
        questions: &[Question],
        answer: &str,
    ) -> Outcome {
        let outcome = state.submit_answer(questions, answer).unwrap();
        state.end_cooldown();
        outcome
    }

    #[test]
    fn test_score_counts_correct_submissions() {
        let questions = quiz(4);
        let mut state = PlayerState::default();

        answer_and_release(&mut state, &questions, "right");
        answer_and_release(&mut state, &questions, "wrong");
        answer_and_release(&mut state, &questions, "right");
        answer_and_release(&mut state, &questions, "nonsense");

        assert_eq!(state.score, 2);
        assert!(state.score <= questions.len() as u64);
        assert!(state.is_finished);
    }

    #[test]
    fn test_index_advances_by_one_per_submission() {
        let questions = quiz(3);
        let mut state = PlayerState::default();

        for expected in 1..=3 {
            answer_and_release(&mut state, &questions, "right");
            assert_eq!(state.current_question_index, expected);
        }

        assert!(state.is_finished);
    }

    #[test]
    fn test_finished_iff_index_reaches_total() {
        let questions = quiz(2);
        let mut state = PlayerState::default();

        answer_and_release(&mut state, &questions, "right");
        assert!(!state.is_finished);

        answer_and_release(&mut state, &questions, "right");
        assert!(state.is_finished);
        assert_eq!(state.current_question_index, questions.len());
    }

    #[test]
    fn test_waiting_rejects_second_submission() {
        let questions = quiz(3);
        let mut state = PlayerState::default();

        state.submit_answer(&questions, "right").unwrap();
        let before = state.clone();

        assert_eq!(
            state.submit_answer(&questions, "right"),
            Err(SubmitError::CoolingDown)
        );
        assert_eq!(state.score, before.score);
        assert_eq!(state.current_question_index, before.current_question_index);
    }

    #[test]
    fn test_submission_after_finish_is_rejected() {
        let questions = quiz(1);
        let mut state = PlayerState::default();

        answer_and_release(&mut state, &questions, "right");
        state.is_waiting = false;

        assert_eq!(
            state.submit_answer(&questions, "right"),
            Err(SubmitError::Finished)
        );
    }

    #[test]
    fn test_feedback_follows_correctness() {
        let questions = quiz(2);
        let mut state = PlayerState::default();

        state.submit_answer(&questions, "right").unwrap();
        assert_eq!(state.last_action_status, ActionStatus::Correct);
        state.end_cooldown();
        assert_eq!(state.last_action_status, ActionStatus::None);

        state.submit_answer(&questions, "wrong").unwrap();
        assert_eq!(state.last_action_status, ActionStatus::Wrong);
    }

    #[test]
    fn test_cooldown_keeps_finished_player_locked() {
        let questions = quiz(1);
        let mut state = PlayerState::default();

        state.submit_answer(&questions, "right").unwrap();
        state.end_cooldown();

        assert!(state.is_finished);
        assert!(state.is_waiting);
    }

    #[test]
    fn test_scenario_one_correct_one_wrong_then_finish() {
        // Scenario: 3-question quiz, correct on the first, wrong on the
        // second; the final score is 1 and the quiz only finishes once the
        // index reaches 3 regardless of the last outcome.
        let questions = quiz(3);
        let mut state = PlayerState::default();

        answer_and_release(&mut state, &questions, "right");
        answer_and_release(&mut state, &questions, "wrong");
        assert!(!state.is_finished);

        answer_and_release(&mut state, &questions, "wrong");
        assert_eq!(state.score, 1);
        assert!(state.is_finished);
    }

    #[test]
    fn test_attempts_never_written() {
        let questions = quiz(2);
        let mut state = PlayerState::default();

        answer_and_release(&mut state, &questions, "right");
        answer_and_release(&mut state, &questions, "wrong");

        assert!(state.attempts.is_empty());
    }

    #[test]
    fn test_state_serialization_round_trip() {
        let questions = quiz(2);
        let mut state = PlayerState::default();
        state.submit_answer(&questions, "right").unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let back: PlayerState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
