//! Quiz generation collaborator contract
//!
//! Quiz content comes from an external generative AI service; this module
//! only specifies its boundary. A [`QuizGenerator`] turns a photographed
//! or pasted lesson plus a [`QuizConfig`] into questions, and
//! [`check_generated`] verifies the returned set against the requested
//! configuration before the core adopts it. Generation failure is
//! non-fatal: the caller surfaces the error and returns the user to the
//! configuration step.

use garde::Validate;
use itertools::Itertools;

use crate::quiz::{Question, QuizConfig};

/// Lesson material handed to the generation service
#[derive(Debug, Clone)]
pub enum SourceMaterial {
    /// A photographed lesson, base64-encoded JPEG payload
    Image(String),
    /// Free text pasted by the user
    Text(String),
}

/// Errors that can occur when producing a quiz
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The generation service could not be reached or refused the request
    #[error("quiz generation request failed: {0}")]
    Service(String),
    /// The service response could not be decoded into questions
    #[error("quiz generation returned a malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The generated set does not match the requested configuration
    #[error("generated quiz does not match the requested configuration: {0}")]
    Mismatch(String),
}

/// Contract for the external quiz generation service
///
/// Implementations wrap the actual AI client; prompt and schema
/// construction live entirely on their side of the boundary.
pub trait QuizGenerator {
    /// Generates a quiz from lesson material
    ///
    /// The returned set is expected to satisfy [`check_generated`] for the
    /// same config; callers should run the check before adopting it.
    ///
    /// # Arguments
    ///
    /// * `source` - The lesson material to build questions from
    /// * `config` - Count, difficulty, language and allowed types
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the service fails or responds with
    /// something that cannot be decoded.
    fn generate(&self, source: &SourceMaterial, config: &QuizConfig)
    -> Result<Vec<Question>, Error>;
}

/// Verifies a generated question set against the requested configuration
///
/// Checks the count, that every question uses an allowed type, that ids
/// are unique within the set, and that each question is individually
/// well-formed (including the correct answer being listed for choice-type
/// questions).
///
/// # Errors
///
/// Returns [`Error::Mismatch`] describing the first violation found.
pub fn check_generated(questions: &[Question], config: &QuizConfig) -> Result<(), Error> {
    if questions.len() != config.count {
        return Err(Error::Mismatch(format!(
            "requested {} questions, got {}",
            config.count,
            questions.len()
        )));
    }

    if let Some(question) = questions
        .iter()
        .find(|q| !config.allowed_types.contains(&q.kind))
    {
        return Err(Error::Mismatch(format!(
            "question {} has disallowed type {:?}",
            question.id, question.kind
        )));
    }

    if let Some(id) = questions.iter().map(|q| q.id.as_str()).duplicates().next() {
        return Err(Error::Mismatch(format!("duplicate question id {id}")));
    }

    for question in questions {
        question
            .validate_with(&question.into())
            .map_err(|report| Error::Mismatch(format!("question {}: {report}", question.id)))?;
    }

    Ok(())
}
