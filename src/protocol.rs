//! Duel wire protocol
//!
//! This module defines the two messages exchanged between duel peers and
//! their JSON encoding. The message set is exhaustive: quiz adoption is
//! driven by `InitQuiz`, progress mirroring by `Progress`, and nothing
//! else crosses the wire. Each variant carries its own strongly-typed
//! payload, so receipt needs no runtime shape-checking beyond decoding.

use serde::{Deserialize, Serialize};

use crate::{
    player::PlayerState,
    quiz::{Question, QuizConfig},
};

/// Messages exchanged between the two duel participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DuelMessage {
    /// Hands the guest the question set and config, sent by the host
    /// exactly once per duel after generation succeeds
    InitQuiz {
        /// The generated question set, adopted verbatim by the guest
        questions: Vec<Question>,
        /// The configuration the quiz was generated with
        config: QuizConfig,
    },
    /// Full snapshot of the sender's own progress, sent once per answer
    ///
    /// The receiver overwrites its stored opponent state with the payload;
    /// last message wins, there is no merge.
    Progress(PlayerState),
}

/// Errors that can occur when decoding a received message
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The payload is not a valid JSON encoding of a duel message
    #[error("malformed duel message: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl DuelMessage {
    /// Converts the message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }

    /// Decodes a message received from the peer
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] if the payload is not a valid encoding
    /// of either message kind.
    pub fn from_message(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }
}
