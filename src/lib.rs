//! # QuizSnap Core Library
//!
//! This library provides the core logic for the QuizSnap quiz game: the
//! per-participant progress model, the host/guest role resolution, the
//! two-message duel synchronization protocol over a direct peer channel,
//! and the contracts for the external quiz-generation, history and audio
//! collaborators. Rendering, localization and the actual transport and AI
//! clients live in the embedding application.
//!
//! A duel is deliberately simple: the host sends the question set once,
//! and afterwards each side mirrors its own full progress snapshot to the
//! other after every answer, last message wins. The channel is assumed to
//! deliver in send order; the protocol adds no sequencing of its own.

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
pub mod duel;
pub mod generate;
pub mod history;
pub mod player;
pub mod protocol;
pub mod quiz;
pub mod room_code;
pub mod session;
pub mod sound;

pub use duel::{Duel, Phase, Role};
pub use player::PlayerState;
pub use protocol::DuelMessage;
pub use quiz::{Question, QuizConfig};
pub use room_code::RoomCode;
pub use session::Channel;
