//! Process-scoped audio session
//!
//! Playback itself is an external concern; this module owns the policy
//! around it. An [`AudioSession`] wraps a playback backend and enforces
//! the contract the game relies on: at most one looping track is ever
//! active, switching tracks stops the old one first, `stop` silences
//! immediately, and muting suppresses one-shot effects while the looping
//! track keeps its position.

use serde::{Deserialize, Serialize};

/// The sounds the game can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundKind {
    /// Looping quiz background music
    Background,
    /// Looping background music for the balloon mini-game
    MinigameBackground,
    /// Correct-answer chime
    Correct,
    /// Wrong-answer buzz
    Wrong,
    /// Balloon pop effect
    Pop,
    /// End-of-quiz fanfare
    Win,
    /// Countdown tick
    Tick,
}

impl SoundKind {
    /// Whether this sound plays as a looping background track
    pub fn is_looping(self) -> bool {
        matches!(self, Self::Background | Self::MinigameBackground)
    }
}

/// Contract for the actual audio output
///
/// Implementations wrap whatever playback facility the platform offers.
pub trait Playback {
    /// Starts a looping track from the beginning
    fn start_loop(&mut self, kind: SoundKind);
    /// Plays a one-shot effect
    fn play_once(&mut self, kind: SoundKind);
    /// Stops the looping track, if any
    fn stop_loop(&mut self);
    /// Applies the mute state to the looping track
    fn set_muted(&mut self, muted: bool);
}

/// The single audio session of the process
///
/// Owns the one active looping-track reference; everything audible goes
/// through here.
#[derive(Debug)]
pub struct AudioSession<P: Playback> {
    /// The playback backend
    backend: P,
    /// The currently looping track, if any
    active_loop: Option<SoundKind>,
    /// Whether output is muted
    muted: bool,
}

impl<P: Playback> AudioSession<P> {
    /// Creates a silent, unmuted session over the given backend
    pub fn new(backend: P) -> Self {
        Self {
            backend,
            active_loop: None,
            muted: false,
        }
    }

    /// The currently looping track, if any
    pub fn active_loop(&self) -> Option<SoundKind> {
        self.active_loop
    }

    /// Whether output is muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Plays a sound
    ///
    /// Looping kinds replace the active track unless it is already the
    /// one playing; one-shot kinds play immediately unless muted. Looping
    /// tracks start even while muted so unmuting resumes them mid-game.
    ///
    /// # Arguments
    ///
    /// * `kind` - The sound to play
    pub fn play(&mut self, kind: SoundKind) {
        if kind.is_looping() {
            if self.active_loop == Some(kind) {
                return;
            }
            if self.active_loop.is_some() {
                self.backend.stop_loop();
            }
            self.backend.start_loop(kind);
            self.backend.set_muted(self.muted);
            self.active_loop = Some(kind);
        } else if !self.muted {
            self.backend.play_once(kind);
        }
    }

    /// Stops the looping track immediately
    pub fn stop(&mut self) {
        if self.active_loop.take().is_some() {
            self.backend.stop_loop();
        }
    }

    /// Sets the mute state
    ///
    /// # Arguments
    ///
    /// * `muted` - Whether to silence output
    pub fn mute(&mut self, muted: bool) {
        self.muted = muted;
        self.backend.set_muted(muted);
    }
}
