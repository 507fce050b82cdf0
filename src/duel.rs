//! Duel orchestration and progress synchronization
//!
//! This module drives the high-level flow of a two-player duel: role
//! resolution, the lobby, quiz start, answer submission, and the mirrored
//! opponent state. The orchestrator is single-threaded and event-driven:
//! every user action and every inbound message is one atomic transition,
//! and timed transitions use caller-scheduled alarms instead of internal
//! timers.

use log::{debug, info, warn};
use web_time::Duration;

use crate::{
    constants::duel::ANSWER_COOLDOWN,
    player::{Outcome, PlayerState, SubmitError},
    protocol::DuelMessage,
    quiz::{Question, QuizConfig},
    room_code::RoomCode,
    session::Channel,
};

/// The two duel roles
///
/// The host originates the room code and the question set; the guest
/// supplies the code and adopts whatever the host sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    /// Generates a room code and waits for an inbound connection
    Host,
    /// Connects to a host's room code
    Guest,
}

/// The phase of the duel state machine
///
/// Each side progresses through these phases independently; there is no
/// rendezvous, so a faster player reaches `Finished` while the opponent
/// is still `Active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// At the top-level menu, no session underway
    #[default]
    Idle,
    /// Endpoint registered under a room code, awaiting an inbound peer
    Hosting,
    /// Connection attempt to a host's room code underway
    Joining,
    /// Lobby formed, peer connection established, quiz not yet started
    Connected,
    /// Quiz in progress locally
    Active,
    /// Local question list exhausted, reward screen shown
    Finished,
}

/// Alarm messages for timed duel transitions
///
/// Submissions schedule a cooldown alarm through a caller-supplied
/// scheduler; the caller delivers it back after the requested delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AlarmMessage {
    /// The post-answer feedback window for the given question index ended
    CooldownOver {
        /// Value of the local question index when the answer was accepted
        index: usize,
    },
}

/// Errors that can occur when driving the duel
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A role was requested while a session is already underway
    #[error("a duel role can only be chosen from the menu")]
    NotIdle,
    /// The operation needs an established peer connection
    #[error("no peer connection is established")]
    NotConnected,
    /// Only the host may start the quiz
    #[error("only the host can start the quiz")]
    NotHost,
    /// The quiz was already started; `InitQuiz` is sent at most once
    #[error("the quiz has already been started")]
    AlreadyStarted,
    /// An answer was submitted outside an active quiz
    #[error("no quiz is in progress")]
    QuizNotActive,
    /// A quiz cannot start with an empty question list
    #[error("cannot start a quiz without questions")]
    EmptyQuiz,
    /// The submission was rejected by the player-state transition
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// The duel session state machine
///
/// Holds the local participant's authoritative progress and the last
/// received snapshot of the opponent's. The opponent record is only ever
/// replaced wholesale by `Progress` receipt, never locally mutated.
#[derive(Debug, Default)]
pub struct Duel {
    /// Resolved role, `None` until the user picks host or join
    role: Option<Role>,
    /// Current phase of the session
    phase: Phase,
    /// The room code this session listens under or connects to
    room_code: Option<RoomCode>,
    /// The adopted question set, empty until the quiz starts
    questions: Vec<Question>,
    /// The configuration the quiz was generated with
    config: QuizConfig,
    /// The local participant's progress
    local: PlayerState,
    /// Verbatim copy of the peer's last `Progress` snapshot
    opponent: PlayerState,
}

impl Duel {
    /// Creates a new idle session at the top-level menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase of the session
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Resolved role, if one has been chosen
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The room code in use, if a role has been chosen
    pub fn room_code(&self) -> Option<RoomCode> {
        self.room_code
    }

    /// The question set currently being played
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The configuration of the current quiz
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// The local participant's progress
    pub fn local(&self) -> &PlayerState {
        &self.local
    }

    /// The last known opponent progress
    pub fn opponent(&self) -> &PlayerState {
        &self.opponent
    }

    /// Takes the host role and generates the room code
    ///
    /// The caller registers a transport endpoint under the returned code
    /// and reports back with [`Duel::endpoint_open`] once the transport
    /// confirms it is listening; only then does the lobby phase begin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIdle`] if a session is already underway.
    pub fn host(&mut self) -> Result<RoomCode, Error> {
        if !matches!(self.phase, Phase::Idle) || self.role.is_some() {
            return Err(Error::NotIdle);
        }

        let code = RoomCode::new();
        self.role = Some(Role::Host);
        self.room_code = Some(code);
        info!("hosting duel under room code {code}");
        Ok(code)
    }

    /// Takes the guest role with a user-supplied room code
    ///
    /// The caller opens an ephemeral transport endpoint, reports
    /// [`Duel::endpoint_open`], and requests a connection to `code`. The
    /// guest never generates a code of its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIdle`] if a session is already underway.
    pub fn join(&mut self, code: RoomCode) -> Result<(), Error> {
        if !matches!(self.phase, Phase::Idle) || self.role.is_some() {
            return Err(Error::NotIdle);
        }

        self.role = Some(Role::Guest);
        self.room_code = Some(code);
        info!("joining duel room {code}");
        Ok(())
    }

    /// Reports that the local transport endpoint is open
    ///
    /// Moves the session into its lobby phase: `Hosting` for the host,
    /// `Joining` for the guest. Ignored unless a role was chosen first.
    pub fn endpoint_open(&mut self) {
        match (self.phase, self.role) {
            (Phase::Idle, Some(Role::Host)) => self.phase = Phase::Hosting,
            (Phase::Idle, Some(Role::Guest)) => self.phase = Phase::Joining,
            _ => debug!("endpoint_open ignored in phase {:?}", self.phase),
        }
    }

    /// Reports that the peer connection is established
    ///
    /// For the host this is the first inbound connection, for the guest
    /// the completed handshake. Both sides move to the connected lobby and
    /// the opponent record resets for the new duel. Only the first
    /// connection is honored; anything after that is ignored.
    pub fn peer_connected(&mut self) {
        match self.phase {
            Phase::Hosting | Phase::Joining => {
                self.phase = Phase::Connected;
                self.opponent = PlayerState::default();
                info!("peer connected, lobby formed");
            }
            _ => debug!("extra peer connection ignored in phase {:?}", self.phase),
        }
    }

    /// Reports that the connection attempt failed
    ///
    /// The session stays in its current phase so the user can retry or
    /// re-enter the code; there is no automatic retry.
    pub fn connection_failed(&mut self) {
        warn!(
            "connection to room {} failed",
            self.room_code.map_or_else(String::new, |c| c.to_string())
        );
    }

    /// Starts the quiz and hands the question set to the guest
    ///
    /// Host only. Resets the local progress record, sends `InitQuiz` over
    /// the channel, and enters the active phase. The phase transition
    /// guarantees `InitQuiz` goes out at most once per duel.
    ///
    /// # Arguments
    ///
    /// * `questions` - The freshly generated question set
    /// * `config` - The configuration the set was generated with
    /// * `channel` - The channel to the connected guest
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotHost`] on the guest side, [`Error::EmptyQuiz`]
    /// for an empty question list, [`Error::AlreadyStarted`] once the quiz
    /// is underway, and [`Error::NotConnected`] before the lobby is formed.
    pub fn start_quiz<C: Channel>(
        &mut self,
        questions: Vec<Question>,
        config: QuizConfig,
        channel: &C,
    ) -> Result<(), Error> {
        if !matches!(self.role, Some(Role::Host)) {
            return Err(Error::NotHost);
        }
        match self.phase {
            Phase::Connected => {}
            Phase::Active | Phase::Finished => return Err(Error::AlreadyStarted),
            _ => return Err(Error::NotConnected),
        }
        if questions.is_empty() {
            return Err(Error::EmptyQuiz);
        }

        self.local = PlayerState::default();
        self.questions = questions;
        self.config = config;

        channel.send(&DuelMessage::InitQuiz {
            questions: self.questions.clone(),
            config: self.config.clone(),
        });

        self.phase = Phase::Active;
        info!("quiz started with {} questions", self.questions.len());
        Ok(())
    }

    /// Handles a message received from the peer
    ///
    /// Each receipt is one atomic transition. Messages that do not fit the
    /// current phase or role are dropped; the protocol never replies to or
    /// acknowledges them.
    pub fn receive_message(&mut self, message: DuelMessage) {
        match message {
            DuelMessage::InitQuiz { questions, config } => {
                if !matches!(self.role, Some(Role::Guest))
                    || !matches!(self.phase, Phase::Connected)
                {
                    warn!("unexpected InitQuiz dropped in phase {:?}", self.phase);
                    return;
                }

                self.local = PlayerState::default();
                self.questions = questions;
                self.config = config;
                self.phase = Phase::Active;
                info!("adopted quiz with {} questions", self.questions.len());
            }
            DuelMessage::Progress(state) => match self.phase {
                // Late updates still land after the local player finished,
                // so the reward screen shows the opponent's final score.
                Phase::Active | Phase::Finished => self.opponent = state,
                _ => debug!("Progress dropped in phase {:?}", self.phase),
            },
        }
    }

    /// Submits the local player's answer to the current question
    ///
    /// Advances the local progress record, immediately mirrors the full
    /// snapshot to the peer, and schedules the feedback cooldown through
    /// `schedule_alarm`. The caller delivers the alarm back via
    /// [`Duel::receive_alarm`] after the requested delay.
    ///
    /// # Arguments
    ///
    /// * `answer` - The answer value the player picked or typed
    /// * `channel` - The channel to the peer
    /// * `schedule_alarm` - Function to schedule the delayed cooldown alarm
    ///
    /// # Errors
    ///
    /// Returns [`Error::QuizNotActive`] outside the active phase and
    /// propagates [`SubmitError`] rejections from the progress record.
    pub fn submit_answer<C: Channel, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        answer: &str,
        channel: &C,
        mut schedule_alarm: S,
    ) -> Result<Outcome, Error> {
        if !matches!(self.phase, Phase::Active) {
            return Err(Error::QuizNotActive);
        }

        let outcome = self.local.submit_answer(&self.questions, answer)?;

        channel.send(&DuelMessage::Progress(self.local.clone()));
        schedule_alarm(
            AlarmMessage::CooldownOver {
                index: self.local.current_question_index,
            },
            ANSWER_COOLDOWN,
        );

        Ok(outcome)
    }

    /// Handles a scheduled cooldown alarm
    ///
    /// Clears the transient feedback and releases the submission lock, or
    /// moves to the reward phase if the submission finished the quiz.
    /// Alarms whose index no longer matches the local progress are stale
    /// and ignored.
    pub fn receive_alarm(&mut self, message: AlarmMessage) {
        let AlarmMessage::CooldownOver { index } = message;

        if !matches!(self.phase, Phase::Active) || self.local.current_question_index != index {
            return;
        }

        self.local.end_cooldown();
        if self.local.is_finished {
            self.phase = Phase::Finished;
            info!("local player finished with score {}", self.local.score);
        }
    }

    /// Returns to the top-level menu and tears the session down
    ///
    /// Closes the channel if one is still open and discards all session
    /// state. This is the only exit from the finished phase, and it is
    /// valid from any phase.
    pub fn leave<C: Channel>(&mut self, channel: Option<C>) {
        if let Some(channel) = channel {
            channel.close();
        }
        *self = Self::default();
        info!("returned to menu");
    }
}
