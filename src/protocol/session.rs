//! Per-connection game state machine
//!
//! ```text
//! Connecting -> AwaitingStart -> AwaitingFeedback <-> AwaitingFeedback -> Done | Failed
//! ```
//!
//! The session owns the candidate set, the last guessed word and the
//! outstanding guess id. It never touches the network: every transition
//! returns an [`Action`] for the caller to carry out.

use super::message::{ClientMessage, GuessId, GuessRecord, ServerMessage};
use crate::core::Word;
use crate::error::SessionError;
use crate::solver::{filter_candidates, select_guess};
use log::{debug, info, warn};
use std::fmt;

/// Where the exchange currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Connecting,
    AwaitingStart,
    AwaitingFeedback,
    Done,
    Failed,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connecting => "connecting",
            Self::AwaitingStart => "awaiting start",
            Self::AwaitingFeedback => "awaiting feedback",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// How the session ended
#[derive(Debug)]
pub enum Outcome {
    Solved { flag: String, rounds: usize },
    Failed(SessionError),
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// What the caller must do after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Send(ClientMessage),
    Close,
    /// The session already ended; the message is dropped
    Ignore,
}

/// State for one game exchange over one connection
///
/// Candidates borrow from the shared, read-only dictionary.
#[derive(Debug)]
pub struct Session<'d> {
    username: String,
    first_word: Word,
    phase: Phase,
    candidates: Vec<&'d Word>,
    last_guess: Option<Word>,
    outstanding: Option<GuessId>,
    rounds: usize,
    outcome: Option<Outcome>,
}

impl<'d> Session<'d> {
    /// Create a session over `dictionary`, opening with `first_word`
    #[must_use]
    pub fn new(dictionary: &'d [Word], username: impl Into<String>, first_word: Word) -> Self {
        Self {
            username: username.into(),
            first_word,
            phase: Phase::Connecting,
            candidates: dictionary.iter().collect(),
            last_guess: None,
            outstanding: None,
            rounds: 0,
            outcome: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'d Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn last_guess(&self) -> Option<&Word> {
        self.last_guess.as_ref()
    }

    #[must_use]
    pub const fn outstanding(&self) -> Option<&GuessId> {
        self.outstanding.as_ref()
    }

    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Consume the session, yielding its outcome
    ///
    /// A session that never reached a terminal phase reports a protocol
    /// violation.
    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        self.outcome.unwrap_or_else(|| {
            Outcome::Failed(SessionError::violation(format!(
                "session stopped while {}",
                self.phase
            )))
        })
    }

    /// The transport is ready: introduce ourselves
    pub fn greet(&mut self) -> Action {
        if self.phase != Phase::Connecting {
            self.fail(SessionError::violation(format!(
                "greeting sent while {}",
                self.phase
            )));
            return Action::Close;
        }

        self.phase = Phase::AwaitingStart;
        Action::Send(ClientMessage::Hello {
            northeastern_username: self.username.clone(),
        })
    }

    /// Advance on one inbound message
    pub fn handle(&mut self, message: ServerMessage) -> Action {
        if self.phase.is_terminal() {
            debug!("ignoring {} message after session ended", message.kind());
            return Action::Ignore;
        }

        match self.step(message) {
            Ok(action) => action,
            Err(err) => {
                self.fail(err);
                Action::Close
            }
        }
    }

    /// Record a failure raised outside the state machine
    ///
    /// Has no effect once the session has ended.
    pub fn fail(&mut self, err: SessionError) {
        if self.phase.is_terminal() {
            debug!("session already ended, dropping: {err}");
            return;
        }

        warn!("session failed while {}: {err}", self.phase);
        self.phase = Phase::Failed;
        self.outcome = Some(Outcome::Failed(err));
    }

    fn step(&mut self, message: ServerMessage) -> Result<Action, SessionError> {
        match (self.phase, message) {
            (Phase::AwaitingStart, ServerMessage::Start { id }) => {
                info!("game started (id {id})");
                let opening = self.first_word.clone();
                Ok(self.send_guess(id, opening))
            }
            (Phase::AwaitingFeedback, ServerMessage::Retry { id, guesses }) => {
                self.on_retry(id, &guesses)
            }
            (Phase::AwaitingFeedback, ServerMessage::Bye { flag }) => {
                info!("game completed after {} guesses", self.rounds);
                self.phase = Phase::Done;
                self.outcome = Some(Outcome::Solved {
                    flag,
                    rounds: self.rounds,
                });
                Ok(Action::Close)
            }
            (Phase::AwaitingStart | Phase::AwaitingFeedback, ServerMessage::Error { msg }) => {
                Err(SessionError::Server(msg))
            }
            (phase, other) => Err(SessionError::violation(format!(
                "unexpected {} message while {phase}",
                other.kind()
            ))),
        }
    }

    fn on_retry(&mut self, id: GuessId, guesses: &[GuessRecord]) -> Result<Action, SessionError> {
        let latest = guesses
            .last()
            .ok_or_else(|| SessionError::violation("retry carried no guess history"))?;
        let last = self
            .last_guess
            .as_ref()
            .ok_or_else(|| SessionError::violation("retry before any guess was sent"))?;

        if latest.word != last.text() {
            warn!(
                "server reports feedback for {:?} but we guessed {last}; filtering on {last}",
                latest.word
            );
        }
        info!(
            "feedback for {last}: {} ({} correct, {} present)",
            latest.marks.to_emoji(),
            latest.marks.count_correct(),
            latest.marks.count_present()
        );

        let before = self.candidates.len();
        let remaining = filter_candidates(&self.candidates, last, &latest.marks)?;
        debug!("candidates {before} -> {}", remaining.len());

        // All correct but not finished yet: repeat the word and wait for bye
        let next = if latest.marks.is_perfect() {
            info!("every letter correct, repeating {last}");
            last.clone()
        } else {
            select_guess(&remaining)?.clone()
        };

        self.candidates = remaining;
        Ok(self.send_guess(id, next))
    }

    fn send_guess(&mut self, id: GuessId, word: Word) -> Action {
        self.rounds += 1;
        info!(
            "guess #{} (id {id}): {word} from {} candidates",
            self.rounds,
            self.candidates.len()
        );

        let message = ClientMessage::Guess {
            id: id.clone(),
            word: word.text().to_owned(),
        };
        self.outstanding = Some(id);
        self.last_guess = Some(word);
        self.phase = Phase::AwaitingFeedback;
        Action::Send(message)
    }
}
