//! Session failure taxonomy
//!
//! Every variant is terminal for the session; nothing is retried.

use crate::solver::{Exhausted, FilterError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Connection failure or the peer hanging up mid-game
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Unexpected message kind for the current phase, or an undecodable line
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("malformed feedback: {0}")]
    MalformedFeedback(#[from] FilterError),

    #[error("no candidate words remain before the solution was found")]
    Exhausted,

    /// The server sent an explicit `error` message
    #[error("server error: {0}")]
    Server(String),
}

impl From<Exhausted> for SessionError {
    fn from(_: Exhausted) -> Self {
        Self::Exhausted
    }
}

impl SessionError {
    pub(crate) fn violation(reason: impl Into<String>) -> Self {
        Self::ProtocolViolation(reason.into())
    }
}
