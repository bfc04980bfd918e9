//! Newline-delimited JSON messages
//!
//! Each message is one JSON object on one line, tagged by its `"type"` field.
//! Fields the client does not use are ignored on decode.

use crate::core::Marks;
use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned guess-round identifier
///
/// Opaque: kept as raw JSON so it is echoed back exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessId(serde_json::Value);

impl GuessId {
    #[must_use]
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for GuessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => write!(f, "{s}"),
            other => write!(f, "{other}"),
        }
    }
}

/// One entry of the guess history carried by `retry`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: String,
    pub marks: Marks,
}

/// Messages sent by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Start {
        id: GuessId,
    },
    Retry {
        id: GuessId,
        guesses: Vec<GuessRecord>,
    },
    Bye {
        flag: String,
    },
    Error {
        msg: String,
    },
}

impl ServerMessage {
    /// The wire tag of this message
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Retry { .. } => "retry",
            Self::Bye { .. } => "bye",
            Self::Error { .. } => "error",
        }
    }
}

/// Messages sent by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    Hello { northeastern_username: String },
    Guess { id: GuessId, word: String },
}

/// Serialize a client message as a single line, without the trailing newline
///
/// # Errors
/// Returns `SessionError::ProtocolViolation` if serialization fails.
pub fn encode(message: &ClientMessage) -> Result<String, SessionError> {
    serde_json::to_string(message)
        .map_err(|e| SessionError::violation(format!("cannot encode {message:?}: {e}")))
}

/// Parse one line received from the server
///
/// Unknown `type` tags, missing fields, bad marks, non-JSON text and bytes
/// that are not UTF-8 all fail.
///
/// # Errors
/// Returns `SessionError::ProtocolViolation` describing the offending line.
///
/// # Examples
/// ```
/// use wordle_client::protocol::{decode, ServerMessage};
///
/// let msg = decode(r#"{"type": "bye", "id": "x", "flag": "abc123"}"#).unwrap();
/// assert_eq!(msg, ServerMessage::Bye { flag: "abc123".into() });
///
/// assert!(decode(r#"{"type": "shrug"}"#).is_err());
/// ```
pub fn decode(line: impl AsRef<[u8]>) -> Result<ServerMessage, SessionError> {
    let line = line.as_ref();
    serde_json::from_slice(line).map_err(|e| {
        SessionError::violation(format!(
            "cannot decode {:?}: {e}",
            String::from_utf8_lossy(line)
        ))
    })
}
