//! Wire protocol and the per-connection state machine

pub mod message;
pub mod session;

pub use message::{ClientMessage, GuessId, GuessRecord, ServerMessage, decode, encode};
pub use session::{Action, Outcome, Phase, Session};
