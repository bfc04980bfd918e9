//! Control loop
//!
//! Pulls one line at a time from the transport and feeds it to the session,
//! finishing each message (filter, selection, send) before reading the next.

use crate::config::ClientConfig;
use crate::core::Word;
use crate::error::SessionError;
use crate::protocol::{Action, ClientMessage, Outcome, Session, decode, encode};
use crate::transport::{self, Transport};
use log::{debug, info, warn};
use std::io;

/// Connect, play one game, and report how it ended
///
/// The session is created once the transport is ready.
#[must_use]
pub fn play(config: &ClientConfig, dictionary: &[Word]) -> Outcome {
    info!(
        "Connecting to {}:{} as {} with {} words",
        config.hostname,
        config.port,
        config.username,
        dictionary.len()
    );

    match transport::connect(config) {
        Ok(mut transport) => {
            let session = Session::new(dictionary, &config.username, config.first_word.clone());
            run(&mut transport, session)
        }
        Err(err) => Outcome::Failed(SessionError::Transport(err)),
    }
}

/// Drive `session` over `transport` until it ends
///
/// The transport is closed exactly once, whatever the outcome.
pub fn run<T: Transport>(transport: &mut T, mut session: Session<'_>) -> Outcome {
    let mut action = session.greet();

    loop {
        match action {
            Action::Send(message) => {
                if let Err(err) = send(transport, &message) {
                    session.fail(err);
                }
            }
            Action::Close | Action::Ignore => {}
        }

        if session.phase().is_terminal() {
            break;
        }

        action = match transport.recv() {
            Ok(Some(line)) => {
                debug!("<- {}", String::from_utf8_lossy(&line));
                match decode(&line) {
                    Ok(message) => session.handle(message),
                    Err(err) => {
                        session.fail(err);
                        Action::Close
                    }
                }
            }
            Ok(None) => {
                session.fail(SessionError::Transport(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed before the game finished",
                )));
                Action::Close
            }
            Err(err) => {
                session.fail(SessionError::Transport(err));
                Action::Close
            }
        };
    }

    if let Err(err) = transport.close() {
        warn!("error while closing connection: {err}");
    }
    session.into_outcome()
}

fn send<T: Transport>(transport: &mut T, message: &ClientMessage) -> Result<(), SessionError> {
    let line = encode(message)?;
    info!("-> {line}");
    transport.send(&line)?;
    Ok(())
}
