//! Error types for the session layer.

use skylords_protocol::{ProtocolError, Tick};

use crate::Phase;

/// Errors a session can return while sequencing host requests.
///
/// These never describe in-game refusals. A refused command arrives as a
/// `RejectedCommand` on a later tick and is ordinary data.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The handshake named a protocol version this crate does not speak.
    /// The session moves to [`Phase::Rejected`].
    #[error("protocol version mismatch: expected {expected}, got {got}")]
    VersionMismatch { expected: u64, got: u64 },

    /// The host picked a deck name the bot never offered for this map.
    #[error("unknown deck {0:?}")]
    UnknownDeck(String),

    /// A request arrived in the wrong phase, e.g. a tick before start.
    #[error("unexpected request in phase {phase}, expected {expected}")]
    UnexpectedPhase { phase: Phase, expected: Phase },

    /// A tick older than one already answered.
    #[error("stale tick {got}, last answered {last}")]
    StaleTick { last: Tick, got: Tick },

    /// The last handshake failed; only a new hello is accepted.
    #[error("session rejected, waiting for a new handshake")]
    Rejected,

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
