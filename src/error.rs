#![cfg(feature = "std")]

use std::io;

use crate::protocol::{CodecError, OrderKind};

pub type Result<T> = std::result::Result<T, ChaserError>;

/// Why the client and server no longer agree on where the turn is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Desync {
    #[error("expected turn-start signal, got {0:?}")]
    MissingTurnStart(Option<u8>),

    #[error("{0} issued before the turn-start signal was consumed")]
    OrderBeforeReadiness(OrderKind),

    #[error("readiness announced twice in the same turn")]
    ReadinessRepeated,
}

/// Every failure the client can report.
#[derive(Debug, thiserror::Error)]
pub enum ChaserError {
    /// The TCP connection or the name handshake could not be established.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("connection i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to sync with server: {0}")]
    Desync(#[from] Desync),

    /// The server reported that the game is over.
    #[error("Game Set!!")]
    GameFinished,

    #[error("malformed server reply: {0}")]
    Protocol(#[from] CodecError),

    /// An earlier failure left the client unusable.
    #[error("client is not connected")]
    NotConnected,
}

/// Fieldless mirror of [`ChaserError`] for callers that branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Connect,
    Io,
    Desync,
    GameFinished,
    Protocol,
    NotConnected,
}

impl ChaserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChaserError::Connect { .. } => ErrorKind::Connect,
            ChaserError::Io(_) => ErrorKind::Io,
            ChaserError::Desync(_) => ErrorKind::Desync,
            ChaserError::GameFinished => ErrorKind::GameFinished,
            ChaserError::Protocol(_) => ErrorKind::Protocol,
            ChaserError::NotConnected => ErrorKind::NotConnected,
        }
    }

    /// True when the connection that produced this error must be discarded.
    /// Only a failed connect leaves nothing behind to discard.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChaserError::Connect { .. })
    }

    pub(crate) fn connect(addr: impl Into<String>, source: io::Error) -> Self {
        ChaserError::Connect {
            addr: addr.into(),
            source,
        }
    }
}
