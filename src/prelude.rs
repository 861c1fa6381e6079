//! Commonly used types for writing a client.

pub use crate::{
    ChaserError, ClientConfig, Controller, Direction, ErrorKind, FieldCell, GameStatus, OrderKind,
    Player, RandomWalker, TurnObserver, TurnSequencer, TurnSnapshot,
};

pub use crate::transport::{in_memory::InMemoryTransport, tcp::TcpConnection, Transport};
