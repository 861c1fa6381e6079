#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod player;
pub mod protocol;

#[cfg(feature = "std")]
mod config;
#[cfg(feature = "std")]
pub mod controller;
#[cfg(feature = "std")]
pub mod error;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod observer;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
pub mod sequencer;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
mod ui;

pub use player::*;
pub use protocol::{
    CodecError, Direction, FieldCell, GameStatus, OrderFamily, OrderKind, TurnSnapshot,
};

#[cfg(feature = "std")]
pub use config::*;
#[cfg(feature = "std")]
pub use controller::Controller;
#[cfg(feature = "std")]
pub use error::{ChaserError, Desync, ErrorKind, Result};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
#[cfg(feature = "std")]
pub use observer::{LogObserver, NoopObserver, TurnObserver};
#[cfg(feature = "std")]
pub use sequencer::{Phase, TurnSequencer};
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::CloseHandle, tcp::TcpConnection, Transport};
#[cfg(feature = "std")]
pub use ui::{render_snapshot, ConsoleObserver};
