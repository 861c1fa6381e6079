//! CHaser wire protocol (no_std compatible)
//!
//! Orders, replies and the text codec between them. Nothing in here performs
//! I/O, so it compiles with only `alloc`.

pub mod codec;
pub mod config;
pub mod field;
pub mod order;

pub use codec::{
    decode_frame, decode_order, decode_response, decode_turn_start_signal, encode_control_ack,
    encode_handshake, encode_order, CodecError, ResponseFrame,
};
pub use config::*;
pub use field::{FieldCell, GameStatus, TurnSnapshot};
pub use order::{Direction, OrderFamily, OrderKind};
