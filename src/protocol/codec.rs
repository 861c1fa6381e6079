//! Text codec for the CHaser wire protocol.
//!
//! Everything here is pure: bytes in, values out. The transport and the turn
//! sequencer decide when each function is called.

use alloc::format;
use alloc::string::{String, ToString};

use super::config::{LINE_TERMINATOR, RESPONSE_LEN, SNAPSHOT_CELLS, TURN_END, TURN_START};
use super::field::TurnSnapshot;
use super::order::OrderKind;

/// Reasons a payload could not be encoded or decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("reply too short: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },

    #[error("non-digit byte {byte:#04x} at position {position}")]
    NonDigit { position: usize, byte: u8 },

    #[error("unknown game status digit {0}")]
    UnknownStatus(u8),

    #[error("unknown field cell digit {digit} at position {position}")]
    UnknownCell { position: usize, digit: u8 },

    #[error("unknown order code {0:?}")]
    UnknownOrderCode(String),

    #[error("invalid display name: {0}")]
    InvalidName(&'static str),
}

/// A syntactically valid reply: ten digits, not yet interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseFrame {
    pub status: u8,
    pub cells: [u8; SNAPSHOT_CELLS],
}

pub fn encode_order(order: OrderKind) -> String {
    format!("{}{}", order.code(), LINE_TERMINATOR)
}

/// Turn-end acknowledgment sent after every non-readiness reply.
pub fn encode_control_ack() -> String {
    format!("{TURN_END}{LINE_TERMINATOR}")
}

/// Handshake line carrying the player's display name.
pub fn encode_handshake(name: &str) -> Result<String, CodecError> {
    if name.is_empty() {
        return Err(CodecError::InvalidName("name is empty"));
    }
    if name.contains(['\r', '\n']) {
        return Err(CodecError::InvalidName("name contains a line break"));
    }
    Ok(format!("{name}{LINE_TERMINATOR}"))
}

pub fn decode_turn_start_signal(bytes: &[u8]) -> bool {
    bytes.first() == Some(&TURN_START)
}

/// Parse an order line as a server would. The terminator is optional.
pub fn decode_order(bytes: &[u8]) -> Result<OrderKind, CodecError> {
    let line = bytes.strip_suffix(LINE_TERMINATOR.as_bytes()).unwrap_or(bytes);
    core::str::from_utf8(line)
        .ok()
        .and_then(OrderKind::from_code)
        .ok_or_else(|| CodecError::UnknownOrderCode(String::from_utf8_lossy(line).to_string()))
}

/// Split the first ten bytes of a reply into the status and cell digits.
/// Anything after the tenth byte is ignored.
pub fn decode_frame(bytes: &[u8]) -> Result<ResponseFrame, CodecError> {
    if bytes.len() < RESPONSE_LEN {
        return Err(CodecError::Truncated {
            expected: RESPONSE_LEN,
            got: bytes.len(),
        });
    }
    let mut digits = [0u8; RESPONSE_LEN];
    for (position, (&byte, slot)) in bytes.iter().zip(digits.iter_mut()).enumerate() {
        if !byte.is_ascii_digit() {
            return Err(CodecError::NonDigit { position, byte });
        }
        *slot = byte - b'0';
    }
    let mut cells = [0u8; SNAPSHOT_CELLS];
    cells.copy_from_slice(&digits[1..]);
    Ok(ResponseFrame {
        status: digits[0],
        cells,
    })
}

pub fn decode_response(bytes: &[u8]) -> Result<TurnSnapshot, CodecError> {
    TurnSnapshot::try_from(decode_frame(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_keeps_raw_status_digit() {
        let frame = decode_frame(b"7000000000").unwrap();
        assert_eq!(frame.status, 7);
        assert_eq!(
            decode_response(b"7000000000").unwrap_err(),
            CodecError::UnknownStatus(7)
        );
    }

    #[test]
    fn non_digit_reports_position() {
        assert_eq!(
            decode_frame(b"01230x0000").unwrap_err(),
            CodecError::NonDigit {
                position: 5,
                byte: b'x'
            }
        );
    }

    #[test]
    fn handshake_rejects_line_breaks() {
        assert!(encode_handshake("Al\r\nice").is_err());
        assert!(encode_handshake("").is_err());
        assert_eq!(encode_handshake("Alice").unwrap(), "Alice\r\n");
    }
}
